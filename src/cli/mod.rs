//! Command-line surface
//!
//! Thin layer over the core: parses arguments, wires the store and analyst
//! together, prints colored status badges. All domain behavior lives in
//! `inventory`, `store` and `analyst`.

pub mod args;

pub use args::{Args, Commands};

use anyhow::Result;
use colored::Colorize;

use crate::analyst::{AnalysisOrchestrator, AnalystClient, HttpTransport};
use crate::config::Config;
use crate::inventory::{classify, project, ItemPatch, ItemStatus, NewItem, Unit};
use crate::store::{DocumentStore, FileStore};

/// Execute one CLI invocation
pub async fn run(args: Args, config: Config) -> Result<()> {
    let store_path = match &args.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    let store = FileStore::open(&store_path)?;

    match args.command {
        Commands::Add {
            name,
            stock,
            reorder_level,
            unit,
            cost,
            vendor,
            contact,
        } => {
            let draft = NewItem {
                name,
                current_stock: stock,
                reorder_level,
                unit: Unit::parse(&unit)?,
                unit_cost: cost,
                primary_vendor: vendor,
                vendor_contact: contact,
            };
            let id = store.create(draft).await?;
            println!("{} {}", "Added item".green(), id);
        }

        Commands::List { search, urgent } => {
            let items = store.snapshot().await;
            let view = project(&items, &search, urgent);

            if view.is_empty() {
                println!("{}", "No inventory items found.".dimmed());
                return Ok(());
            }

            for item in &view {
                let status = classify(item);
                let badge = match status {
                    ItemStatus::UrgentReorder => status.display_name().red().bold(),
                    ItemStatus::OrderPlaced => status.display_name().blue(),
                    ItemStatus::WellStocked => status.display_name().green(),
                };
                let delivery = match (item.is_ordered, item.expected_delivery) {
                    (true, Some(date)) => format!("  delivery {}", date),
                    _ => String::new(),
                };
                println!(
                    "{}  [{}]  {} {} / reorder at {} {}  (value {:.2}){}",
                    item.id,
                    badge,
                    item.current_stock,
                    item.unit,
                    item.reorder_level,
                    item.unit,
                    item.total_stock_value(),
                    delivery,
                );
                println!("    {}  {}", item.name.bold(), item.primary_vendor.dimmed());
            }
        }

        Commands::MarkOrdered { id, delivery } => {
            let date = delivery
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid delivery date '{}', expected YYYY-MM-DD", delivery))?;
            store.update(&id.as_str().into(), ItemPatch::mark_ordered(date)).await?;
            println!("{} {}", "Marked as ordered:".blue(), id);
        }

        Commands::Remove { id } => {
            store.delete(&id.as_str().into()).await?;
            println!("{} {}", "Removed item".yellow(), id);
        }

        Commands::Analyze => {
            let transport = HttpTransport::new(
                &config.analyst.endpoint,
                &config.api_key()?,
                config.request_timeout(),
            )?;
            let client = AnalystClient::with_retry(
                transport,
                config.analyst.max_attempts,
                std::time::Duration::from_millis(1000),
            );
            let mut orchestrator = AnalysisOrchestrator::new(client);

            let items = store.snapshot().await;
            println!("{}", "Analyzing inventory and generating plan...".blue());
            let report = orchestrator.run(&items).await?;

            println!();
            println!("{}", "AI Supply Chain Analyst Report".bold());
            println!("{}", report);
        }
    }

    Ok(())
}
