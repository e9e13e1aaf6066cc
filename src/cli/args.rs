//! Command-line argument parsing
//!
//! clap-based CLI with one subcommand per inventory operation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pantrywatch - restaurant inventory with an AI supply chain analyst
#[derive(Parser, Debug)]
#[command(name = "pantrywatch")]
#[command(version = "0.3.0")]
#[command(about = "Track ingredients and ask the AI analyst for a purchasing plan", long_about = None)]
pub struct Args {
    /// Inventory file path (overrides the configured store path)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new ingredient
    Add {
        /// Display name
        name: String,

        /// Current stock quantity
        #[arg(long)]
        stock: f64,

        /// Reorder threshold
        #[arg(long)]
        reorder_level: f64,

        /// Unit: kg, L, pcs, case or box
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Cost per unit
        #[arg(long)]
        cost: f64,

        /// Primary vendor
        #[arg(long, default_value = "")]
        vendor: String,

        /// Vendor contact
        #[arg(long, default_value = "")]
        contact: String,
    },

    /// List inventory with status badges
    List {
        /// Case-insensitive match on name or vendor
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show urgent items only
        #[arg(short, long)]
        urgent: bool,
    },

    /// Mark an item as ordered with an expected delivery date
    MarkOrdered {
        /// Item id
        id: String,

        /// Expected delivery date (YYYY-MM-DD)
        #[arg(long)]
        delivery: String,
    },

    /// Remove an item
    Remove {
        /// Item id
        id: String,
    },

    /// Ask the AI analyst for a purchasing plan over urgent items
    Analyze,
}
