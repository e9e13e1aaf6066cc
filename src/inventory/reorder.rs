//! Reorder candidate projection
//!
//! Builds the per-analysis working set: urgent, un-ordered items shaped into
//! the data the analyst prompt needs. Candidates are ephemeral and recomputed
//! for every analysis request.

use serde::{Deserialize, Serialize};

use crate::inventory::item::{InventoryItem, Unit};
use crate::inventory::status::{classify, ItemStatus};

/// Read-only projection of an urgent item for one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderCandidate {
    pub name: String,
    pub current_stock: f64,
    pub reorder_level: f64,
    pub unit: Unit,
    pub unit_cost: f64,
    /// current_stock * unit_cost
    pub total_stock_value: f64,
    pub primary_vendor: String,
    pub vendor_contact: String,
}

impl ReorderCandidate {
    fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            current_stock: item.current_stock,
            reorder_level: item.reorder_level,
            unit: item.unit,
            unit_cost: item.unit_cost,
            total_stock_value: item.total_stock_value(),
            primary_vendor: item.primary_vendor.clone(),
            vendor_contact: item.vendor_contact.clone(),
        }
    }
}

/// Filter the full inventory down to reorder candidates
///
/// Stable: output order matches input order, no implicit sort. An empty
/// result is a normal outcome — the orchestrator short-circuits on it.
pub fn build_reorder_set(items: &[InventoryItem]) -> Vec<ReorderCandidate> {
    items
        .iter()
        .filter(|item| classify(item) == ItemStatus::UrgentReorder)
        .map(ReorderCandidate::from_item)
        .collect()
}
