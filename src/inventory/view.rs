//! Inventory view projection
//!
//! Pure recomputation over the full inventory for display: free-text search,
//! optional urgent-only filter, then a stable status-priority sort. Runs on
//! every input change; never mutates or caches.

use crate::inventory::item::InventoryItem;
use crate::inventory::status::{classify, ItemStatus};

/// Project the inventory for display
///
/// Pipeline order is fixed:
/// 1. non-empty `search_term` keeps items whose name or primary vendor
///    contains the term case-insensitively (empty term is a no-op);
/// 2. `urgent_only` keeps UrgentReorder items;
/// 3. stable sort by status priority, urgent first; ties keep their
///    relative order (`sort_by_key` is stable).
pub fn project(items: &[InventoryItem], search_term: &str, urgent_only: bool) -> Vec<InventoryItem> {
    let term = search_term.trim().to_lowercase();

    let mut view: Vec<InventoryItem> = items
        .iter()
        .filter(|item| {
            term.is_empty()
                || item.name.to_lowercase().contains(&term)
                || item.primary_vendor.to_lowercase().contains(&term)
        })
        .filter(|item| !urgent_only || classify(item) == ItemStatus::UrgentReorder)
        .cloned()
        .collect();

    view.sort_by_key(|item| std::cmp::Reverse(classify(item).priority()));
    view
}
