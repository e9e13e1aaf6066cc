//! Derived item status
//!
//! Status is computed on every read from `(current_stock, reorder_level,
//! is_ordered)` and never stored. An outstanding order suppresses urgency
//! even when stock is still at or below the reorder level; that is policy,
//! not an accident.

use serde::{Deserialize, Serialize};

use crate::inventory::item::InventoryItem;

/// Operational status of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// At or below reorder level with no outstanding order
    UrgentReorder,

    /// A replenishment order is outstanding
    OrderPlaced,

    /// Above reorder level, nothing outstanding
    WellStocked,
}

impl ItemStatus {
    /// Sort priority: higher means shown first
    pub fn priority(&self) -> u8 {
        match self {
            ItemStatus::UrgentReorder => 2,
            ItemStatus::OrderPlaced => 1,
            ItemStatus::WellStocked => 0,
        }
    }

    /// Human-readable status badge text
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemStatus::UrgentReorder => "Urgent Reorder",
            ItemStatus::OrderPlaced => "Order Placed",
            ItemStatus::WellStocked => "Well Stocked",
        }
    }
}

/// Classify an item into exactly one status
///
/// Total and pure: numeric invariants are enforced at write time, so every
/// item the store hands back maps to a status. The reorder boundary is
/// inclusive (`stock == reorder_level` is urgent when not ordered).
pub fn classify(item: &InventoryItem) -> ItemStatus {
    let low = item.current_stock <= item.reorder_level;

    if low && !item.is_ordered {
        ItemStatus::UrgentReorder
    } else if item.is_ordered {
        ItemStatus::OrderPlaced
    } else {
        ItemStatus::WellStocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::item::test_support::item;

    #[test]
    fn test_low_stock_unordered_is_urgent() {
        assert_eq!(classify(&item("Flour", 2.0, 10.0, false)), ItemStatus::UrgentReorder);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert_eq!(classify(&item("Salt", 10.0, 10.0, false)), ItemStatus::UrgentReorder);
    }

    #[test]
    fn test_ordered_dominates_stock_depth() {
        // Even fully depleted stock reads as OrderPlaced while an order is out.
        assert_eq!(classify(&item("Rice", 0.0, 100.0, true)), ItemStatus::OrderPlaced);
    }

    #[test]
    fn test_ordered_without_delivery_date_is_not_well_stocked() {
        let mut beans = item("Beans", 1.0, 5.0, true);
        beans.expected_delivery = None;
        assert_eq!(classify(&beans), ItemStatus::OrderPlaced);
    }

    #[test]
    fn test_healthy_stock_is_well_stocked() {
        assert_eq!(classify(&item("Oil", 20.0, 5.0, false)), ItemStatus::WellStocked);
    }

    #[test]
    fn test_ordered_with_healthy_stock_reads_order_placed() {
        assert_eq!(classify(&item("Sugar", 50.0, 5.0, true)), ItemStatus::OrderPlaced);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(ItemStatus::UrgentReorder.priority() > ItemStatus::OrderPlaced.priority());
        assert!(ItemStatus::OrderPlaced.priority() > ItemStatus::WellStocked.priority());
    }
}
