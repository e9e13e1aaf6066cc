//! Inventory domain: item model, derived status, reorder set, view projection

pub mod item;
pub mod reorder;
pub mod status;
pub mod view;

pub use item::{InventoryItem, ItemId, ItemPatch, NewItem, Unit};
pub use reorder::{build_reorder_set, ReorderCandidate};
pub use status::{classify, ItemStatus};
pub use view::project;
