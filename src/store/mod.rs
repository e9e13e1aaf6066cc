//! Document store seam
//!
//! The inventory collection lives in an external document store. The core
//! talks to it through [`DocumentStore`], injected at construction, so the
//! domain logic stays testable without a live backend. Subscriptions deliver
//! full snapshots, never deltas: readers always recompute their views from
//! the complete current collection.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::errors::Result;
use crate::inventory::{InventoryItem, ItemId, ItemPatch, NewItem};

pub mod file;

pub use file::FileStore;

/// CRUD + snapshot subscription over one user's inventory collection
///
/// `created_at` / `updated_at` are assigned by the store; callers never
/// fabricate timestamps. Write and delete failures surface as `Err`, not as
/// silent no-ops.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create an item, returning its store-assigned id
    async fn create(&self, draft: NewItem) -> Result<ItemId>;

    /// Apply a partial update; refreshes `updated_at`, never `created_at`
    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<()>;

    /// Remove an item
    async fn delete(&self, id: &ItemId) -> Result<()>;

    /// Watch the collection; the receiver holds the latest full snapshot
    fn subscribe(&self) -> watch::Receiver<Vec<InventoryItem>>;

    /// Read the current full snapshot
    async fn snapshot(&self) -> Vec<InventoryItem>;
}
