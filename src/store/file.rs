//! JSON-file-backed document store
//!
//! Local [`DocumentStore`] implementation used by the CLI and tests. The
//! whole collection is held in memory, persisted to a single JSON file on
//! every mutation, and broadcast as a full snapshot through a watch channel.
//! One file is one user's collection; scoping is done by path.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

use crate::errors::{PantryError, Result};
use crate::inventory::{InventoryItem, ItemId, ItemPatch, NewItem};
use crate::store::DocumentStore;

/// File-persisted inventory collection
pub struct FileStore {
    path: Option<PathBuf>,
    items: RwLock<Vec<InventoryItem>>,
    tx: watch::Sender<Vec<InventoryItem>>,
}

impl FileStore {
    /// Open (or create) the collection backed by `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let items: Vec<InventoryItem> = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = items.len(), "opened inventory store");

        let (tx, _) = watch::channel(items.clone());
        Ok(Self {
            path: Some(path),
            items: RwLock::new(items),
            tx,
        })
    }

    /// Purely in-memory collection (tests, demos)
    pub fn in_memory() -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            path: None,
            items: RwLock::new(Vec::new()),
            tx,
        }
    }

    /// Persist then broadcast the current collection
    fn commit(&self, items: &[InventoryItem]) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(items)?;
            if let Err(e) = fs::write(path, contents) {
                warn!(path = %path.display(), error = %e, "failed to persist inventory");
                return Err(e.into());
            }
        }

        // Receivers may all be gone; that only means nobody is watching.
        let _ = self.tx.send(items.to_vec());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn create(&self, draft: NewItem) -> Result<ItemId> {
        draft.validate()?;

        let now = Utc::now();
        let item = InventoryItem {
            id: ItemId::generate(),
            name: draft.name.trim().to_string(),
            current_stock: draft.current_stock,
            reorder_level: draft.reorder_level,
            unit: draft.unit,
            unit_cost: draft.unit_cost,
            primary_vendor: draft.primary_vendor,
            vendor_contact: draft.vendor_contact,
            is_ordered: false,
            expected_delivery: None,
            created_at: now,
            updated_at: now,
        };
        let id = item.id.clone();

        let mut items = self.items.write().await;
        items.push(item);
        self.commit(&items)?;

        debug!(%id, "created inventory item");
        Ok(id)
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<()> {
        patch.validate()?;

        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| PantryError::ItemNotFound { id: id.to_string() })?;

        patch.apply_to(item);
        item.updated_at = Utc::now();
        self.commit(&items)?;

        debug!(%id, "updated inventory item");
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(PantryError::ItemNotFound { id: id.to_string() });
        }
        self.commit(&items)?;

        debug!(%id, "deleted inventory item");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<InventoryItem>> {
        self.tx.subscribe()
    }

    async fn snapshot(&self) -> Vec<InventoryItem> {
        self.items.read().await.clone()
    }
}
