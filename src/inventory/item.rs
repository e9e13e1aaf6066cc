//! Inventory item model
//!
//! `InventoryItem` is owned by the document store: ids and timestamps are
//! store-assigned and the core only reads or derives from them. Writes go
//! through [`NewItem`] (validated draft) and [`ItemPatch`] (partial update).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PantryError, Result};

/// Opaque item identifier, assigned by the store on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Generate a fresh store-side identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Measurement unit for an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    L,
    Pcs,
    Case,
    Box,
}

impl Unit {
    /// Label as shown next to a quantity ("12.5 kg")
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::L => "L",
            Unit::Pcs => "pcs",
            Unit::Case => "case",
            Unit::Box => "box",
        }
    }

    /// Parse a unit label (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "l" => Ok(Unit::L),
            "pcs" => Ok(Unit::Pcs),
            "case" => Ok(Unit::Case),
            "box" => Ok(Unit::Box),
            other => Err(PantryError::Validation(format!(
                "unknown unit '{}' (expected kg, L, pcs, case or box)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An ingredient tracked by the restaurant
///
/// `is_ordered == true` with `expected_delivery == None` is a valid transient
/// state: the order was just placed and the date is still pending. It must
/// never be displayed as "Well Stocked" (see `status::classify`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub current_stock: f64,
    pub reorder_level: f64,
    pub unit: Unit,
    pub unit_cost: f64,
    pub primary_vendor: String,
    pub vendor_contact: String,
    pub is_ordered: bool,
    pub expected_delivery: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Current stock valued at unit cost
    pub fn total_stock_value(&self) -> f64 {
        self.current_stock * self.unit_cost
    }
}

/// Validated draft for creating an item
///
/// Numeric invariants are enforced here, at write time, so the classifier
/// and projector can stay total over whatever the store hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub current_stock: f64,
    pub reorder_level: f64,
    pub unit: Unit,
    pub unit_cost: f64,
    pub primary_vendor: String,
    pub vendor_contact: String,
}

impl NewItem {
    /// Check the write-time invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PantryError::Validation("name cannot be empty".to_string()));
        }
        for (field, value) in [
            ("current_stock", self.current_stock),
            ("reorder_level", self.reorder_level),
            ("unit_cost", self.unit_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PantryError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// Partial update applied by the store; `None` fields are left untouched
///
/// Editing an item does not touch `is_ordered` / `expected_delivery` unless
/// the patch sets them, so a plain edit preserves outstanding-order state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub current_stock: Option<f64>,
    pub reorder_level: Option<f64>,
    pub unit: Option<Unit>,
    pub unit_cost: Option<f64>,
    pub primary_vendor: Option<String>,
    pub vendor_contact: Option<String>,
    pub is_ordered: Option<bool>,
    pub expected_delivery: Option<Option<NaiveDate>>,
}

impl ItemPatch {
    /// Patch that marks an item as ordered with an expected delivery date
    pub fn mark_ordered(delivery: NaiveDate) -> Self {
        Self {
            is_ordered: Some(true),
            expected_delivery: Some(Some(delivery)),
            ..Self::default()
        }
    }

    /// Check the write-time invariants on the fields being changed
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(PantryError::Validation("name cannot be empty".to_string()));
            }
        }
        for (field, value) in [
            ("current_stock", self.current_stock),
            ("reorder_level", self.reorder_level),
            ("unit_cost", self.unit_cost),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(PantryError::Validation(format!(
                        "{} must be a non-negative number, got {}",
                        field, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Apply this patch to an item in place (timestamps are the store's job)
    pub fn apply_to(&self, item: &mut InventoryItem) {
        if let Some(name) = &self.name {
            item.name = name.trim().to_string();
        }
        if let Some(stock) = self.current_stock {
            item.current_stock = stock;
        }
        if let Some(level) = self.reorder_level {
            item.reorder_level = level;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(cost) = self.unit_cost {
            item.unit_cost = cost;
        }
        if let Some(vendor) = &self.primary_vendor {
            item.primary_vendor = vendor.clone();
        }
        if let Some(contact) = &self.vendor_contact {
            item.vendor_contact = contact.clone();
        }
        if let Some(ordered) = self.is_ordered {
            item.is_ordered = ordered;
        }
        if let Some(delivery) = self.expected_delivery {
            item.expected_delivery = delivery;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build an item with sensible defaults for unit tests
    pub fn item(name: &str, stock: f64, reorder_level: f64, is_ordered: bool) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id: ItemId::generate(),
            name: name.to_string(),
            current_stock: stock,
            reorder_level,
            unit: Unit::Kg,
            unit_cost: 10.0,
            primary_vendor: String::new(),
            vendor_contact: String::new(),
            is_ordered,
            expected_delivery: None,
            created_at: now,
            updated_at: now,
        }
    }
}
