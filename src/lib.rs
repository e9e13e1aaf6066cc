//! pantrywatch - Restaurant inventory tracker with an AI supply chain analyst
//!
//! Tracks ingredients, stock levels, reorder thresholds, vendor data and
//! order status for a single restaurant, and turns the set of items at or
//! below their reorder threshold into a prioritized purchasing plan via an
//! external text-generation endpoint.
//!
//! # Architecture
//!
//! - `inventory`: item model, derived status, reorder set, view projection
//! - `store`: document store seam + local JSON-file implementation
//! - `analyst`: resilient remote caller, prompts, analysis orchestrator
//! - `cli`: thin command-line surface

pub mod analyst;
pub mod cli;
pub mod config;
pub mod errors;
pub mod inventory;
pub mod store;

// Re-export commonly used types
pub use errors::{PantryError, Result};
