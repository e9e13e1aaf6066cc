//! Error types for the pantrywatch core
//!
//! Every fallible operation in the crate returns [`Result`]. The analyst
//! client deliberately does NOT surface errors through this type: its
//! contract is to always hand back a renderable string (see
//! `analyst::client`).

use thiserror::Error;

/// Main error type for inventory and analysis operations
#[derive(Error, Debug)]
pub enum PantryError {
    /// Item lookup failed in the document store
    #[error("Inventory item not found: {id}")]
    ItemNotFound { id: String },

    /// Rejected write (empty name, negative quantity, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A second analysis trigger arrived while one was in flight
    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    /// Store persistence errors
    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// Serialization errors (store file, prompt payload)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for pantrywatch operations
pub type Result<T> = std::result::Result<T, PantryError>;

impl From<anyhow::Error> for PantryError {
    fn from(err: anyhow::Error) -> Self {
        PantryError::Config(err.to_string())
    }
}
