//! Analysis orchestration
//!
//! State machine: `Idle -> Analyzing -> Done(report)`. Entry clears the
//! previous report; an empty reorder set short-circuits to a canned message
//! without spending a network round trip; a trigger that arrives while a run
//! is in flight is rejected, never queued or overlapped.

use tracing::{debug, info};

use crate::analyst::client::{AnalystClient, GenerateTransport};
use crate::analyst::prompt;
use crate::errors::{PantryError, Result};
use crate::inventory::{build_reorder_set, InventoryItem};

/// Canned report when there is nothing to analyze
pub const ALL_STOCKED_MESSAGE: &str =
    "All ingredients are sufficiently stocked or already on order. No action required.";

/// Observable analysis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    /// No analysis requested yet, or previous result cleared
    Idle,

    /// A run is in flight; new triggers are rejected
    Analyzing,

    /// Terminal for one run; holds the report (success and error text are
    /// both valid payloads — only the displayed content differs)
    Done(String),
}

impl AnalysisState {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing)
    }

    /// Report text, if a run has finished
    pub fn report(&self) -> Option<&str> {
        match self {
            AnalysisState::Done(report) => Some(report),
            _ => None,
        }
    }
}

/// Drives one analysis at a time over an injected analyst client
pub struct AnalysisOrchestrator<T: GenerateTransport> {
    client: AnalystClient<T>,
    state: AnalysisState,
}

impl<T: GenerateTransport> AnalysisOrchestrator<T> {
    pub fn new(client: AnalystClient<T>) -> Self {
        Self {
            client,
            state: AnalysisState::Idle,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Run one analysis over the current inventory snapshot
    ///
    /// Returns the report also held in `Done`. Fails only when a run is
    /// already in flight.
    pub async fn run(&mut self, items: &[InventoryItem]) -> Result<&str> {
        if self.state.is_analyzing() {
            return Err(PantryError::AnalysisInProgress);
        }

        // Entry: clear any previous report before doing work.
        self.state = AnalysisState::Analyzing;

        let candidates = build_reorder_set(items);
        if candidates.is_empty() {
            debug!("no reorder candidates, skipping analyst call");
            self.state = AnalysisState::Done(ALL_STOCKED_MESSAGE.to_string());
            return Ok(self.state.report().unwrap_or_default());
        }

        info!(candidates = candidates.len(), "requesting purchasing plan");

        let query = match prompt::build_user_query(&candidates) {
            Ok(query) => query,
            Err(e) => {
                // Same contract as the client: terminal payload is a string.
                self.state = AnalysisState::Done(format!("Error: {}", e));
                return Ok(self.state.report().unwrap_or_default());
            }
        };

        let report = self.client.generate(prompt::SYSTEM_INSTRUCTION, &query).await;
        self.state = AnalysisState::Done(report);
        Ok(self.state.report().unwrap_or_default())
    }
}
