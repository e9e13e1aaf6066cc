//! AI supply chain analyst: resilient remote caller, prompt assembly, and
//! the one-at-a-time analysis orchestrator

pub mod client;
pub mod orchestrator;
pub mod prompt;

pub use client::{AnalystClient, GenerateTransport, HttpTransport, DEFAULT_MAX_ATTEMPTS};
pub use orchestrator::{AnalysisOrchestrator, AnalysisState, ALL_STOCKED_MESSAGE};
