//! Prompt assembly for the supply chain analyst
//!
//! The system instruction is fixed; the user query embeds the serialized
//! reorder candidates for one analysis call.

use crate::errors::Result;
use crate::inventory::ReorderCandidate;

/// Analyst role and response policy sent as the system instruction
pub const SYSTEM_INSTRUCTION: &str = "\
You are the restaurant's Supply Chain Analyst. You receive the list of \
inventory items that are at or below their reorder level with no outstanding \
order. Produce a prioritized purchasing plan following these rules:
1. Weigh each item's remaining stock against its unit cost and total stock value.
2. Suggest an order quantity for each item using a safety margin of 1.5 times its reorder level.
3. Prioritize recommendations by financial impact and urgency.
4. Include the primary vendor and vendor contact for each recommended order.
5. Respond as a single prose paragraph with no lists, headings or bullet points.";

/// Build the user query embedding the candidate set as JSON
pub fn build_user_query(candidates: &[ReorderCandidate]) -> Result<String> {
    let payload = serde_json::to_string_pretty(candidates)?;
    Ok(format!(
        "Analyze the following urgent inventory items and produce the purchasing plan:\n{}",
        payload
    ))
}
