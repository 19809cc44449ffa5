use chrono::Utc;
use serde_json::Value;
use slyzah_core::{LeadDraft, QuoteSelection};

/// Select vendors in flag order. Repeats are kept once and anything past the
/// selection cap is dropped with a warning.
pub(crate) fn select_vendors(vendor_ids: &[String]) -> QuoteSelection {
    let mut selection = QuoteSelection::new();
    for id in vendor_ids {
        if selection.contains(id) {
            continue;
        }
        if !selection.toggle(id) {
            tracing::warn!(vendor_id = %id, "vendor selection is full, ignoring vendor");
        }
    }
    selection
}

/// Validate the draft and print the lead record that would be stored.
pub(crate) fn run_quote(draft: LeadDraft) -> anyhow::Result<Value> {
    let urgency = draft.urgency;
    let lead = draft.into_lead(Utc::now())?;
    tracing::info!(
        lead_id = %lead.id,
        vendors = lead.vendor_ids.len(),
        urgency = urgency.describe(),
        "quote request built"
    );
    Ok(serde_json::to_value(lead)?)
}
