//! Quote requests ("leads") and the records hanging off them.
//!
//! A lead is seeded from a ranked search: the customer picks up to
//! [`MAX_SELECTED_VENDORS`] vendors, the lead is sent to each of them, vendors
//! answer with quotes, and the customer picks a winner and later reviews them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// Most vendors a single lead may be sent to.
pub const MAX_SELECTED_VENDORS: usize = 4;

/// Vendors picked from a result list, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSelection {
    vendor_ids: Vec<String>,
}

impl QuoteSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a vendor. Selecting beyond the cap is ignored.
    ///
    /// Returns whether the vendor is selected after the call.
    pub fn toggle(&mut self, vendor_id: &str) -> bool {
        if let Some(pos) = self.vendor_ids.iter().position(|id| id == vendor_id) {
            self.vendor_ids.remove(pos);
            return false;
        }
        if self.vendor_ids.len() < MAX_SELECTED_VENDORS {
            self.vendor_ids.push(vendor_id.to_string());
            return true;
        }
        false
    }

    #[must_use]
    pub fn contains(&self, vendor_id: &str) -> bool {
        self.vendor_ids.iter().any(|id| id == vendor_id)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vendor_ids.len() >= MAX_SELECTED_VENDORS
    }

    #[must_use]
    pub fn vendor_ids(&self) -> &[String] {
        &self.vendor_ids
    }

    #[must_use]
    pub fn into_vendor_ids(self) -> Vec<String> {
        self.vendor_ids
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    #[default]
    Standard,
    Comparing,
}

impl Urgency {
    /// Wording shown to vendors in lead notifications.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Urgency::Urgent => "Need service urgently",
            Urgency::Standard => "Service not needed urgently",
            Urgency::Comparing => "Just comparing quotes",
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Urgency::Urgent),
            "standard" => Ok(Urgency::Standard),
            "comparing" => Ok(Urgency::Comparing),
            other => Err(format!(
                "unknown urgency '{other}'; expected urgent, standard, or comparing"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Open,
    Assigned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub vendor_name: String,
    pub amount: f64,
    pub message: Option<String>,
    pub vendor_email: Option<String>,
}

/// Customer input collected before a lead is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub customer_id: String,
    pub category: String,
    /// Resolved province, passed through from location resolution.
    pub province: String,
    /// Resolved region, passed through from location resolution.
    pub region: String,
    pub town: String,
    pub address: String,
    pub issue_description: String,
    pub urgency: Urgency,
    pub vendor_ids: Vec<String>,
}

impl LeadDraft {
    /// Validate the draft and turn it into an open lead.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyField`] when the category or issue is blank,
    /// and [`CoreError::VendorSelection`] unless 1 to [`MAX_SELECTED_VENDORS`]
    /// distinct vendors were selected.
    pub fn into_lead(self, now: DateTime<Utc>) -> Result<Lead, CoreError> {
        if self.category.trim().is_empty() {
            return Err(CoreError::EmptyField("category"));
        }
        if self.issue_description.trim().is_empty() {
            return Err(CoreError::EmptyField("issue description"));
        }

        let mut vendor_ids: Vec<String> = Vec::with_capacity(self.vendor_ids.len());
        for id in self.vendor_ids {
            if !vendor_ids.contains(&id) {
                vendor_ids.push(id);
            }
        }
        if vendor_ids.is_empty() || vendor_ids.len() > MAX_SELECTED_VENDORS {
            return Err(CoreError::VendorSelection {
                count: vendor_ids.len(),
                max: MAX_SELECTED_VENDORS,
            });
        }

        Ok(Lead {
            id: Uuid::new_v4().to_string(),
            customer_id: self.customer_id,
            category: self.category.trim().to_string(),
            province: self.province,
            region: self.region,
            town: self.town,
            address: self.address,
            issue_description: self.issue_description,
            urgency: self.urgency,
            vendor_ids,
            status: LeadStatus::Open,
            quotes: BTreeMap::new(),
            winner_id: None,
            has_reviewed: false,
            created_at: now,
            assigned_at: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub customer_id: String,
    pub category: String,
    pub province: String,
    pub region: String,
    pub town: String,
    pub address: String,
    pub issue_description: String,
    pub urgency: Urgency,
    pub vendor_ids: Vec<String>,
    pub status: LeadStatus,
    /// Quotes keyed by vendor id.
    pub quotes: BTreeMap<String, Quote>,
    pub winner_id: Option<String>,
    pub has_reviewed: bool,
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Record (or replace) a vendor's quote.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LeadClosed`] once a winner was picked and
    /// [`CoreError::UnknownVendor`] for vendors the lead was not sent to.
    pub fn record_quote(&mut self, vendor_id: &str, quote: Quote) -> Result<(), CoreError> {
        if self.status != LeadStatus::Open {
            return Err(CoreError::LeadClosed(self.id.clone()));
        }
        if !self.vendor_ids.iter().any(|id| id == vendor_id) {
            return Err(CoreError::UnknownVendor(vendor_id.to_string()));
        }
        self.quotes.insert(vendor_id.to_string(), quote);
        Ok(())
    }

    /// Award the lead to a quoting vendor and return the chat id for the
    /// customer/vendor conversation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LeadClosed`] if the lead is already assigned and
    /// [`CoreError::MissingQuote`] if the vendor never quoted.
    pub fn select_winner(
        &mut self,
        vendor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<String, CoreError> {
        if self.status != LeadStatus::Open {
            return Err(CoreError::LeadClosed(self.id.clone()));
        }
        if !self.quotes.contains_key(vendor_id) {
            return Err(CoreError::MissingQuote(vendor_id.to_string()));
        }
        self.status = LeadStatus::Assigned;
        self.winner_id = Some(vendor_id.to_string());
        self.assigned_at = Some(now);
        Ok(chat_id(&self.id, vendor_id))
    }

    #[must_use]
    pub fn winning_quote(&self) -> Option<&Quote> {
        self.winner_id.as_ref().and_then(|id| self.quotes.get(id))
    }

    #[must_use]
    pub fn awaiting_review(&self) -> bool {
        self.winner_id.is_some() && !self.has_reviewed
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NoWinner`] if no vendor has been selected yet.
    pub fn mark_reviewed(&mut self) -> Result<(), CoreError> {
        if self.winner_id.is_none() {
            return Err(CoreError::NoWinner(self.id.clone()));
        }
        self.has_reviewed = true;
        Ok(())
    }
}

/// Chat documents are keyed by lead and winning vendor.
#[must_use]
pub fn chat_id(lead_id: &str, vendor_id: &str) -> String {
    format!("{lead_id}_{vendor_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub vendor_id: String,
    pub lead_id: String,
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] unless the rating is 1 through 5.
    pub fn validate(&self) -> Result<(), CoreError> {
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(CoreError::InvalidRating(self.rating))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place.
    pub rating: f64,
    pub review_count: u32,
}

/// Recompute a vendor's rating from all of its reviews. Zero ratings are
/// treated as missing and skipped.
#[must_use]
pub fn aggregate_rating(ratings: &[u8]) -> Option<RatingSummary> {
    let counted: Vec<u8> = ratings.iter().copied().filter(|r| *r > 0).collect();
    if counted.is_empty() {
        return None;
    }
    let total: u32 = counted.iter().map(|r| u32::from(*r)).sum();
    let review_count = u32::try_from(counted.len()).unwrap_or(u32::MAX);
    let mean = f64::from(total) / f64::from(review_count);
    Some(RatingSummary {
        rating: (mean * 10.0).round() / 10.0,
        review_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(vendor_ids: &[&str]) -> LeadDraft {
        LeadDraft {
            customer_id: "cust-1".to_string(),
            category: "Plumber".to_string(),
            province: "Gauteng".to_string(),
            region: "Sandton/Rivonia".to_string(),
            town: "Rivonia".to_string(),
            address: "12 Main Rd".to_string(),
            issue_description: "Burst geyser".to_string(),
            urgency: Urgency::Urgent,
            vendor_ids: vendor_ids.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn quote(name: &str) -> Quote {
        Quote {
            vendor_name: name.to_string(),
            amount: 1_250.0,
            message: None,
            vendor_email: None,
        }
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut sel = QuoteSelection::new();
        assert!(sel.toggle("a"));
        assert!(sel.contains("a"));
        assert!(!sel.toggle("a"));
        assert!(!sel.contains("a"));
    }

    #[test]
    fn toggle_ignores_fifth_vendor() {
        let mut sel = QuoteSelection::new();
        for id in ["a", "b", "c", "d"] {
            assert!(sel.toggle(id));
        }
        assert!(sel.is_full());
        assert!(!sel.toggle("e"));
        assert_eq!(sel.vendor_ids(), ["a", "b", "c", "d"]);
        // Deselecting frees a slot again.
        sel.toggle("b");
        assert!(sel.toggle("e"));
        assert_eq!(sel.into_vendor_ids(), vec!["a", "c", "d", "e"]);
    }

    #[test]
    fn urgency_parses_and_serializes_lowercase() {
        assert_eq!("URGENT".parse::<Urgency>().unwrap(), Urgency::Urgent);
        assert!("whenever".parse::<Urgency>().is_err());
        let json = serde_json::to_string(&Urgency::Comparing).unwrap();
        assert_eq!(json, "\"comparing\"");
        assert_eq!(Urgency::default(), Urgency::Standard);
    }

    #[test]
    fn into_lead_opens_with_empty_quotes() {
        let lead = draft(&["v1", "v2"]).into_lead(Utc::now()).unwrap();
        assert_eq!(lead.status, LeadStatus::Open);
        assert!(lead.quotes.is_empty());
        assert_eq!(lead.vendor_ids, vec!["v1", "v2"]);
        assert!(!lead.id.is_empty());
    }

    #[test]
    fn into_lead_dedupes_vendor_ids() {
        let lead = draft(&["v1", "v1", "v2"]).into_lead(Utc::now()).unwrap();
        assert_eq!(lead.vendor_ids, vec!["v1", "v2"]);
    }

    #[test]
    fn into_lead_rejects_empty_and_oversized_selection() {
        assert_eq!(
            draft(&[]).into_lead(Utc::now()).unwrap_err(),
            CoreError::VendorSelection { count: 0, max: 4 }
        );
        assert_eq!(
            draft(&["a", "b", "c", "d", "e"])
                .into_lead(Utc::now())
                .unwrap_err(),
            CoreError::VendorSelection { count: 5, max: 4 }
        );
    }

    #[test]
    fn into_lead_rejects_blank_category() {
        let mut d = draft(&["v1"]);
        d.category = "  ".to_string();
        assert_eq!(
            d.into_lead(Utc::now()).unwrap_err(),
            CoreError::EmptyField("category")
        );
    }

    #[test]
    fn lead_serializes_camel_case() {
        let lead = draft(&["v1"]).into_lead(Utc::now()).unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["vendorIds"][0], "v1");
        assert!(json["quotes"].as_object().unwrap().is_empty());
        assert!(json["winnerId"].is_null());
    }

    #[test]
    fn record_quote_only_from_invited_vendors() {
        let mut lead = draft(&["v1"]).into_lead(Utc::now()).unwrap();
        assert_eq!(
            lead.record_quote("v9", quote("Stranger")).unwrap_err(),
            CoreError::UnknownVendor("v9".to_string())
        );
        lead.record_quote("v1", quote("Pipes")).unwrap();
        assert_eq!(lead.quotes.len(), 1);
    }

    #[test]
    fn select_winner_assigns_and_returns_chat_id() {
        let mut lead = draft(&["v1", "v2"]).into_lead(Utc::now()).unwrap();
        lead.record_quote("v2", quote("Drains")).unwrap();
        let chat = lead.select_winner("v2", Utc::now()).unwrap();
        assert_eq!(chat, format!("{}_v2", lead.id));
        assert_eq!(lead.status, LeadStatus::Assigned);
        assert_eq!(lead.winning_quote().map(|q| q.vendor_name.as_str()), Some("Drains"));
        assert!(lead.awaiting_review());
    }

    #[test]
    fn select_winner_requires_quote_and_open_lead() {
        let mut lead = draft(&["v1", "v2"]).into_lead(Utc::now()).unwrap();
        assert_eq!(
            lead.select_winner("v1", Utc::now()).unwrap_err(),
            CoreError::MissingQuote("v1".to_string())
        );
        lead.record_quote("v1", quote("Pipes")).unwrap();
        lead.select_winner("v1", Utc::now()).unwrap();
        assert!(matches!(
            lead.record_quote("v2", quote("Late")),
            Err(CoreError::LeadClosed(_))
        ));
        assert!(matches!(
            lead.select_winner("v1", Utc::now()),
            Err(CoreError::LeadClosed(_))
        ));
    }

    #[test]
    fn mark_reviewed_needs_winner() {
        let mut lead = draft(&["v1"]).into_lead(Utc::now()).unwrap();
        assert!(matches!(lead.mark_reviewed(), Err(CoreError::NoWinner(_))));
        lead.record_quote("v1", quote("Pipes")).unwrap();
        lead.select_winner("v1", Utc::now()).unwrap();
        lead.mark_reviewed().unwrap();
        assert!(!lead.awaiting_review());
    }

    #[test]
    fn review_rating_must_be_one_to_five() {
        let mut review = ReviewDraft {
            vendor_id: "v1".to_string(),
            lead_id: "l1".to_string(),
            rating: 0,
            comment: String::new(),
        };
        assert_eq!(review.validate().unwrap_err(), CoreError::InvalidRating(0));
        review.rating = 5;
        assert!(review.validate().is_ok());
    }

    #[test]
    fn aggregate_rating_rounds_to_one_decimal() {
        let summary = aggregate_rating(&[5, 4, 4]).unwrap();
        assert!((summary.rating - 4.3).abs() < 1e-9);
        assert_eq!(summary.review_count, 3);
    }

    #[test]
    fn aggregate_rating_skips_zero_and_handles_empty() {
        assert!(aggregate_rating(&[]).is_none());
        assert!(aggregate_rating(&[0, 0]).is_none());
        let summary = aggregate_rating(&[0, 3]).unwrap();
        assert_eq!(summary.review_count, 1);
        assert!((summary.rating - 3.0).abs() < 1e-9);
    }
}
