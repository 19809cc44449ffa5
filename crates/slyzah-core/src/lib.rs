//! Domain records and configuration shared by the Slyzah crates.

pub mod app_config;
pub mod config;
pub mod leads;
pub mod vendors;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use leads::{
    aggregate_rating, Lead, LeadDraft, LeadStatus, Quote, QuoteSelection, RatingSummary,
    ReviewDraft, Urgency, MAX_SELECTED_VENDORS,
};
pub use vendors::{load_catalog, parse_catalog, Tier, VendorCatalog, VendorRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vendor catalog at {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vendor catalog: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("{0} must be non-empty")]
    EmptyField(&'static str),

    #[error("a lead needs between 1 and {max} vendors, got {count}")]
    VendorSelection { count: usize, max: usize },

    #[error("vendor '{0}' was not sent this lead")]
    UnknownVendor(String),

    #[error("lead {0} is no longer open")]
    LeadClosed(String),

    #[error("vendor '{0}' has not submitted a quote")]
    MissingQuote(String),

    #[error("lead {0} has no winner yet")]
    NoWinner(String),

    #[error("invalid rating {0}; must be between 1 and 5")]
    InvalidRating(u8),
}
