use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search category must be non-empty")]
    EmptyCategory,

    #[error("vendor source unavailable: {0}")]
    Source(String),
}
