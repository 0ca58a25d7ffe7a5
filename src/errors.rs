use crate::record::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to fetch dataset '{name}': {reason}")]
    Fetch { name: String, reason: String },

    #[error("dataset '{name}' is not valid JSON: {reason}")]
    InvalidJson { name: String, reason: String },

    #[error("dataset '{name}' has no 'data' array")]
    InvalidStructure { name: String },

    #[error("no record with id {id}")]
    ItemNotFound { id: RecordId },

    #[error("invalid filter: {0}")]
    Filter(String),

    #[error("failed to load dataset '{name}': {reason}")]
    Load { name: String, reason: String },
}

impl StoreError {
    /// Stable machine-readable discriminant, intended for callers mapping
    /// errors onto transport-level codes.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "FETCH_ERROR",
            Self::InvalidJson { .. } => "INVALID_JSON",
            Self::InvalidStructure { .. } => "INVALID_STRUCTURE",
            Self::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            Self::Filter(_) => "INVALID_FILTER",
            Self::Load { .. } => "LOAD_ERROR",
        }
    }
}
