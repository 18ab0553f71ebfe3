//! # Lunara
//!
//! Analytics core for a consumer menstrual-health tracker.
//!
//! This crate provides:
//! - PCOS risk scoring over self-reported questionnaire data
//! - A second, clinical-dataset risk encoding for the predictive flow
//! - Deterministic recommendation generation
//! - Cycle statistics and next-period prediction over a tracked day log
//!
//! ## Architecture
//!
//! The crate is layered:
//! - `domain`: Core business types (records, feature vectors, results)
//! - `analysis`: Pure pipeline stages (normalize, score, recommend, cycle)
//! - `application`: The `analyze` and `predict` request/response boundaries
//!
//! Every pipeline stage is a pure, synchronous function over caller-owned
//! values; nothing in the crate holds state across calls.

pub mod analysis;
pub mod application;
pub mod domain;

pub use domain::{AssessmentRecord, ClinicalRecord, CycleLog, RiskAssessment, RiskLevel};

/// Result type for Lunara operations
pub type Result<T> = std::result::Result<T, LunaraError>;

/// Main error type for Lunara
#[derive(Debug, thiserror::Error)]
pub enum LunaraError {
    /// One or more physiological-range or required-field violations.
    ///
    /// Always carries the complete list so a caller can display every
    /// problem at once.
    #[error("input validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("malformed input: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LunaraError {
    /// The violation list, if this is a validation error.
    #[must_use]
    pub fn violations(&self) -> Option<&[String]> {
        match self {
            Self::Validation(v) => Some(v),
            Self::Malformed(_) => None,
        }
    }
}
