//! Application layer: the two request/response boundaries.
//!
//! Each boundary parses a JSON body, runs the analysis pipeline, and wraps
//! the outcome in a `success`-flagged envelope. The `analyze` boundary
//! reports failures generically; the `predict` boundary reports unit
//! violations as a structured `details` list.

pub mod assessment;
pub mod prediction;

pub use assessment::{analyze, analyze_record, AnalyzeResponse, AssessmentAnalysis};
pub use prediction::{predict, predict_record, PredictResponse, PredictionView};
