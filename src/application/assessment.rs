//! Assessment boundary: the questionnaire flow's `analyze` operation.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::normalize_assessment;
use crate::analysis::recommend::recommend;
use crate::analysis::scoring::{RiskModel, SelfReportModel};
use crate::domain::{AssessmentRecord, HormonalReport, RiskLevel};
use crate::Result;

/// The analysis payload returned to the caller: the risk assessment plus the
/// derived figures the results page displays alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnalysis {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hormonal_analysis: Option<HormonalReport>,

    /// Rounded to one decimal
    pub bmi: f64,
    pub symptom_count: usize,

    /// Rounded to one decimal
    pub avg_severity: f64,

    pub recommendations: Vec<String>,
}

/// Response envelope for the `analyze` boundary.
///
/// Failures here are generic by design: the questionnaire flow shows a
/// single retry message, unlike the predictive flow's structured details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AssessmentAnalysis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the full pipeline over an already-parsed record.
///
/// # Errors
/// Returns a validation error when height or weight is missing or
/// implausible, or a lab value is negative.
pub fn analyze_record(record: &AssessmentRecord) -> Result<AssessmentAnalysis> {
    let features = normalize_assessment(record)?;
    let assessment = SelfReportModel.evaluate(&features);
    let recommendations = recommend(&features, &assessment);

    tracing::info!(
        "Assessment analyzed: score={}, level={}, factors={}",
        assessment.score,
        assessment.level,
        assessment.factors.len()
    );

    Ok(AssessmentAnalysis {
        risk_score: assessment.score,
        risk_level: assessment.level,
        risk_factors: assessment.factors,
        hormonal_analysis: assessment.hormonal,
        bmi: round1(features.bmi),
        symptom_count: features.symptom_count(),
        avg_severity: round1(features.avg_severity),
        recommendations,
    })
}

/// Parse a JSON body and run the pipeline, never panicking on bad input.
#[must_use]
pub fn analyze(body: &str) -> AnalyzeResponse {
    let outcome = serde_json::from_str::<AssessmentRecord>(body)
        .map_err(crate::LunaraError::from)
        .and_then(|record| analyze_record(&record));

    match outcome {
        Ok(analysis) => AnalyzeResponse {
            success: true,
            analysis: Some(analysis),
            error: None,
        },
        Err(err) => {
            tracing::error!("Assessment analysis failed: {err}");
            AnalyzeResponse {
                success: false,
                analysis: None,
                error: Some("Failed to analyze data".to_string()),
            }
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
