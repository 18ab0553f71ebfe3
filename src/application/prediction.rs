//! Prediction boundary: the clinical-dataset `predict` operation.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::normalize_clinical;
use crate::analysis::scoring::{ClinicalModel, RiskModel};
use crate::domain::{ClinicalRecord, LikelihoodTier};
use crate::{LunaraError, Result};

/// The prediction payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionView {
    /// `"PCOS Likely"` or `"PCOS Unlikely"` (cut at likelihood 0.6)
    pub diagnosis: String,

    /// Deterministic, in [0.75, 0.95]
    pub confidence: f64,

    /// Accumulated likelihood in [0.0, 1.0], rounded to three decimals
    pub likelihood: f64,

    pub tier: LikelihoodTier,
    pub recommendation: String,
    pub key_findings: Vec<String>,
    pub risk_indicators: Vec<String>,
}

/// Response envelope for the `predict` boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionView>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One entry per unit violation; present only on validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Run the clinical pipeline over an already-parsed record.
///
/// # Errors
/// Returns a validation error carrying every unit violation; no score is
/// computed in that case.
pub fn predict_record(record: &ClinicalRecord) -> Result<PredictionView> {
    let features = normalize_clinical(record)?;
    let prediction = ClinicalModel.evaluate(&features);

    tracing::info!(
        "Prediction complete: likelihood={:.3}, tier={}, diagnosis={}",
        prediction.likelihood,
        prediction.tier,
        prediction.diagnosis_label()
    );

    Ok(PredictionView {
        diagnosis: prediction.diagnosis_label().to_string(),
        confidence: prediction.confidence,
        likelihood: (prediction.likelihood * 1000.0).round() / 1000.0,
        tier: prediction.tier,
        recommendation: prediction.recommendation,
        key_findings: prediction.key_findings,
        risk_indicators: prediction.risk_indicators,
    })
}

/// Parse a JSON body and run the clinical pipeline.
///
/// Unit violations come back as a structured `details` list so the caller
/// can surface every problem at once; anything else is generic.
#[must_use]
pub fn predict(body: &str) -> PredictResponse {
    let record = match serde_json::from_str::<ClinicalRecord>(body) {
        Ok(record) => record,
        Err(err) => {
            tracing::error!("Prediction body unparseable: {err}");
            return PredictResponse {
                success: false,
                prediction: None,
                error: Some("Failed to generate prediction".to_string()),
                details: None,
            };
        }
    };

    match predict_record(&record) {
        Ok(prediction) => PredictResponse {
            success: true,
            prediction: Some(prediction),
            error: None,
            details: None,
        },
        Err(LunaraError::Validation(violations)) => {
            tracing::warn!(
                "Prediction input rejected: {} violation(s)",
                violations.len()
            );
            PredictResponse {
                success: false,
                prediction: None,
                error: Some("Input validation failed".to_string()),
                details: Some(violations),
            }
        }
        Err(err) => {
            tracing::error!("Prediction failed: {err}");
            PredictResponse {
                success: false,
                prediction: None,
                error: Some("Failed to generate prediction".to_string()),
                details: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_happy_path() {
        let response = predict(
            r#"{
                "Age": 24,
                "Height": 160,
                "Weight": 80,
                "CycleRegularity": "Irregular",
                "FSH": 4.0,
                "LH": 10.0,
                "AMH": 6.5,
                "Follicle_L": 14,
                "HairGrowth": "Yes"
            }"#,
        );

        assert!(response.success);
        assert!(response.details.is_none());
        let prediction = response.prediction.expect("Should have prediction");
        assert_eq!(prediction.diagnosis, "PCOS Likely");
        assert_eq!(prediction.tier, LikelihoodTier::High);
        assert!(prediction.likelihood > 0.6);
        assert!(prediction
            .key_findings
            .contains(&"Menstrual irregularity detected (Irregular cycle)".to_string()));
    }

    #[test]
    fn test_predict_reports_all_violations() {
        let response = predict(r#"{"Height": 60, "AMH": 80, "TSH": 25}"#);

        assert!(!response.success);
        assert!(response.prediction.is_none());
        assert_eq!(response.error.as_deref(), Some("Input validation failed"));
        let details = response.details.expect("Should have details");
        assert_eq!(details.len(), 3);
        assert_eq!(details[0], "Height must be in cm (range: 100-250)");
    }

    #[test]
    fn test_predict_empty_record_runs_on_medians() {
        let response = predict("{}");
        assert!(response.success);
        let prediction = response.prediction.expect("Should have prediction");
        // Imputed baseline: irregular cycle code, FSH/LH 0.75, WHR 0.89
        assert_eq!(prediction.likelihood, 0.5);
        assert_eq!(prediction.diagnosis, "PCOS Unlikely");
        assert_eq!(prediction.tier, LikelihoodTier::Moderate);
    }

    #[test]
    fn test_predict_malformed_body_is_generic() {
        let response = predict("[1, 2");
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Failed to generate prediction")
        );
        assert!(response.details.is_none());
    }

    #[test]
    fn test_predict_wire_shape() {
        let response = predict(r#"{"Follicle_R": 13}"#);
        let json = serde_json::to_value(&response).expect("Should serialize");

        assert_eq!(json["success"], true);
        assert!(json["prediction"]["keyFindings"].is_array());
        assert!(json["prediction"]["riskIndicators"].is_array());
        assert!(json["prediction"]["confidence"].is_number());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_predict_is_deterministic() {
        let body = r#"{"CycleRegularity": "Irregular", "AMH": 5.1}"#;
        let first = serde_json::to_string(&predict(body)).expect("Should serialize");
        let second = serde_json::to_string(&predict(body)).expect("Should serialize");
        assert_eq!(first, second);
    }
}
