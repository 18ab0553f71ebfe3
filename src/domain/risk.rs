//! Risk assessment result types.

use serde::{Deserialize, Serialize};

/// Risk level for the self-report encoding, cut from the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Map a clamped 0-100 score onto its level.
    ///
    /// Cut points: < 30 low, < 50 moderate, < 70 high, else very-high.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            Self::Low
        } else if score < 50 {
            Self::Moderate
        } else if score < 70 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Monitor symptoms",
            Self::High => "High risk - Medical evaluation recommended",
            Self::VeryHigh => "Very high risk - Prompt specialist evaluation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very-high"),
        }
    }
}

/// Result of scoring the self-report encoding.
///
/// Immutable once produced; a new request always produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Accumulated score, clamped to [0, 100]
    pub score: u32,

    pub level: RiskLevel,

    /// One human-readable entry per fired rule, in rule order
    pub factors: Vec<String>,

    /// Omitted entirely when the record carried no lab panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hormonal: Option<HormonalReport>,
}

/// Per-hormone status labels for the lab panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HormonalReport {
    /// LH / FSH rounded to two decimals; `None` when not computable
    pub lh_fsh_ratio: Option<f64>,
    pub testosterone_status: Option<HormoneStatus>,
    pub amh_status: Option<HormoneStatus>,
    pub insulin_status: Option<HormoneStatus>,
    pub glucose_status: Option<HormoneStatus>,

    /// The hormonal rules that fired, in rule order
    pub risk_factors: Vec<String>,
}

/// Status label attached to a single lab value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HormoneStatus {
    Low,
    Normal,
    #[serde(rename = "Moderately High")]
    ModeratelyHigh,
    High,
}

impl std::fmt::Display for HormoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Normal => write!(f, "Normal"),
            Self::ModeratelyHigh => write!(f, "Moderately High"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Likelihood tier for the clinical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikelihoodTier {
    Low,
    Moderate,
    High,
}

impl LikelihoodTier {
    /// Map a 0.0-1.0 likelihood onto its tier.
    ///
    /// Cut points: < 0.3 low, < 0.7 moderate, else high.
    #[must_use]
    pub fn from_likelihood(likelihood: f64) -> Self {
        if likelihood < 0.3 {
            Self::Low
        } else if likelihood < 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for LikelihoodTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Result of scoring the clinical encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalPrediction {
    /// Accumulated likelihood, clamped to [0.0, 1.0]
    pub likelihood: f64,

    pub tier: LikelihoodTier,

    /// Binary diagnosis cut at likelihood > 0.6
    pub pcos_likely: bool,

    /// Deterministic confidence in [0.75, 0.95]: scaled distance between
    /// the likelihood and the 0.6 diagnosis cut
    pub confidence: f64,

    pub key_findings: Vec<String>,
    pub risk_indicators: Vec<String>,

    /// Tiered guidance text keyed off the likelihood
    pub recommendation: String,
}

impl ClinicalPrediction {
    /// The diagnosis label shown to the caller.
    #[must_use]
    pub fn diagnosis_label(&self) -> &'static str {
        if self.pcos_likely {
            "PCOS Likely"
        } else {
            "PCOS Unlikely"
        }
    }
}
