//! Normalized feature vectors, one per scoring encoding.
//!
//! A feature vector is what the normalizer hands to the scoring engine:
//! units validated, categories encoded, clinical absences imputed, derived
//! ratios computed. Derived ratios stay `None` only when their denominator
//! was zero; they are never partially computed.

use serde::{Deserialize, Serialize};

use super::assessment::{CycleRegularity, DietType, ExerciseFrequency};

/// Normalized self-report encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfReportFeatures {
    pub age: Option<f64>,

    /// Height in cm, validated > 0
    pub height: f64,

    /// Weight in kg, validated > 0
    pub weight: f64,

    /// weight / (height/100)²
    pub bmi: f64,

    /// `None` when not stated or unrecognized
    pub cycle_regularity: Option<CycleRegularity>,

    /// Distinct symptom ids, first-occurrence order
    pub symptoms: Vec<String>,

    /// Mean of the reported per-symptom severities; 0 when none reported
    pub avg_severity: f64,

    pub diagnosed_pcos: bool,
    pub family_history: bool,
    pub thyroid_condition: bool,

    /// Present iff the raw record carried a lab panel
    pub labs: Option<LabFeatures>,

    pub exercise: Option<ExerciseFrequency>,
    pub diet: Option<DietType>,
    pub stress_level: Option<f64>,
}

impl SelfReportFeatures {
    /// Number of distinct symptoms reported.
    #[must_use]
    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Whether a symptom id was reported.
    #[must_use]
    pub fn has_symptom(&self, id: &str) -> bool {
        self.symptoms.iter().any(|s| s == id)
    }
}

/// Normalized lab values for the self-report encoding.
///
/// Nothing here is imputed: the questionnaire either has a value or the
/// corresponding rule simply does not fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabFeatures {
    pub lh: Option<f64>,
    pub fsh: Option<f64>,

    /// LH / FSH; `None` when either input is missing or FSH is zero
    pub lh_fsh_ratio: Option<f64>,

    pub testosterone: Option<f64>,
    pub amh: Option<f64>,
    pub insulin: Option<f64>,
    pub glucose: Option<f64>,
}

/// Normalized clinical-dataset encoding.
///
/// Every numeric field is concrete after imputation; only the two guarded
/// ratios and the Yes/No flags (which have no reference median) stay
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalFeatures {
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub pulse_rate: f64,
    pub resp_rate: f64,
    pub hemoglobin: f64,

    /// Dataset cycle code: 2 = regular, 4 = irregular
    pub cycle_code: u8,
    pub cycle_length: f64,
    pub marriage_years: f64,
    pub pregnant: bool,
    pub abortions: f64,

    pub fsh: f64,
    pub lh: f64,

    /// FSH / LH; `None` when LH is zero
    pub fsh_lh_ratio: Option<f64>,

    pub waist: f64,
    pub hip: f64,

    /// Waist / hip; `None` when hip is zero
    pub waist_hip_ratio: Option<f64>,

    pub tsh: f64,
    pub amh: f64,
    pub prolactin: f64,
    pub vitamin_d3: f64,
    pub progesterone: f64,
    pub blood_sugar: f64,

    pub bp_systolic: f64,
    pub bp_diastolic: f64,

    pub follicle_left: f64,
    pub follicle_right: f64,
    pub follicle_size_left: f64,
    pub follicle_size_right: f64,
    pub endometrium: f64,

    /// Dataset encoding 11-18; 0 when absent or unrecognized
    pub blood_group: u8,

    pub weight_gain: Option<bool>,
    pub hair_growth: Option<bool>,
    pub hair_loss: Option<bool>,
    pub skin_darkening: Option<bool>,
    pub pimples: Option<bool>,
    pub fast_food: Option<bool>,
    pub reg_exercise: Option<bool>,
}
