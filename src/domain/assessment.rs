//! Self-report assessment record: the questionnaire wizard's payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::input::{lenient_f64, lenient_string};

/// Raw self-report assessment, as submitted by the questionnaire flow.
///
/// Height and weight are required (and must be strictly positive); every
/// other field is optional. Categorical fields arrive as free strings and
/// are encoded during normalization, so an unrecognized category degrades
/// to "not stated" instead of rejecting the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentRecord {
    #[serde(deserialize_with = "lenient_f64")]
    pub age: Option<f64>,

    /// Height in cm
    #[serde(deserialize_with = "lenient_f64")]
    pub height: Option<f64>,

    /// Weight in kg
    #[serde(deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,

    /// One of `regular`, `irregular`, `absent`, `frequent`
    #[serde(deserialize_with = "lenient_string")]
    pub cycle_regularity: Option<String>,

    /// Symptom ids checked in the wizard (e.g. `excess-hair`, `acne`)
    pub symptoms: Vec<String>,

    /// Per-symptom severity, 1-10
    pub symptom_severity: BTreeMap<String, f64>,

    #[serde(deserialize_with = "lenient_string")]
    pub diagnosed_pcos: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub family_history: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub thyroid_condition: Option<String>,

    /// Lab values, present only when the user has results to enter.
    /// The hormonal sub-report exists iff this does.
    pub labs: Option<LabPanel>,

    /// One of `daily`, `3-4-times`, `1-2-times`, `rarely`
    #[serde(deserialize_with = "lenient_string")]
    pub exercise_frequency: Option<String>,

    /// One of `balanced`, `moderate`, `processed`
    #[serde(deserialize_with = "lenient_string")]
    pub diet_type: Option<String>,

    /// Self-rated stress, 1-10
    #[serde(deserialize_with = "lenient_f64")]
    pub stress_level: Option<f64>,
}

/// Optional lab sub-record. All values non-negative when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabPanel {
    /// Luteinizing hormone, mIU/mL
    #[serde(deserialize_with = "lenient_f64")]
    pub lh: Option<f64>,

    /// Follicle-stimulating hormone, mIU/mL
    #[serde(deserialize_with = "lenient_f64")]
    pub fsh: Option<f64>,

    /// Total testosterone, ng/dL
    #[serde(deserialize_with = "lenient_f64")]
    pub testosterone: Option<f64>,

    /// Anti-Müllerian hormone, ng/mL
    #[serde(deserialize_with = "lenient_f64")]
    pub amh: Option<f64>,

    /// Fasting insulin, µIU/mL
    #[serde(deserialize_with = "lenient_f64")]
    pub insulin: Option<f64>,

    /// Fasting glucose, mg/dL
    #[serde(deserialize_with = "lenient_f64")]
    pub glucose: Option<f64>,
}

/// Menstrual cycle regularity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleRegularity {
    Regular,
    Irregular,
    /// No menstrual periods
    Absent,
    /// Cycles shorter than 21 days
    Frequent,
}

impl CycleRegularity {
    /// Parse the wire category; unrecognized values are `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(Self::Regular),
            "irregular" => Some(Self::Irregular),
            "absent" => Some(Self::Absent),
            "frequent" => Some(Self::Frequent),
            _ => None,
        }
    }
}

/// Weekly exercise frequency category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "3-4-times")]
    ThreeToFour,
    #[serde(rename = "1-2-times")]
    OneToTwo,
    #[serde(rename = "rarely")]
    Rarely,
}

impl ExerciseFrequency {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "3-4-times" => Some(Self::ThreeToFour),
            "1-2-times" => Some(Self::OneToTwo),
            "rarely" => Some(Self::Rarely),
            _ => None,
        }
    }
}

/// Diet category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Balanced,
    Moderate,
    /// Mostly processed food
    Processed,
}

impl DietType {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "balanced" => Some(Self::Balanced),
            "moderate" => Some(Self::Moderate),
            "processed" => Some(Self::Processed),
            _ => None,
        }
    }
}

/// Whether an optional categorical flag reads as an affirmative.
pub(crate) fn is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("yes"))
}
