//! Clinical-dataset record: the predictive flow's payload.
//!
//! Field names follow the published PCOS clinical dataset's column set, so a
//! row exported from it (or the subset a user fills in by hand) deserializes
//! directly. Any field may be absent; absence is resolved by reference-median
//! imputation during normalization, never by rejecting the record.

use serde::{Deserialize, Serialize};

use super::input::{lenient_f64, lenient_flag, lenient_string};

/// Raw clinical record. Every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    #[serde(rename = "Age", deserialize_with = "lenient_f64")]
    pub age: Option<f64>,

    /// Height in cm
    #[serde(rename = "Height", deserialize_with = "lenient_f64")]
    pub height: Option<f64>,

    /// Weight in kg
    #[serde(rename = "Weight", deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,

    /// Supplied BMI; recomputed from height/weight during normalization
    #[serde(rename = "BMI", deserialize_with = "lenient_f64")]
    pub bmi: Option<f64>,

    #[serde(rename = "PulseRate", deserialize_with = "lenient_f64")]
    pub pulse_rate: Option<f64>,

    /// Respiratory rate, breaths/min
    #[serde(rename = "RR", deserialize_with = "lenient_f64")]
    pub resp_rate: Option<f64>,

    /// Hemoglobin, g/dL
    #[serde(rename = "Hb", deserialize_with = "lenient_f64")]
    pub hemoglobin: Option<f64>,

    /// Dataset cycle code: 2 = regular, 4 = irregular
    #[serde(rename = "Cycle", deserialize_with = "lenient_f64")]
    pub cycle: Option<f64>,

    /// Textual regularity (`Regular`/`Irregular`); takes precedence over the
    /// numeric code when present
    #[serde(rename = "CycleRegularity", deserialize_with = "lenient_string")]
    pub cycle_regularity: Option<String>,

    /// Period length in days
    #[serde(rename = "CycleLength", deserialize_with = "lenient_f64")]
    pub cycle_length: Option<f64>,

    #[serde(rename = "MarriageStatus", deserialize_with = "lenient_f64")]
    pub marriage_years: Option<f64>,

    #[serde(rename = "Pregnant", deserialize_with = "lenient_flag")]
    pub pregnant: Option<bool>,

    #[serde(rename = "NoOfAbortions", deserialize_with = "lenient_f64")]
    pub abortions: Option<f64>,

    /// Follicle-stimulating hormone, mIU/mL
    #[serde(rename = "FSH", deserialize_with = "lenient_f64")]
    pub fsh: Option<f64>,

    /// Luteinizing hormone, mIU/mL
    #[serde(rename = "LH", deserialize_with = "lenient_f64")]
    pub lh: Option<f64>,

    /// Waist circumference, inches
    #[serde(rename = "Waist", deserialize_with = "lenient_f64")]
    pub waist: Option<f64>,

    /// Hip circumference, inches
    #[serde(rename = "Hip", deserialize_with = "lenient_f64")]
    pub hip: Option<f64>,

    /// Thyroid-stimulating hormone, mIU/L
    #[serde(rename = "TSH", deserialize_with = "lenient_f64")]
    pub tsh: Option<f64>,

    /// Anti-Müllerian hormone, ng/mL
    #[serde(rename = "AMH", deserialize_with = "lenient_f64")]
    pub amh: Option<f64>,

    /// Prolactin, ng/mL
    #[serde(rename = "PRL", deserialize_with = "lenient_f64")]
    pub prolactin: Option<f64>,

    /// Vitamin D3, ng/mL
    #[serde(rename = "VitD3", deserialize_with = "lenient_f64")]
    pub vitamin_d3: Option<f64>,

    /// Progesterone, ng/mL
    #[serde(rename = "PRG", deserialize_with = "lenient_f64")]
    pub progesterone: Option<f64>,

    /// Random blood sugar, mg/dL
    #[serde(rename = "RBS", deserialize_with = "lenient_f64")]
    pub blood_sugar: Option<f64>,

    /// Combined reading of the form `"120/80"`; split during normalization
    #[serde(rename = "BloodPressure", deserialize_with = "lenient_string")]
    pub blood_pressure: Option<String>,

    #[serde(rename = "BP_Systolic", deserialize_with = "lenient_f64")]
    pub bp_systolic: Option<f64>,

    #[serde(rename = "BP_Diastolic", deserialize_with = "lenient_f64")]
    pub bp_diastolic: Option<f64>,

    /// Follicle count, left ovary
    #[serde(rename = "Follicle_L", deserialize_with = "lenient_f64")]
    pub follicle_left: Option<f64>,

    /// Follicle count, right ovary
    #[serde(rename = "Follicle_R", deserialize_with = "lenient_f64")]
    pub follicle_right: Option<f64>,

    /// Average follicle size, left ovary, mm
    #[serde(rename = "AvgFollicleSize_L", deserialize_with = "lenient_f64")]
    pub follicle_size_left: Option<f64>,

    /// Average follicle size, right ovary, mm
    #[serde(rename = "AvgFollicleSize_R", deserialize_with = "lenient_f64")]
    pub follicle_size_right: Option<f64>,

    /// Endometrium thickness, mm
    #[serde(rename = "Endometrium", deserialize_with = "lenient_f64")]
    pub endometrium: Option<f64>,

    /// ABO/Rh group, e.g. `"A+"`
    #[serde(rename = "BloodGroup", deserialize_with = "lenient_string")]
    pub blood_group: Option<String>,

    #[serde(rename = "PCOS", deserialize_with = "lenient_flag")]
    pub diagnosed_pcos: Option<bool>,

    #[serde(rename = "WeightGain", deserialize_with = "lenient_flag")]
    pub weight_gain: Option<bool>,

    #[serde(rename = "HairGrowth", deserialize_with = "lenient_flag")]
    pub hair_growth: Option<bool>,

    #[serde(rename = "HairLoss", deserialize_with = "lenient_flag")]
    pub hair_loss: Option<bool>,

    #[serde(rename = "SkinDarkening", deserialize_with = "lenient_flag")]
    pub skin_darkening: Option<bool>,

    #[serde(rename = "Pimples", deserialize_with = "lenient_flag")]
    pub pimples: Option<bool>,

    #[serde(rename = "FastFood", deserialize_with = "lenient_flag")]
    pub fast_food: Option<bool>,

    #[serde(rename = "RegExercise", deserialize_with = "lenient_flag")]
    pub reg_exercise: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_column_names() {
        let record: ClinicalRecord = serde_json::from_str(
            r#"{
                "Age": 26,
                "Height": "162",
                "FSH": 6.0,
                "LH": 8.0,
                "Follicle_L": 14,
                "CycleRegularity": "Irregular",
                "WeightGain": "Yes",
                "RegExercise": "No",
                "BloodGroup": "O+"
            }"#,
        )
        .expect("Should parse");

        assert_eq!(record.age, Some(26.0));
        assert_eq!(record.height, Some(162.0));
        assert_eq!(record.follicle_left, Some(14.0));
        assert_eq!(record.weight_gain, Some(true));
        assert_eq!(record.reg_exercise, Some(false));
        assert_eq!(record.blood_group.as_deref(), Some("O+"));
    }

    #[test]
    fn test_everything_optional() {
        let record: ClinicalRecord = serde_json::from_str("{}").expect("Should parse");
        assert!(record.age.is_none());
        assert!(record.weight_gain.is_none());
        assert!(record.blood_pressure.is_none());
    }
}
