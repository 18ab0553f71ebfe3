//! Feature normalizer: raw records in, scoreable feature vectors out.
//!
//! Normalization runs in a fixed order: unit validation, categorical
//! encoding, reference-median imputation, derived-feature computation.
//! Imputation must precede the derived features because BMI and the ratios
//! are computed from already-imputed inputs.
//!
//! Validation never fails fast; every violation is collected so the caller
//! sees all of them at once.

use crate::domain::is_yes;
use crate::domain::{
    AssessmentRecord, ClinicalFeatures, ClinicalRecord, CycleRegularity, DietType,
    ExerciseFrequency, LabFeatures, LabPanel, SelfReportFeatures,
};
use crate::{LunaraError, Result};

/// Reference medians for the clinical column set, keyed by dataset column
/// name. Any absent numeric clinical field is replaced by its entry here.
pub const REFERENCE_MEDIANS: &[(&str, f64)] = &[
    ("Age", 26.0),
    ("Weight", 65.0),
    ("Height", 162.0),
    ("BMI", 24.5),
    ("PulseRate", 75.0),
    ("RR", 16.0),
    ("Hb", 12.5),
    ("Cycle", 4.0),
    ("CycleLength", 5.0),
    ("MarriageStatus", 0.0),
    ("NoOfAbortions", 0.0),
    ("FSH", 6.0),
    ("LH", 8.0),
    ("Hip", 36.0),
    ("Waist", 32.0),
    ("TSH", 2.5),
    ("AMH", 4.0),
    ("PRL", 15.0),
    ("VitD3", 25.0),
    ("PRG", 10.0),
    ("RBS", 100.0),
    ("BP_Systolic", 120.0),
    ("BP_Diastolic", 80.0),
    ("Follicle_L", 5.0),
    ("Follicle_R", 5.0),
    ("AvgFollicleSize_L", 10.0),
    ("AvgFollicleSize_R", 10.0),
    ("Endometrium", 8.0),
];

/// Dataset encoding for ABO/Rh blood groups.
const BLOOD_GROUP_ENCODING: &[(&str, u8)] = &[
    ("A+", 11),
    ("A-", 12),
    ("B+", 13),
    ("B-", 14),
    ("O+", 15),
    ("O-", 16),
    ("AB+", 17),
    ("AB-", 18),
];

/// Look up the reference median for a dataset column.
pub(crate) fn reference_median(field: &str) -> f64 {
    REFERENCE_MEDIANS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, value)| *value)
        .unwrap_or_default()
}

fn impute(value: Option<f64>, field: &str) -> f64 {
    value.unwrap_or_else(|| reference_median(field))
}

fn check_range(value: Option<f64>, min: f64, max: f64, message: &str, errors: &mut Vec<String>) {
    if let Some(v) = value {
        if v < min || v > max {
            errors.push(message.to_string());
        }
    }
}

/// Validate the clinical record's supplied units.
///
/// Absent fields are fine (they get imputed); supplied values outside the
/// plausible physiological range for their unit are violations.
#[must_use]
pub fn validate_clinical(record: &ClinicalRecord) -> Vec<String> {
    let mut errors = Vec::new();

    check_range(
        record.height,
        100.0,
        250.0,
        "Height must be in cm (range: 100-250)",
        &mut errors,
    );
    check_range(
        record.amh,
        0.0,
        50.0,
        "AMH must be in ng/mL (range: 0-50)",
        &mut errors,
    );
    check_range(
        record.fsh,
        0.0,
        100.0,
        "FSH must be in mIU/mL (range: 0-100)",
        &mut errors,
    );
    check_range(
        record.lh,
        0.0,
        100.0,
        "LH must be in mIU/mL (range: 0-100)",
        &mut errors,
    );
    check_range(
        record.tsh,
        0.0,
        20.0,
        "TSH must be in mIU/L (range: 0-20)",
        &mut errors,
    );

    errors
}

/// Normalize a clinical record into its feature vector.
///
/// Total over any in-range record: every absence is resolved by encoding
/// fallbacks or reference medians, so this only fails on unit violations.
///
/// # Errors
/// Returns [`LunaraError::Validation`] carrying every violation at once.
pub fn normalize_clinical(record: &ClinicalRecord) -> Result<ClinicalFeatures> {
    let errors = validate_clinical(record);
    if !errors.is_empty() {
        return Err(LunaraError::Validation(errors));
    }

    // Categorical encoding. A recognized textual regularity overrides the
    // numeric code; anything unrecognized falls back to the reference median
    // (4, irregular).
    let cycle_code = match record.cycle_regularity.as_deref() {
        Some("Regular") => 2.0,
        Some("Irregular") => 4.0,
        Some(_) => reference_median("Cycle"),
        None => impute(record.cycle, "Cycle"),
    } as u8;

    let blood_group = record
        .blood_group
        .as_deref()
        .and_then(|group| {
            BLOOD_GROUP_ENCODING
                .iter()
                .find(|(name, _)| *name == group)
                .map(|(_, code)| *code)
        })
        .unwrap_or(0);

    // Imputation, before any derived feature.
    let age = impute(record.age, "Age");
    let height = impute(record.height, "Height");
    let weight = impute(record.weight, "Weight");
    let fsh = impute(record.fsh, "FSH");
    let lh = impute(record.lh, "LH");
    let waist = impute(record.waist, "Waist");
    let hip = impute(record.hip, "Hip");

    // Blood pressure: a combined "120/80" string takes precedence over the
    // split pair; a half that fails to parse falls back to its median.
    let (bp_systolic, bp_diastolic) = match record.blood_pressure.as_deref() {
        Some(combined) => split_blood_pressure(combined),
        None => (
            impute(record.bp_systolic, "BP_Systolic"),
            impute(record.bp_diastolic, "BP_Diastolic"),
        ),
    };

    // Derived features, from the imputed inputs. Ratios stay undefined on a
    // zero denominator rather than borrowing a median.
    let bmi = if height > 0.0 {
        let height_m = height / 100.0;
        weight / (height_m * height_m)
    } else {
        impute(record.bmi, "BMI")
    };

    let fsh_lh_ratio = (lh != 0.0).then(|| fsh / lh);
    let waist_hip_ratio = (hip != 0.0).then(|| waist / hip);

    Ok(ClinicalFeatures {
        age,
        height,
        weight,
        bmi,
        pulse_rate: impute(record.pulse_rate, "PulseRate"),
        resp_rate: impute(record.resp_rate, "RR"),
        hemoglobin: impute(record.hemoglobin, "Hb"),
        cycle_code,
        cycle_length: impute(record.cycle_length, "CycleLength"),
        marriage_years: impute(record.marriage_years, "MarriageStatus"),
        pregnant: record.pregnant.unwrap_or(false),
        abortions: impute(record.abortions, "NoOfAbortions"),
        fsh,
        lh,
        fsh_lh_ratio,
        waist,
        hip,
        waist_hip_ratio,
        tsh: impute(record.tsh, "TSH"),
        amh: impute(record.amh, "AMH"),
        prolactin: impute(record.prolactin, "PRL"),
        vitamin_d3: impute(record.vitamin_d3, "VitD3"),
        progesterone: impute(record.progesterone, "PRG"),
        blood_sugar: impute(record.blood_sugar, "RBS"),
        bp_systolic,
        bp_diastolic,
        follicle_left: impute(record.follicle_left, "Follicle_L"),
        follicle_right: impute(record.follicle_right, "Follicle_R"),
        follicle_size_left: impute(record.follicle_size_left, "AvgFollicleSize_L"),
        follicle_size_right: impute(record.follicle_size_right, "AvgFollicleSize_R"),
        endometrium: impute(record.endometrium, "Endometrium"),
        blood_group,
        weight_gain: record.weight_gain,
        hair_growth: record.hair_growth,
        hair_loss: record.hair_loss,
        skin_darkening: record.skin_darkening,
        pimples: record.pimples,
        fast_food: record.fast_food,
        reg_exercise: record.reg_exercise,
    })
}

fn split_blood_pressure(combined: &str) -> (f64, f64) {
    let mut parts = combined.splitn(2, '/');
    let systolic = parts
        .next()
        .and_then(|p| p.trim().parse::<f64>().ok())
        .unwrap_or_else(|| reference_median("BP_Systolic"));
    let diastolic = parts
        .next()
        .and_then(|p| p.trim().parse::<f64>().ok())
        .unwrap_or_else(|| reference_median("BP_Diastolic"));
    (systolic, diastolic)
}

/// Normalize a self-report record into its feature vector.
///
/// Unlike the clinical form, nothing is imputed here: height and weight are
/// required, and absent optional fields simply leave their rules silent.
///
/// # Errors
/// Returns [`LunaraError::Validation`] when height or weight is missing or
/// non-positive, when a supplied height is outside 100-250 cm, or when a
/// supplied lab value is negative. All violations are reported together.
pub fn normalize_assessment(record: &AssessmentRecord) -> Result<SelfReportFeatures> {
    let mut errors = Vec::new();

    let height = match record.height {
        Some(h) if h > 0.0 => {
            if !(100.0..=250.0).contains(&h) {
                errors.push("Height must be in cm (range: 100-250)".to_string());
            }
            h
        }
        _ => {
            errors.push("Height is required and must be positive".to_string());
            0.0
        }
    };
    let weight = match record.weight {
        Some(w) if w > 0.0 => w,
        _ => {
            errors.push("Weight is required and must be positive".to_string());
            0.0
        }
    };
    if let Some(labs) = &record.labs {
        for (value, name) in [
            (labs.lh, "LH"),
            (labs.fsh, "FSH"),
            (labs.testosterone, "Testosterone"),
            (labs.amh, "AMH"),
            (labs.insulin, "Insulin"),
            (labs.glucose, "Glucose"),
        ] {
            if matches!(value, Some(v) if v < 0.0) {
                errors.push(format!("{name} must be non-negative"));
            }
        }
    }
    if !errors.is_empty() {
        return Err(LunaraError::Validation(errors));
    }

    let height_m = height / 100.0;
    let bmi = weight / (height_m * height_m);

    // Symptom ids are a set: collapse duplicates, keep first-occurrence order.
    let mut symptoms: Vec<String> = Vec::with_capacity(record.symptoms.len());
    for id in &record.symptoms {
        if !symptoms.contains(id) {
            symptoms.push(id.clone());
        }
    }

    let severities: Vec<f64> = record.symptom_severity.values().copied().collect();
    let avg_severity = if severities.is_empty() {
        0.0
    } else {
        severities.iter().sum::<f64>() / severities.len() as f64
    };

    Ok(SelfReportFeatures {
        age: record.age,
        height,
        weight,
        bmi,
        cycle_regularity: record
            .cycle_regularity
            .as_deref()
            .and_then(CycleRegularity::parse),
        symptoms,
        avg_severity,
        diagnosed_pcos: is_yes(record.diagnosed_pcos.as_deref()),
        family_history: is_yes(record.family_history.as_deref()),
        thyroid_condition: is_yes(record.thyroid_condition.as_deref()),
        labs: record.labs.as_ref().map(normalize_labs),
        exercise: record
            .exercise_frequency
            .as_deref()
            .and_then(ExerciseFrequency::parse),
        diet: record.diet_type.as_deref().and_then(DietType::parse),
        stress_level: record.stress_level,
    })
}

fn normalize_labs(panel: &LabPanel) -> LabFeatures {
    let lh_fsh_ratio = match (panel.lh, panel.fsh) {
        (Some(lh), Some(fsh)) if fsh != 0.0 => Some(lh / fsh),
        _ => None,
    };

    LabFeatures {
        lh: panel.lh,
        fsh: panel.fsh,
        lh_fsh_ratio,
        testosterone: panel.testosterone,
        amh: panel.amh,
        insulin: panel.insulin,
        glucose: panel.glucose,
    }
}
