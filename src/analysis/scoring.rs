//! Risk scoring engine: two strategies over one philosophy.
//!
//! Both encodings accumulate independent weighted threshold rules; they are
//! deliberately not unified. The self-report model sums integer weights into
//! a 0-100 score, the clinical model sums fractional weights into a 0.0-1.0
//! likelihood, and their thresholds differ because their input populations
//! differ. Scoring assumes validated input and cannot fail.

use crate::domain::{
    ClinicalFeatures, ClinicalPrediction, CycleRegularity, DietType, ExerciseFrequency,
    HormonalReport, HormoneStatus, LikelihoodTier, RiskAssessment, RiskLevel, SelfReportFeatures,
};

/// A named scoring strategy over one feature encoding.
///
/// Implementations must be deterministic and side-effect-free: evaluating
/// the same features twice yields bit-identical output.
pub trait RiskModel {
    type Features;
    type Output;

    fn evaluate(&self, features: &Self::Features) -> Self::Output;
}

/// Weighted threshold accumulation over the questionnaire encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfReportModel;

impl RiskModel for SelfReportModel {
    type Features = SelfReportFeatures;
    type Output = RiskAssessment;

    fn evaluate(&self, features: &SelfReportFeatures) -> RiskAssessment {
        let mut score: u32 = 0;
        let mut factors = Vec::new();

        match features.cycle_regularity {
            Some(CycleRegularity::Irregular) => {
                score += 25;
                factors.push("Irregular menstrual cycles".to_string());
            }
            Some(CycleRegularity::Absent) => {
                score += 35;
                factors.push("Absent menstrual periods".to_string());
            }
            Some(CycleRegularity::Frequent) => {
                score += 20;
                factors.push("Frequent menstrual cycles".to_string());
            }
            Some(CycleRegularity::Regular) | None => {}
        }

        if features.bmi >= 30.0 {
            score += 20;
            factors.push("BMI indicates obesity".to_string());
        } else if features.bmi >= 25.0 {
            score += 10;
            factors.push("BMI indicates overweight".to_string());
        }

        let symptom_count = features.symptom_count();
        if symptom_count >= 5 {
            score += 20;
            factors.push(format!("Multiple PCOS symptoms ({symptom_count})"));
        } else if symptom_count >= 3 {
            score += 15;
            factors.push(format!("Several PCOS symptoms ({symptom_count})"));
        }

        if features.avg_severity >= 7.0 {
            score += 10;
            factors.push("High symptom severity".to_string());
        }

        if features.family_history {
            score += 15;
            factors.push("Family history of PCOS".to_string());
        }

        let hormonal = features.labs.as_ref().map(|labs| {
            let mut hormonal_factors = Vec::new();

            if let Some(ratio) = labs.lh_fsh_ratio {
                if ratio >= 2.0 {
                    score += 25;
                    hormonal_factors.push(format!("Elevated LH/FSH ratio ({ratio:.2})"));
                } else if ratio >= 1.5 {
                    score += 15;
                    hormonal_factors
                        .push(format!("Moderately elevated LH/FSH ratio ({ratio:.2})"));
                }
            }

            if let Some(t) = labs.testosterone {
                if t > 70.0 {
                    score += 20;
                    hormonal_factors.push("Elevated testosterone levels".to_string());
                } else if t > 50.0 {
                    score += 10;
                    hormonal_factors.push("Moderately elevated testosterone".to_string());
                }
            }

            if matches!(labs.amh, Some(a) if a > 4.0) {
                score += 15;
                hormonal_factors.push("Elevated AMH levels".to_string());
            }

            if matches!(labs.insulin, Some(i) if i > 20.0) {
                score += 15;
                hormonal_factors.push("Elevated insulin levels".to_string());
            }

            if matches!(labs.glucose, Some(g) if g > 100.0) {
                score += 10;
                hormonal_factors.push("Elevated fasting glucose".to_string());
            }

            HormonalReport {
                lh_fsh_ratio: labs.lh_fsh_ratio.map(|r| (r * 100.0).round() / 100.0),
                testosterone_status: labs.testosterone.map(|t| {
                    if t > 70.0 {
                        HormoneStatus::High
                    } else if t > 50.0 {
                        HormoneStatus::ModeratelyHigh
                    } else {
                        HormoneStatus::Normal
                    }
                }),
                amh_status: labs.amh.map(|a| {
                    if a > 4.0 {
                        HormoneStatus::High
                    } else if a > 1.0 {
                        HormoneStatus::Normal
                    } else {
                        HormoneStatus::Low
                    }
                }),
                insulin_status: labs.insulin.map(|i| {
                    if i > 20.0 {
                        HormoneStatus::High
                    } else {
                        HormoneStatus::Normal
                    }
                }),
                glucose_status: labs.glucose.map(|g| {
                    if g > 100.0 {
                        HormoneStatus::High
                    } else if g >= 70.0 {
                        HormoneStatus::Normal
                    } else {
                        HormoneStatus::Low
                    }
                }),
                risk_factors: hormonal_factors,
            }
        });

        if let Some(report) = &hormonal {
            factors.extend(report.risk_factors.iter().cloned());
        }

        if features.exercise == Some(ExerciseFrequency::Rarely) {
            score += 5;
            factors.push("Sedentary lifestyle".to_string());
        }

        if features.diet == Some(DietType::Processed) {
            score += 5;
            factors.push("Poor dietary habits".to_string());
        }

        if matches!(features.stress_level, Some(s) if s >= 8.0) {
            score += 5;
            factors.push("High stress levels".to_string());
        }

        let score = score.min(100);

        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
            factors,
            hormonal,
        }
    }
}

/// Additive likelihood model over the clinical-dataset encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalModel;

impl RiskModel for ClinicalModel {
    type Features = ClinicalFeatures;
    type Output = ClinicalPrediction;

    fn evaluate(&self, features: &ClinicalFeatures) -> ClinicalPrediction {
        let mut likelihood: f64 = 0.0;

        // Cycle code 4 = irregular
        if features.cycle_code == 4 {
            likelihood += 0.25;
        }

        if features.bmi >= 30.0 {
            likelihood += 0.15;
        } else if features.bmi >= 25.0 {
            likelihood += 0.1;
        }

        // The dataset stores FSH/LH, so an elevated LH/FSH ratio shows up as
        // a low value here.
        if let Some(ratio) = features.fsh_lh_ratio {
            if ratio <= 0.5 {
                likelihood += 0.25;
            } else if ratio <= 0.8 {
                likelihood += 0.15;
            }
        }

        if features.amh > 4.0 {
            likelihood += 0.15;
        }

        if matches!(features.waist_hip_ratio, Some(r) if r > 0.85) {
            likelihood += 0.1;
        }

        // Polycystic morphology: >= 12 follicles on either ovary
        if features.follicle_left >= 12.0 || features.follicle_right >= 12.0 {
            likelihood += 0.2;
        }

        for flag in [
            features.weight_gain,
            features.hair_growth,
            features.skin_darkening,
            features.hair_loss,
            features.pimples,
        ] {
            if flag == Some(true) {
                likelihood += 0.05;
            }
        }

        let likelihood = likelihood.min(1.0_f64);
        let pcos_likely = likelihood > DIAGNOSIS_CUT;

        ClinicalPrediction {
            likelihood,
            tier: LikelihoodTier::from_likelihood(likelihood),
            pcos_likely,
            confidence: confidence_for(likelihood),
            key_findings: key_findings(features),
            risk_indicators: risk_indicators(features),
            recommendation: recommendation_for(likelihood).to_string(),
        }
    }
}

/// Binary diagnosis cut on the likelihood.
pub const DIAGNOSIS_CUT: f64 = 0.6;

/// Deterministic confidence: the likelihood's distance from the diagnosis
/// cut, scaled into [0.75, 0.95] and rounded to two decimals. A likelihood
/// sitting on the cut is the least certain call.
fn confidence_for(likelihood: f64) -> f64 {
    let distance = ((likelihood - DIAGNOSIS_CUT).abs() / DIAGNOSIS_CUT).min(1.0);
    let confidence = 0.75 + 0.2 * distance;
    (confidence * 100.0).round() / 100.0
}

fn key_findings(features: &ClinicalFeatures) -> Vec<String> {
    let mut findings = Vec::new();

    if features.cycle_code == 4 {
        findings.push("Menstrual irregularity detected (Irregular cycle)".to_string());
    }

    if features.hair_growth == Some(true)
        || features.hair_loss == Some(true)
        || features.pimples == Some(true)
    {
        findings.push("Hyperandrogenism symptoms present".to_string());
    }

    if features.bmi >= 25.0 {
        findings.push(format!("Elevated BMI: {:.1}", features.bmi));
    }

    if matches!(features.fsh_lh_ratio, Some(r) if r <= 0.5) {
        findings.push("Elevated LH/FSH ratio (inverted FSH/LH)".to_string());
    }

    if features.amh > 4.0 {
        findings.push(format!("Elevated AMH: {} ng/mL", features.amh));
    }

    if features.follicle_left >= 12.0 || features.follicle_right >= 12.0 {
        findings.push("Polycystic ovaries detected (>=12 follicles)".to_string());
    }

    findings
}

fn risk_indicators(features: &ClinicalFeatures) -> Vec<String> {
    let mut indicators = Vec::new();

    if features.weight_gain == Some(true) {
        indicators.push("Recent weight gain reported".to_string());
    }

    if features.fast_food == Some(true) {
        indicators.push("Regular fast food consumption".to_string());
    }

    if features.reg_exercise == Some(false) {
        indicators.push("Sedentary lifestyle (no regular exercise)".to_string());
    }

    if matches!(features.waist_hip_ratio, Some(r) if r > 0.85) {
        indicators.push("Android obesity pattern".to_string());
    }

    if features.tsh > 4.5 {
        indicators.push("Elevated TSH (thyroid dysfunction)".to_string());
    }

    indicators
}

fn recommendation_for(likelihood: f64) -> &'static str {
    if likelihood >= 0.7 {
        "High likelihood of PCOS detected. Strongly recommend comprehensive medical \
         evaluation including ultrasound and hormone testing."
    } else if likelihood >= 0.5 {
        "Moderate likelihood of PCOS. Recommend medical consultation and further \
         diagnostic testing."
    } else if likelihood >= 0.3 {
        "Some PCOS indicators present. Consider monitoring symptoms and lifestyle \
         modifications. Consult healthcare provider if symptoms worsen."
    } else {
        "Low likelihood of PCOS based on current data. Continue healthy lifestyle \
         practices and monitor any changes in symptoms."
    }
}
