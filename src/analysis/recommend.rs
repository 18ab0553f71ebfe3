//! Recommendation generator.
//!
//! Rule order is fixed: level-gated referrals, cycle advice, weight, the
//! three lifestyle blocks, lab-gated medication discussions, symptom-specific
//! referrals, then the two standing community/education items. Output is not
//! deduplicated; rules own their own text.

use crate::domain::{
    CycleRegularity, DietType, ExerciseFrequency, RiskAssessment, RiskLevel, SelfReportFeatures,
};

/// Build the ordered recommendation list for an assessment.
#[must_use]
pub fn recommend(features: &SelfReportFeatures, assessment: &RiskAssessment) -> Vec<String> {
    let mut recommendations = Vec::new();
    let mut push = |text: &str| recommendations.push(text.to_string());

    if matches!(assessment.level, RiskLevel::High | RiskLevel::VeryHigh) {
        push(
            "Schedule an appointment with a gynecologist or endocrinologist for comprehensive evaluation",
        );
        push(
            "Request blood tests including hormone panels (LH, FSH, testosterone, AMH) if not done recently",
        );
    }

    // Anything other than a stated regular cycle warrants tracking advice.
    if features.cycle_regularity != Some(CycleRegularity::Regular) {
        push("Track your menstrual cycles using a period tracking app");
        push("Consider hormonal birth control to regulate cycles (consult your doctor)");
    }

    if features.bmi >= 25.0 {
        push("Focus on gradual weight loss (5-10% of body weight can significantly improve symptoms)");
        push("Consider working with a registered dietitian specializing in PCOS");
    }

    if matches!(
        features.exercise,
        Some(ExerciseFrequency::Rarely | ExerciseFrequency::OneToTwo)
    ) {
        push("Aim for at least 150 minutes of moderate exercise per week");
        push("Include both cardio and strength training exercises");
    }

    if matches!(
        features.diet,
        Some(DietType::Processed | DietType::Moderate)
    ) {
        push("Adopt a low-glycemic index diet with whole grains, lean proteins, and vegetables");
        push("Reduce refined carbohydrates and added sugars");
    }

    if matches!(features.stress_level, Some(s) if s >= 7.0) {
        push("Practice stress-reduction techniques like meditation, yoga, or deep breathing");
        push("Ensure adequate sleep (7-9 hours per night)");
    }

    if let Some(labs) = &features.labs {
        if matches!(labs.testosterone, Some(t) if t > 70.0) {
            push("Discuss anti-androgen medications with your doctor to manage elevated testosterone");
        }
        if matches!(labs.insulin, Some(i) if i > 20.0) {
            push("Consider metformin or other insulin-sensitizing medications (consult your doctor)");
            push("Monitor for signs of insulin resistance and type 2 diabetes");
        }
    }

    if features.has_symptom("excess-hair") {
        push("Explore hair removal options and discuss anti-androgen treatments with your doctor");
    }
    if features.has_symptom("acne") {
        push("Consult a dermatologist for acne management strategies");
    }

    push("Join PCOS support groups or online communities for peer support");
    push("Educate yourself about PCOS through reliable medical sources");

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize_assessment;
    use crate::analysis::scoring::{RiskModel, SelfReportModel};
    use crate::domain::{AssessmentRecord, LabPanel};

    fn run(record: &AssessmentRecord) -> Vec<String> {
        let features = normalize_assessment(record).expect("Should normalize");
        let assessment = SelfReportModel.evaluate(&features);
        recommend(&features, &assessment)
    }

    #[test]
    fn test_regular_low_risk_gets_standing_items_only() {
        let record = AssessmentRecord {
            height: Some(165.0),
            weight: Some(55.0),
            cycle_regularity: Some("regular".to_string()),
            ..AssessmentRecord::default()
        };
        let recommendations = run(&record);
        assert_eq!(
            recommendations,
            vec![
                "Join PCOS support groups or online communities for peer support",
                "Educate yourself about PCOS through reliable medical sources",
            ]
        );
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let record = AssessmentRecord {
            height: Some(165.0),
            weight: Some(82.0), // BMI 30.1
            cycle_regularity: Some("irregular".to_string()),
            symptoms: vec![
                "excess-hair".to_string(),
                "acne".to_string(),
                "fatigue".to_string(),
                "cramps".to_string(),
                "mood-swings".to_string(),
            ],
            family_history: Some("yes".to_string()),
            exercise_frequency: Some("rarely".to_string()),
            stress_level: Some(7.0),
            ..AssessmentRecord::default()
        };
        // Score 80 -> very-high, so the referral block leads.
        let recommendations = run(&record);

        assert!(recommendations[0].starts_with("Schedule an appointment"));
        assert!(recommendations[1].starts_with("Request blood tests"));
        assert!(recommendations[2].starts_with("Track your menstrual cycles"));
        assert!(recommendations[4].starts_with("Focus on gradual weight loss"));
        assert!(recommendations[6].starts_with("Aim for at least 150 minutes"));
        assert!(recommendations[8].starts_with("Practice stress-reduction"));
        assert!(recommendations[10].starts_with("Explore hair removal options"));
        assert!(recommendations[11].starts_with("Consult a dermatologist"));
        assert_eq!(
            recommendations.last().map(String::as_str),
            Some("Educate yourself about PCOS through reliable medical sources")
        );
    }

    #[test]
    fn test_unstated_cycle_still_gets_tracking_advice() {
        let record = AssessmentRecord {
            height: Some(165.0),
            weight: Some(55.0),
            ..AssessmentRecord::default()
        };
        let recommendations = run(&record);
        assert!(recommendations[0].starts_with("Track your menstrual cycles"));
    }

    #[test]
    fn test_lab_gated_advice_requires_labs() {
        let without_labs = AssessmentRecord {
            height: Some(165.0),
            weight: Some(55.0),
            cycle_regularity: Some("regular".to_string()),
            ..AssessmentRecord::default()
        };
        assert!(!run(&without_labs)
            .iter()
            .any(|r| r.contains("anti-androgen medications")));

        let with_labs = AssessmentRecord {
            labs: Some(LabPanel {
                testosterone: Some(85.0),
                insulin: Some(25.0),
                ..LabPanel::default()
            }),
            ..without_labs
        };
        let recommendations = run(&with_labs);
        assert!(recommendations
            .iter()
            .any(|r| r.contains("anti-androgen medications")));
        assert!(recommendations.iter().any(|r| r.contains("metformin")));
    }

    #[test]
    fn test_moderate_diet_triggers_diet_advice() {
        let record = AssessmentRecord {
            height: Some(165.0),
            weight: Some(55.0),
            cycle_regularity: Some("regular".to_string()),
            diet_type: Some("moderate".to_string()),
            ..AssessmentRecord::default()
        };
        let recommendations = run(&record);
        assert!(recommendations[0].starts_with("Adopt a low-glycemic index diet"));
    }
}
