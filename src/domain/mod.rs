//! Domain layer: Core business types.
//!
//! Pure, serializable value types owned by the caller. Records arrive here
//! already normalized to explicit optionals (see [`input`]); everything else
//! in the crate is a function over these values.

mod assessment;
mod clinical;
mod cycle;
mod features;
pub(crate) mod input;
mod risk;

pub(crate) use assessment::is_yes;
pub use assessment::{AssessmentRecord, CycleRegularity, DietType, ExerciseFrequency, LabPanel};
pub use clinical::ClinicalRecord;
pub use cycle::{
    CycleLog, CycleStatistics, DayRecord, FlowIntensity, Frequency, InferredCycle, Mood,
};
pub use features::{ClinicalFeatures, LabFeatures, SelfReportFeatures};
pub use risk::{
    ClinicalPrediction, HormonalReport, HormoneStatus, LikelihoodTier, RiskAssessment, RiskLevel,
};
