//! Cycle-tracking types: the caller-owned day log and its derived view.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The caller-owned day log: one record per tracked calendar day.
///
/// The analytics component only ever reads a snapshot of this map; where the
/// caller keeps it (memory, browser storage, a database) is its own concern.
pub type CycleLog = BTreeMap<NaiveDate, DayRecord>;

/// One tracked day. The date is the map key, not repeated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayRecord {
    pub is_period: bool,
    pub flow: FlowIntensity,

    /// Symptom ids present on this day
    pub symptoms: BTreeSet<String>,

    pub mood: Option<Mood>,

    /// 0-10
    pub pain_level: u8,

    pub notes: String,
}

impl Default for DayRecord {
    fn default() -> Self {
        Self {
            is_period: false,
            flow: FlowIntensity::None,
            symptoms: BTreeSet::new(),
            mood: None,
            pain_level: 0,
            notes: String::new(),
        }
    }
}

impl DayRecord {
    /// A period day with the given flow.
    #[must_use]
    pub fn period(flow: FlowIntensity) -> Self {
        Self {
            is_period: true,
            flow,
            ..Self::default()
        }
    }
}

/// Menstrual flow intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    #[default]
    None,
    Spotting,
    Light,
    Moderate,
    Heavy,
}

/// Logged mood for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Anxious,
}

/// One inferred cycle: the span between a period start and the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredCycle {
    /// First day of the cycle (a logged period day)
    pub start: NaiveDate,

    /// Days until the next logged period day
    pub length: u32,
}

/// How often a symptom or mood appeared across the tracked days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    /// Days carrying this entry
    pub count: usize,

    /// `count` / total tracked days, in [0.0, 1.0]
    pub share: f64,
}

/// Derived view over the day log, recomputed in full on every query.
///
/// "No data" states are represented by `None`, never by an error: fewer than
/// two period days (or no interval surviving the plausibility filter) leaves
/// the lengths and the prediction undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStatistics {
    /// Cycles surviving the plausibility filter, chronological
    pub cycles: Vec<InferredCycle>,

    /// Mean surviving cycle length, rounded to the nearest whole day
    pub average_length: Option<u32>,

    pub shortest: Option<u32>,
    pub longest: Option<u32>,

    /// Most recent period day + average cycle length
    pub predicted_next_period: Option<NaiveDate>,

    /// Per-symptom frequency over all tracked days
    pub symptom_frequency: BTreeMap<String, Frequency>,

    /// Per-mood frequency over all tracked days
    pub mood_frequency: BTreeMap<Mood, Frequency>,

    pub tracked_days: usize,
    pub period_days: usize,
}
