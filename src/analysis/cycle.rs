//! Cycle analytics: statistics over the caller's tracked day log.
//!
//! A pure view, recomputed in full on every call. The log is never mutated.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::domain::{CycleLog, CycleStatistics, Frequency, InferredCycle, Mood};

/// Bounds for a plausible cycle, inclusive. Intervals outside this window
/// are tracking artifacts (spotting logged as a period, a gap in logging)
/// and are discarded, not reported as data-quality errors.
pub const MIN_CYCLE_DAYS: i64 = 16;
pub const MAX_CYCLE_DAYS: i64 = 44;

/// Compute cycle statistics over a snapshot of the day log.
///
/// With fewer than two period days, or when no interval survives the
/// plausibility filter, the lengths and the prediction stay `None`.
#[must_use]
pub fn analyze(log: &CycleLog) -> CycleStatistics {
    let tracked_days = log.len();

    // BTreeMap keys are already in ascending date order.
    let period_days: Vec<NaiveDate> = log
        .iter()
        .filter(|(_, day)| day.is_period)
        .map(|(date, _)| *date)
        .collect();

    let mut cycles = Vec::new();
    for pair in period_days.windows(2) {
        let length = (pair[1] - pair[0]).num_days();
        if (MIN_CYCLE_DAYS..=MAX_CYCLE_DAYS).contains(&length) {
            cycles.push(InferredCycle {
                start: pair[0],
                length: length as u32,
            });
        }
    }

    let average_length = if cycles.is_empty() {
        None
    } else {
        let sum: u32 = cycles.iter().map(|c| c.length).sum();
        // Round half away from zero, matching how the tracker always
        // displayed these averages.
        Some((f64::from(sum) / cycles.len() as f64).round() as u32)
    };

    let shortest = cycles.iter().map(|c| c.length).min();
    let longest = cycles.iter().map(|c| c.length).max();

    let predicted_next_period = match (average_length, period_days.last()) {
        (Some(average), Some(last)) => last.checked_add_days(Days::new(u64::from(average))),
        _ => None,
    };

    let mut symptom_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut mood_counts: BTreeMap<Mood, usize> = BTreeMap::new();
    for day in log.values() {
        for symptom in &day.symptoms {
            *symptom_counts.entry(symptom.clone()).or_default() += 1;
        }
        if let Some(mood) = day.mood {
            *mood_counts.entry(mood).or_default() += 1;
        }
    }

    let share = |count: usize| Frequency {
        count,
        share: count as f64 / tracked_days as f64,
    };
    let symptom_frequency = symptom_counts
        .into_iter()
        .map(|(id, count)| (id, share(count)))
        .collect();
    let mood_frequency = mood_counts
        .into_iter()
        .map(|(mood, count)| (mood, share(count)))
        .collect();

    CycleStatistics {
        cycles,
        average_length,
        shortest,
        longest,
        predicted_next_period,
        symptom_frequency,
        mood_frequency,
        tracked_days,
        period_days: period_days.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayRecord, FlowIntensity};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Should be a valid date")
    }

    fn log_with_period_days(dates: &[NaiveDate]) -> CycleLog {
        dates
            .iter()
            .map(|d| (*d, DayRecord::period(FlowIntensity::Moderate)))
            .collect()
    }

    #[test]
    fn test_empty_log_is_all_undefined() {
        let stats = analyze(&CycleLog::new());
        assert_eq!(stats.average_length, None);
        assert_eq!(stats.shortest, None);
        assert_eq!(stats.longest, None);
        assert_eq!(stats.predicted_next_period, None);
        assert_eq!(stats.tracked_days, 0);
    }

    #[test]
    fn test_single_period_day_is_undefined() {
        let stats = analyze(&log_with_period_days(&[date(2024, 1, 1)]));
        assert_eq!(stats.period_days, 1);
        assert_eq!(stats.average_length, None);
        assert_eq!(stats.predicted_next_period, None);
    }

    #[test]
    fn test_outlier_filter() {
        // Intervals 10, 28, 29, 50: only 28 and 29 survive.
        let days = [
            date(2024, 1, 1),
            date(2024, 1, 11),
            date(2024, 2, 8),
            date(2024, 3, 8),
            date(2024, 4, 27),
        ];
        let stats = analyze(&log_with_period_days(&days));

        assert_eq!(stats.cycles.len(), 2);
        assert_eq!(stats.cycles[0].start, date(2024, 1, 11));
        assert_eq!(stats.cycles[0].length, 28);
        assert_eq!(stats.cycles[1].length, 29);
        // 28.5 rounds half-up to 29
        assert_eq!(stats.average_length, Some(29));
        assert_eq!(stats.shortest, Some(28));
        assert_eq!(stats.longest, Some(29));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let sixteen = [date(2024, 1, 1), date(2024, 1, 17)];
        assert_eq!(
            analyze(&log_with_period_days(&sixteen)).average_length,
            Some(16)
        );

        let forty_four = [date(2024, 1, 1), date(2024, 2, 14)];
        assert_eq!(
            analyze(&log_with_period_days(&forty_four)).average_length,
            Some(44)
        );

        let fifteen = [date(2024, 1, 1), date(2024, 1, 16)];
        assert_eq!(analyze(&log_with_period_days(&fifteen)).average_length, None);

        let forty_five = [date(2024, 1, 1), date(2024, 2, 15)];
        assert_eq!(
            analyze(&log_with_period_days(&forty_five)).average_length,
            None
        );
    }

    #[test]
    fn test_no_surviving_interval_means_no_prediction() {
        // Two period days one week apart: logged spotting, not a cycle.
        let stats = analyze(&log_with_period_days(&[date(2024, 1, 1), date(2024, 1, 8)]));
        assert_eq!(stats.period_days, 2);
        assert_eq!(stats.average_length, None);
        assert_eq!(stats.predicted_next_period, None);
    }

    #[test]
    fn test_prediction_scenario() {
        // Periods on Jan 1, Jan 29, Feb 27: intervals 28 and 29, average 29.
        let days = [date(2024, 1, 1), date(2024, 1, 29), date(2024, 2, 27)];
        let stats = analyze(&log_with_period_days(&days));

        assert_eq!(stats.average_length, Some(29));
        assert_eq!(stats.predicted_next_period, Some(date(2024, 3, 27)));
    }

    #[test]
    fn test_prediction_offsets_from_most_recent_period_day() {
        // The 50-day outlier endpoint is still the most recent period day.
        let days = [
            date(2024, 1, 1),
            date(2024, 1, 29),
            date(2024, 2, 26),
            date(2024, 4, 16),
        ];
        let stats = analyze(&log_with_period_days(&days));
        assert_eq!(stats.average_length, Some(28));
        assert_eq!(stats.predicted_next_period, Some(date(2024, 5, 14)));
    }

    #[test]
    fn test_symptom_and_mood_frequency_over_all_tracked_days() {
        let mut log = CycleLog::new();
        log.insert(
            date(2024, 1, 1),
            DayRecord {
                is_period: true,
                flow: FlowIntensity::Heavy,
                symptoms: ["cramps".to_string(), "fatigue".to_string()].into(),
                mood: Some(Mood::Low),
                pain_level: 6,
                notes: String::new(),
            },
        );
        log.insert(
            date(2024, 1, 2),
            DayRecord {
                symptoms: ["cramps".to_string()].into(),
                mood: Some(Mood::Low),
                ..DayRecord::default()
            },
        );
        log.insert(date(2024, 1, 15), DayRecord::default());
        log.insert(
            date(2024, 1, 20),
            DayRecord {
                mood: Some(Mood::Good),
                ..DayRecord::default()
            },
        );

        let stats = analyze(&log);
        assert_eq!(stats.tracked_days, 4);

        let cramps = stats.symptom_frequency.get("cramps").expect("Should count");
        assert_eq!(cramps.count, 2);
        assert!((cramps.share - 0.5).abs() < f64::EPSILON);

        let fatigue = stats.symptom_frequency.get("fatigue").expect("Should count");
        assert_eq!(fatigue.count, 1);

        let low = stats.mood_frequency.get(&Mood::Low).expect("Should count");
        assert_eq!(low.count, 2);
        let good = stats.mood_frequency.get(&Mood::Good).expect("Should count");
        assert!((good.share - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_determinism() {
        let days = [date(2024, 1, 1), date(2024, 1, 29), date(2024, 2, 27)];
        let log = log_with_period_days(&days);
        assert_eq!(analyze(&log), analyze(&log));
    }
}
