//! Cycle event projection.
//!
//! Given the start of the last period and a cycle length, the projector lays
//! out the next few cycles as labeled date ranges: the period itself, the
//! fertile window and the ovulation day. Offsets are fixed relative to each
//! cycle's period start.
//!
//! The projector is deliberately permissive. It never validates the cycle
//! length, so zero and negative values project as-is; callers that want to
//! flag clinically unusual input use [`crate::advisory`].

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// Days from period start to period end.
pub const PERIOD_DURATION_DAYS: i64 = 5;
/// Days from period start to the first day of the fertile window.
pub const FERTILE_WINDOW_START_DAYS: i64 = 10;
/// Days from period start to the last day of the fertile window.
pub const FERTILE_WINDOW_END_DAYS: i64 = 15;
/// Days from period start to ovulation.
pub const OVULATION_OFFSET_DAYS: i64 = 14;

pub const DEFAULT_CYCLE_LENGTH_DAYS: i64 = 28;
pub const DEFAULT_HORIZON_CYCLES: usize = 6;

/// Inputs to a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleParameters {
    /// Start of the most recent period (day 0 of cycle 0)
    pub anchor: NaiveDate,
    /// Length of one cycle in days. Not validated.
    pub cycle_length_days: i64,
    /// Number of cycles to project
    pub horizon_cycles: usize,
}

impl Default for CycleParameters {
    fn default() -> Self {
        CycleParameters {
            anchor: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap_or_default(),
            cycle_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
            horizon_cycles: DEFAULT_HORIZON_CYCLES,
        }
    }
}

impl CycleParameters {
    pub fn project(&self) -> Vec<ProjectedEvent> {
        project(self.anchor, self.cycle_length_days, self.horizon_cycles)
    }
}

/// The three kinds of projected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Period,
    Fertile,
    Ovulation,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Period => "period",
            EventKind::Fertile => "fertile",
            EventKind::Ovulation => "ovulation",
        }
    }
}

/// A predicted event.
///
/// Window ends follow the all-day calendar convention and are exclusive:
/// a period window from the 5th to the 10th covers the 5th through the 9th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectedEvent {
    PeriodWindow { start: NaiveDate, end: NaiveDate },
    FertileWindow { start: NaiveDate, end: NaiveDate },
    OvulationDay { day: NaiveDate },
}

impl ProjectedEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ProjectedEvent::PeriodWindow { .. } => EventKind::Period,
            ProjectedEvent::FertileWindow { .. } => EventKind::Fertile,
            ProjectedEvent::OvulationDay { .. } => EventKind::Ovulation,
        }
    }

    pub fn start(&self) -> NaiveDate {
        match *self {
            ProjectedEvent::PeriodWindow { start, .. } => start,
            ProjectedEvent::FertileWindow { start, .. } => start,
            ProjectedEvent::OvulationDay { day } => day,
        }
    }

    /// End of the window, or None for single-day events.
    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            ProjectedEvent::PeriodWindow { end, .. } => Some(end),
            ProjectedEvent::FertileWindow { end, .. } => Some(end),
            ProjectedEvent::OvulationDay { .. } => None,
        }
    }
}

/// Project `horizon_cycles` cycles forward from `anchor`.
///
/// Output is ordered by cycle index, and within a cycle always
/// Period → Fertile → Ovulation, regardless of whether the windows overlap.
/// If a cycle's dates fall outside the representable date range, projection
/// stops before that cycle.
pub fn project(
    anchor: NaiveDate,
    cycle_length_days: i64,
    horizon_cycles: usize,
) -> Vec<ProjectedEvent> {
    let mut events = Vec::new();

    for cycle in 0..horizon_cycles {
        let Some(cycle_events) = project_cycle(anchor, cycle_length_days, cycle) else {
            tracing::debug!(cycle, "cycle outside representable date range, stopping");
            break;
        };
        events.extend(cycle_events);
    }

    events
}

fn project_cycle(anchor: NaiveDate, cycle_length_days: i64, cycle: usize) -> Option<[ProjectedEvent; 3]> {
    let offset = cycle_length_days.checked_mul(i64::try_from(cycle).ok()?)?;
    let period_start = add_days(anchor, offset)?;

    Some([
        ProjectedEvent::PeriodWindow {
            start: period_start,
            end: add_days(period_start, PERIOD_DURATION_DAYS)?,
        },
        ProjectedEvent::FertileWindow {
            start: add_days(period_start, FERTILE_WINDOW_START_DAYS)?,
            end: add_days(period_start, FERTILE_WINDOW_END_DAYS)?,
        },
        ProjectedEvent::OvulationDay {
            day: add_days(period_start, OVULATION_OFFSET_DAYS)?,
        },
    ])
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Stable sort by start date, for consumers that need a strict
/// chronological merge across event kinds.
pub fn sort_chronologically(events: &mut [ProjectedEvent]) {
    events.sort_by_key(|e| e.start());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period_starts(events: &[ProjectedEvent]) -> Vec<NaiveDate> {
        events
            .iter()
            .filter(|e| e.kind() == EventKind::Period)
            .map(|e| e.start())
            .collect()
    }

    #[test]
    fn test_project_emits_three_events_per_cycle() {
        for horizon in 1..=8 {
            let events = project(date(2024, 3, 5), 28, horizon);
            assert_eq!(events.len(), 3 * horizon, "horizon {}: {:?}", horizon, events);
        }
    }

    #[test]
    fn test_project_zero_horizon_is_empty() {
        assert!(project(date(2024, 3, 5), 28, 0).is_empty());
    }

    #[test]
    fn test_project_order_within_cycle() {
        let events = project(date(2024, 3, 5), 12, 3);
        let kinds: Vec<_> = events.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Period,
                EventKind::Fertile,
                EventKind::Ovulation,
                EventKind::Period,
                EventKind::Fertile,
                EventKind::Ovulation,
                EventKind::Period,
                EventKind::Fertile,
                EventKind::Ovulation,
            ]
        );
    }

    #[test]
    fn test_project_offsets_relative_to_period_start() {
        let events = project(date(2023, 11, 27), 31, 6);

        for cycle in events.chunks(3) {
            let (p_start, p_end) = match cycle[0] {
                ProjectedEvent::PeriodWindow { start, end } => (start, end),
                other => panic!("expected period window, got {:?}", other),
            };
            assert_eq!((p_end - p_start).num_days(), 5);

            match cycle[1] {
                ProjectedEvent::FertileWindow { start, end } => {
                    assert_eq!((start - p_start).num_days(), 10);
                    assert_eq!((end - p_start).num_days(), 15);
                }
                other => panic!("expected fertile window, got {:?}", other),
            }

            match cycle[2] {
                ProjectedEvent::OvulationDay { day } => {
                    assert_eq!((day - p_start).num_days(), 14);
                }
                other => panic!("expected ovulation day, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_project_consecutive_period_starts_differ_by_cycle_length() {
        let starts = period_starts(&project(date(2024, 12, 20), 33, 6));
        for pair in starts.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 33, "starts: {:?}", starts);
        }
    }

    #[test]
    fn test_project_month_rollover_leap_year() {
        let starts = period_starts(&project(date(2024, 1, 20), 28, 2));
        assert_eq!(starts[1], date(2024, 2, 17));

        let starts = period_starts(&project(date(2023, 1, 20), 28, 2));
        assert_eq!(starts[1], date(2023, 2, 17));

        // Crosses Feb 29
        let starts = period_starts(&project(date(2024, 2, 20), 10, 2));
        assert_eq!(starts[1], date(2024, 3, 1));

        let starts = period_starts(&project(date(2023, 2, 20), 10, 2));
        assert_eq!(starts[1], date(2023, 3, 2));
    }

    #[test]
    fn test_project_fertile_window_crosses_month_and_year() {
        let events = project(date(2024, 1, 28), 28, 1);
        assert_eq!(
            events[1],
            ProjectedEvent::FertileWindow {
                start: date(2024, 2, 7),
                end: date(2024, 2, 12),
            }
        );

        let events = project(date(2023, 12, 25), 28, 1);
        assert_eq!(events[0].end(), Some(date(2023, 12, 30)));
        assert_eq!(events[2].start(), date(2024, 1, 8));
    }

    #[test]
    fn test_project_is_deterministic() {
        let a = project(date(2024, 3, 5), 29, 6);
        let b = project(date(2024, 3, 5), 29, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_negative_length_does_not_panic() {
        let starts = period_starts(&project(date(2024, 3, 5), -5, 6));
        assert_eq!(starts.len(), 6);
        for pair in starts.windows(2) {
            assert!(pair[1] <= pair[0], "starts should not increase: {:?}", starts);
        }
        assert_eq!(starts[1], date(2024, 2, 29));
    }

    #[test]
    fn test_project_zero_length_repeats_anchor() {
        let starts = period_starts(&project(date(2024, 3, 5), 0, 4));
        assert!(starts.iter().all(|s| *s == date(2024, 3, 5)), "starts: {:?}", starts);
    }

    #[test]
    fn test_project_short_cycle_keeps_relative_offsets() {
        // Fertile window of cycle 0 starts after cycle 1's period begins
        let events = project(date(2024, 3, 5), 7, 2);
        assert_eq!(events[1].start(), date(2024, 3, 15));
        assert_eq!(events[3].start(), date(2024, 3, 12));
    }

    #[test]
    fn test_project_stops_at_unrepresentable_dates() {
        let events = project(NaiveDate::MAX, 28, 6);
        assert!(events.is_empty(), "got {:?}", events);

        let events = project(date(2024, 3, 5), i64::MAX, 3);
        assert_eq!(events.len(), 3, "only cycle 0 is representable");
    }

    #[test]
    fn test_huge_horizon_stops_at_last_representable_cycle() {
        let anchor = NaiveDate::MAX - TimeDelta::try_days(1000).unwrap();
        let events = project(anchor, 28, usize::MAX);
        // cycles 0..=35 keep their fertile window end within 1000 days
        assert_eq!(events.len(), 36 * 3);

        let last_start = period_starts(&events).last().copied().unwrap();
        let next_cycle_end = TimeDelta::try_days(28 + FERTILE_WINDOW_END_DAYS).unwrap();
        assert!(
            last_start.checked_add_signed(next_cycle_end).is_none(),
            "cycle after {} was still representable",
            last_start
        );
    }

    #[test]
    fn test_parameters_default_matches_demo() {
        let params = CycleParameters::default();
        assert_eq!(params.anchor, date(2024, 3, 5));
        assert_eq!(params.cycle_length_days, 28);
        assert_eq!(params.project().len(), 18);
    }

    #[test]
    fn test_sort_chronologically_merges_kinds() {
        let mut events = project(date(2024, 3, 5), 7, 2);
        sort_chronologically(&mut events);
        let starts: Vec<_> = events.iter().map(|e| e.start()).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_projected_event_json_shape() {
        let json = serde_json::to_string(&ProjectedEvent::OvulationDay { day: date(2024, 3, 19) }).unwrap();
        assert_eq!(json, r#"{"kind":"ovulation_day","day":"2024-03-19"}"#);
    }
}
