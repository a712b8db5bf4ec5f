//! Persisted cycle tracker inputs.
//!
//! The tracker keeps the two editable fields as raw text, the same way they
//! round-trip through storage, and only turns them into [`CycleParameters`]
//! when a projection is requested. Every projection is regenerated from
//! scratch.

use chrono::NaiveDate;

use crate::advisory::CycleAdvisory;
use crate::error::{CycleWiseError, CycleWiseResult};
use crate::projector::{CycleParameters, ProjectedEvent};
use crate::store::{CYCLE_LENGTH_KEY, KeyValueStore, LAST_PERIOD_KEY};

pub const DEFAULT_LAST_PERIOD: &str = "2024-03-05";
pub const DEFAULT_CYCLE_LENGTH: &str = "28";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTracker {
    /// Start of the last period, as an ISO date (YYYY-MM-DD)
    pub last_period: String,
    /// Cycle length in days, as typed
    pub cycle_length: String,
}

impl Default for CycleTracker {
    fn default() -> Self {
        CycleTracker {
            last_period: DEFAULT_LAST_PERIOD.to_string(),
            cycle_length: DEFAULT_CYCLE_LENGTH.to_string(),
        }
    }
}

impl CycleTracker {
    pub fn load(store: &impl KeyValueStore) -> CycleWiseResult<Self> {
        let defaults = Self::default();

        let tracker = CycleTracker {
            last_period: store.get(LAST_PERIOD_KEY)?.unwrap_or(defaults.last_period),
            cycle_length: store.get(CYCLE_LENGTH_KEY)?.unwrap_or(defaults.cycle_length),
        };
        tracing::debug!(?tracker, "loaded cycle tracker");

        Ok(tracker)
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> CycleWiseResult<()> {
        store.set(LAST_PERIOD_KEY, &self.last_period)?;
        store.set(CYCLE_LENGTH_KEY, &self.cycle_length)?;
        Ok(())
    }

    pub fn set_last_period(&mut self, value: &str) {
        self.last_period = value.trim().to_string();
    }

    pub fn set_cycle_length(&mut self, value: &str) {
        self.cycle_length = value.trim().to_string();
    }

    /// Parse the raw fields into projection parameters.
    ///
    /// A malformed date is rejected. A cycle length that isn't a number is
    /// read as 0 and fractional lengths are truncated; implausible lengths
    /// are never rejected.
    pub fn parameters(&self, horizon_cycles: usize) -> CycleWiseResult<CycleParameters> {
        Ok(CycleParameters {
            anchor: parse_anchor(&self.last_period)?,
            cycle_length_days: parse_cycle_length(&self.cycle_length),
            horizon_cycles,
        })
    }

    pub fn advisory(&self) -> CycleAdvisory {
        CycleAdvisory::for_length(parse_cycle_length(&self.cycle_length))
    }

    pub fn project(&self, horizon_cycles: usize) -> CycleWiseResult<Vec<ProjectedEvent>> {
        let events = self.parameters(horizon_cycles)?.project();
        tracing::debug!(events = events.len(), "projected cycle events");
        Ok(events)
    }
}

fn parse_anchor(value: &str) -> CycleWiseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CycleWiseError::InvalidInput(format!(
            "Invalid date format '{}'. Expected YYYY-MM-DD",
            value
        ))
    })
}

fn parse_cycle_length(value: &str) -> i64 {
    let value = value.trim();

    if let Ok(days) = value.parse::<i64>() {
        return days;
    }

    match value.parse::<f64>() {
        Ok(days) if days.is_finite() => days.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_falls_back_to_defaults() {
        let store = MemoryStore::new();
        let tracker = CycleTracker::load(&store).unwrap();
        assert_eq!(tracker, CycleTracker::default());
        assert_eq!(tracker.project(6).unwrap().len(), 18);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut tracker = CycleTracker::default();
        tracker.set_last_period("2024-02-20");
        tracker.set_cycle_length(" 10 ");
        tracker.save(&mut store).unwrap();

        assert_eq!(store.get(CYCLE_LENGTH_KEY).unwrap().as_deref(), Some("10"));

        let loaded = CycleTracker::load(&store).unwrap();
        let params = loaded.parameters(2).unwrap();
        assert_eq!(params.anchor, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
        assert_eq!(params.cycle_length_days, 10);

        let events = loaded.project(2).unwrap();
        assert_eq!(events[3].start(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let mut tracker = CycleTracker::default();
        tracker.set_last_period("2024-13-01");
        let err = tracker.parameters(6).unwrap_err();
        assert!(matches!(err, CycleWiseError::InvalidInput(_)), "got {:?}", err);
    }

    #[test]
    fn test_cycle_length_parsing_is_permissive() {
        assert_eq!(parse_cycle_length("31"), 31);
        assert_eq!(parse_cycle_length("-5"), -5);
        assert_eq!(parse_cycle_length("27.9"), 27);
        assert_eq!(parse_cycle_length(""), 0);
        assert_eq!(parse_cycle_length("abc"), 0);
        assert_eq!(parse_cycle_length("NaN"), 0);
    }

    #[test]
    fn test_implausible_length_still_projects_with_advisory() {
        let mut tracker = CycleTracker::default();
        tracker.set_cycle_length("0");
        assert_eq!(tracker.advisory(), CycleAdvisory::UnusuallyShort);
        assert_eq!(tracker.project(6).unwrap().len(), 18);

        tracker.set_cycle_length("45");
        assert_eq!(tracker.advisory(), CycleAdvisory::UnusuallyLong);
    }
}
