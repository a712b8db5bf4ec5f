//! Advisory warnings for unusual cycle lengths.
//!
//! Purely presentational. Nothing here blocks projection or storage.

use serde::Serialize;

pub const TYPICAL_CYCLE_MIN_DAYS: i64 = 21;
pub const TYPICAL_CYCLE_MAX_DAYS: i64 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleAdvisory {
    Typical,
    UnusuallyShort,
    UnusuallyLong,
}

impl CycleAdvisory {
    pub fn for_length(cycle_length_days: i64) -> Self {
        if cycle_length_days < TYPICAL_CYCLE_MIN_DAYS {
            CycleAdvisory::UnusuallyShort
        } else if cycle_length_days > TYPICAL_CYCLE_MAX_DAYS {
            CycleAdvisory::UnusuallyLong
        } else {
            CycleAdvisory::Typical
        }
    }

    pub fn is_typical(&self) -> bool {
        *self == CycleAdvisory::Typical
    }

    pub fn message(&self) -> Option<String> {
        match self {
            CycleAdvisory::Typical => None,
            CycleAdvisory::UnusuallyShort => Some(format!(
                "Cycle length is unusually short (typical cycles are {}-{} days). Consider consulting a healthcare provider.",
                TYPICAL_CYCLE_MIN_DAYS, TYPICAL_CYCLE_MAX_DAYS
            )),
            CycleAdvisory::UnusuallyLong => Some(format!(
                "Cycle length is unusually long (typical cycles are {}-{} days). Consider consulting a healthcare provider.",
                TYPICAL_CYCLE_MIN_DAYS, TYPICAL_CYCLE_MAX_DAYS
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_inclusive() {
        assert_eq!(CycleAdvisory::for_length(21), CycleAdvisory::Typical);
        assert_eq!(CycleAdvisory::for_length(35), CycleAdvisory::Typical);
        assert_eq!(CycleAdvisory::for_length(20), CycleAdvisory::UnusuallyShort);
        assert_eq!(CycleAdvisory::for_length(36), CycleAdvisory::UnusuallyLong);
    }

    #[test]
    fn test_degenerate_lengths_are_short() {
        assert_eq!(CycleAdvisory::for_length(0), CycleAdvisory::UnusuallyShort);
        assert_eq!(CycleAdvisory::for_length(-5), CycleAdvisory::UnusuallyShort);
    }

    #[test]
    fn test_message_only_for_unusual() {
        assert!(CycleAdvisory::Typical.message().is_none());
        let msg = CycleAdvisory::UnusuallyLong.message().unwrap();
        assert!(msg.contains("21-35"), "got: {}", msg);
    }
}
