//! Calendar entries: the shape handed to calendar renderers.
//!
//! Each projected event becomes an entry with a display title, a start date,
//! an optional end date and a display color.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::projector::{EventKind, ProjectedEvent};

pub const PERIOD_COLOR: &str = "#ec4899";
pub const FERTILE_COLOR: &str = "#a855f7";
pub const OVULATION_COLOR: &str = "#8b5cf6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub title: String,
    pub start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    pub color: String,
}

impl EventKind {
    pub fn title(&self) -> &'static str {
        match self {
            EventKind::Period => "Period Start",
            EventKind::Fertile => "Fertile Window",
            EventKind::Ovulation => "Ovulation",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventKind::Period => PERIOD_COLOR,
            EventKind::Fertile => FERTILE_COLOR,
            EventKind::Ovulation => OVULATION_COLOR,
        }
    }
}

impl From<&ProjectedEvent> for CalendarEntry {
    fn from(event: &ProjectedEvent) -> Self {
        let kind = event.kind();
        CalendarEntry {
            title: kind.title().to_string(),
            start: event.start(),
            end: event.end(),
            color: kind.color().to_string(),
        }
    }
}

pub fn entries_for(events: &[ProjectedEvent]) -> Vec<CalendarEntry> {
    events.iter().map(CalendarEntry::from).collect()
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} ({} to {})", self.title, self.start, end),
            None => write!(f, "{} ({})", self.title, self.start),
        }
    }
}
