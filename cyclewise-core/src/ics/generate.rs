//! ICS file generation.

use chrono::{NaiveDate, TimeDelta};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::entry::CalendarEntry;
use crate::error::{CycleWiseError, CycleWiseResult};
use crate::projector::{CycleParameters, ProjectedEvent};

/// Generate .ics content for every event in a projection.
///
/// Output is reproducible: UIDs and DTSTAMP are derived from the parameters,
/// never from the clock.
pub fn generate_ics(params: &CycleParameters) -> CycleWiseResult<String> {
    let events = params.project();
    let mut cal = Calendar::new();

    for (cycle, cycle_events) in events.chunks(3).enumerate() {
        for event in cycle_events {
            cal.push(build_event(params.anchor, cycle, event)?);
        }
    }

    let cal = cal.done();
    tracing::debug!(events = events.len(), anchor = %params.anchor, "generated ics");

    Ok(strip_ics_bloat(&cal.to_string()))
}

fn build_event(
    anchor: NaiveDate,
    cycle: usize,
    event: &ProjectedEvent,
) -> CycleWiseResult<icalendar::Event> {
    let entry = CalendarEntry::from(event);
    let mut ics_event = icalendar::Event::new();

    ics_event.uid(&format!(
        "{}-{}-{}@cyclewise",
        anchor.format("%Y%m%d"),
        cycle,
        event.kind().as_str()
    ));
    ics_event.summary(&entry.title);

    // DTSTAMP is required by RFC 5545
    ics_event.add_property("DTSTAMP", anchor.format("%Y%m%dT000000Z").to_string());

    // All-day ends are exclusive; single-day events end the following day
    let end = match entry.end {
        Some(end) => end,
        None => entry
            .start
            .checked_add_signed(TimeDelta::days(1))
            .ok_or_else(|| {
                CycleWiseError::IcsGenerate(format!("No day after {} to end '{}'", entry.start, entry.title))
            })?,
    };
    add_date_property(&mut ics_event, "DTSTART", entry.start);
    add_date_property(&mut ics_event, "DTEND", end);

    ics_event.add_property("COLOR", &entry.color);

    // Predictions never block time
    ics_event.add_property("TRANSP", "TRANSPARENT");

    Ok(ics_event.done())
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with CYCLEWISE
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CYCLEWISE\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_params(horizon: usize) -> CycleParameters {
        CycleParameters {
            anchor: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            cycle_length_days: 28,
            horizon_cycles: horizon,
        }
    }

    #[test]
    fn test_generate_ics_one_vevent_per_projected_event() {
        let ics = generate_ics(&make_params(6)).unwrap();

        let count = ics.lines().filter(|l| *l == "BEGIN:VEVENT").count();
        assert_eq!(count, 18, "Should have 18 VEVENTs, got {}. ICS:\n{}", count, ics);
    }

    #[test]
    fn test_generate_ics_all_day_dates_have_value_date() {
        let ics = generate_ics(&make_params(1)).unwrap();

        assert!(
            ics.contains("DTSTART;VALUE=DATE:20240305"),
            "Period DTSTART should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20240310"),
            "Period DTEND should be the exclusive window end. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTSTART;VALUE=DATE:20240319") && ics.contains("DTEND;VALUE=DATE:20240320"),
            "Ovulation should span one day. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_is_reproducible() {
        let a = generate_ics(&make_params(3)).unwrap();
        let b = generate_ics(&make_params(3)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("UID:20240305-2-ovulation@cyclewise"), "ICS:\n{}", a);
        assert!(a.contains("DTSTAMP:20240305T000000Z"), "ICS:\n{}", a);
    }

    #[test]
    fn test_generate_ics_strips_bloat() {
        let ics = generate_ics(&make_params(1)).unwrap();
        assert!(ics.contains("PRODID:CYCLEWISE"), "ICS:\n{}", ics);
        assert!(!ics.contains("CALSCALE"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_empty_horizon_is_empty_calendar() {
        let ics = generate_ics(&make_params(0)).unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"), "ICS:\n{}", ics);
    }
}
