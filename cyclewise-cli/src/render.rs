//! TUI rendering traits for cyclewise types.
//!
//! Extension traits that add colored terminal rendering to cyclewise-core
//! types using owo_colors.

use cyclewise_core::advisory::CycleAdvisory;
use cyclewise_core::chat::{ChatMessage, Sender};
use cyclewise_core::entry::CalendarEntry;
use cyclewise_core::facilities::Facility;
use cyclewise_core::projector::{EventKind, ProjectedEvent};
use cyclewise_core::symptoms::MAX_RATING;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text by event kind (pink, purple, indigo as in the legend)
fn colorize_kind(kind: EventKind, text: &str) -> String {
    match kind {
        EventKind::Period => text.bright_magenta().to_string(),
        EventKind::Fertile => text.purple().to_string(),
        EventKind::Ovulation => text.blue().to_string(),
    }
}

impl Render for ProjectedEvent {
    fn render(&self) -> String {
        let entry = CalendarEntry::from(self);
        let title = colorize_kind(self.kind(), &format!("{:<15}", entry.title));
        let dates = match entry.end {
            Some(end) => format!("{} → {}", entry.start.format("%a %b %-d %Y"), end.format("%a %b %-d %Y")),
            None => entry.start.format("%a %b %-d %Y").to_string(),
        };
        format!("{} {}", title, dates)
    }
}

/// Render a projection grouped by cycle
pub fn render_projection(events: &[ProjectedEvent]) -> String {
    if events.is_empty() {
        return "No predictions".dimmed().to_string();
    }

    let mut lines = Vec::new();
    for (i, cycle) in events.chunks(3).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Cycle {}", i + 1).bold().to_string());
        for event in cycle {
            lines.push(format!("  {}", event.render()));
        }
    }
    lines.join("\n")
}

impl Render for CycleAdvisory {
    fn render(&self) -> String {
        match self.message() {
            Some(msg) => format!("⚠ {}", msg).yellow().to_string(),
            None => String::new(),
        }
    }
}

/// One symptom row: name, bar, and rating
pub fn render_symptom(label: &str, rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!(
        "{:<12} {}{} {}/{}",
        label,
        "█".repeat(filled).magenta(),
        "░".repeat(empty).dimmed(),
        rating,
        MAX_RATING
    )
}

impl Render for ChatMessage {
    fn render(&self) -> String {
        let time = self.timestamp.with_timezone(&chrono::Local).format("%H:%M");
        let label = match self.sender {
            Sender::User => self.sender.label().magenta().bold().to_string(),
            Sender::Assistant => self.sender.label().cyan().bold().to_string(),
        };
        format!("{} {} {}", time.dimmed(), label, self.text)
    }
}

impl Render for Facility {
    fn render(&self) -> String {
        format!(
            "{}\n   {}\n   {}",
            self.name.bold(),
            self.address,
            self.phone.dimmed()
        )
    }
}
