use std::path::Path;

use anyhow::{Context, Result};
use cyclewise_core::config::Settings;
use cyclewise_core::entry::entries_for;
use cyclewise_core::ics::generate_ics;
use cyclewise_core::tracker::CycleTracker;
use owo_colors::OwoColorize;

use crate::OutputFormat;
use crate::render::{Render, render_projection};

pub fn show(settings: &Settings, horizon: usize, format: OutputFormat) -> Result<()> {
    let store = settings.open_store()?;
    let tracker = CycleTracker::load(&store)?;
    let params = tracker.parameters(horizon)?;

    match format {
        OutputFormat::Table => {
            println!(
                "{}",
                format!(
                    "Last period {} · cycle length {} days",
                    params.anchor, params.cycle_length_days
                )
                .dimmed()
            );
            println!();
            println!("{}", render_projection(&params.project()));

            let advisory = tracker.advisory();
            if !advisory.is_typical() {
                println!();
                println!("{}", advisory.render());
            }
        }
        OutputFormat::Json => {
            let entries = entries_for(&params.project());
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Ics => {
            print!("{}", generate_ics(&params)?);
        }
    }

    Ok(())
}

pub fn set(settings: &Settings, last_period: Option<String>, length: Option<String>) -> Result<()> {
    if last_period.is_none() && length.is_none() {
        anyhow::bail!("Nothing to update. Pass --last-period and/or --length");
    }

    let mut store = settings.open_store()?;
    let mut tracker = CycleTracker::load(&store)?;

    if let Some(date) = last_period {
        tracker.set_last_period(&date);
    }
    if let Some(length) = length {
        tracker.set_cycle_length(&length);
    }

    // Reject a malformed date before it is stored
    let params = tracker.parameters(0)?;
    tracker.save(&mut store)?;

    println!(
        "{} Last period {}, cycle length {} days",
        "✓".green(),
        params.anchor,
        params.cycle_length_days
    );

    let advisory = tracker.advisory();
    if !advisory.is_typical() {
        println!("{}", advisory.render());
    }

    Ok(())
}

pub fn export(settings: &Settings, path: &Path, horizon: usize) -> Result<()> {
    let store = settings.open_store()?;
    let tracker = CycleTracker::load(&store)?;
    let params = tracker.parameters(horizon)?;

    let ics = generate_ics(&params)?;
    std::fs::write(path, ics).with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{} Exported {} cycles to {}",
        "✓".green(),
        horizon,
        path.display()
    );

    Ok(())
}
