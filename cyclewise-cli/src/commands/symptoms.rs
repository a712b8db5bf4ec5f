use anyhow::Result;
use cyclewise_core::config::Settings;
use cyclewise_core::store::FileStore;
use cyclewise_core::symptoms::{MAX_RATING, SymptomRatings};
use owo_colors::OwoColorize;

use crate::render::render_symptom;

pub fn list(settings: &Settings) -> Result<()> {
    let ratings = SymptomRatings::load(&settings.open_store()?)?;
    print_ratings(&ratings);
    Ok(())
}

pub fn add(settings: &Settings, name: &str) -> Result<()> {
    update(settings, |ratings| {
        if ratings.contains(&name.trim().to_lowercase()) {
            anyhow::bail!("'{}' is already tracked", name.trim());
        }
        let updated = ratings.with_symptom(name);
        if updated == *ratings {
            anyhow::bail!("Symptom name can't be empty");
        }
        Ok(updated)
    })
}

pub fn remove(settings: &Settings, name: &str) -> Result<()> {
    update(settings, |ratings| {
        let updated = ratings.without_symptom(name);
        if updated == *ratings {
            anyhow::bail!("'{}' is not tracked", name);
        }
        Ok(updated)
    })
}

pub fn rate(settings: &Settings, name: &str, rating: u8) -> Result<()> {
    if rating > MAX_RATING {
        anyhow::bail!("Rating must be between 0 and {}", MAX_RATING);
    }

    update(settings, |ratings| {
        if !ratings.contains(&name.trim().to_lowercase()) {
            anyhow::bail!(
                "'{}' is not tracked. Add it with:\n  cyclewise symptoms add {}",
                name,
                name
            );
        }
        Ok(ratings.with_rating(name, rating))
    })
}

pub fn reset(settings: &Settings) -> Result<()> {
    update(settings, |ratings| Ok(ratings.reset()))
}

/// Load, apply one immutable update, save, and print the result.
fn update(
    settings: &Settings,
    apply: impl FnOnce(&SymptomRatings) -> Result<SymptomRatings>,
) -> Result<()> {
    let mut store: FileStore = settings.open_store()?;
    let ratings = SymptomRatings::load(&store)?;

    let updated = apply(&ratings)?;
    updated.save(&mut store)?;

    print_ratings(&updated);
    Ok(())
}

fn print_ratings(ratings: &SymptomRatings) {
    if ratings.is_empty() {
        println!("{}", "No symptoms tracked".dimmed());
        return;
    }

    for (label, (_, rating)) in ratings.labels().iter().zip(ratings.iter()) {
        println!("{}", render_symptom(label, rating));
    }
}
