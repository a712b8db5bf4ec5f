use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use cyclewise_core::chat::ChatTranscript;
use cyclewise_core::config::Settings;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn show(settings: &Settings) -> Result<()> {
    let transcript = ChatTranscript::load(&settings.open_store()?, Utc::now())?;
    print_transcript(&transcript);
    Ok(())
}

pub fn say(settings: &Settings, text: &str) -> Result<()> {
    let mut store = settings.open_store()?;
    let mut transcript = ChatTranscript::load(&store, Utc::now())?;

    let Some(message) = transcript.push_user(text, Utc::now()) else {
        anyhow::bail!("Message can't be empty");
    };
    println!("{}", message.render());

    transcript.save(&mut store)?;
    Ok(())
}

pub fn reply(settings: &Settings, text: &str) -> Result<()> {
    let mut store = settings.open_store()?;
    let mut transcript = ChatTranscript::load(&store, Utc::now())?;

    let message = if text.trim().is_empty() {
        transcript.push_failure(Utc::now())
    } else {
        transcript.push_assistant(text, Utc::now())
    };
    println!("{}", message.render());

    transcript.save(&mut store)?;
    Ok(())
}

pub fn export(settings: &Settings, path: Option<&Path>) -> Result<()> {
    let transcript = ChatTranscript::load(&settings.open_store()?, Utc::now())?;
    let text = transcript.export_text();

    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!("{} Exported chat to {}", "✓".green(), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

pub fn clear(settings: &Settings) -> Result<()> {
    let mut store = settings.open_store()?;
    let mut transcript = ChatTranscript::load(&store, Utc::now())?;
    transcript.clear(&mut store)?;

    println!("{} Chat history cleared", "✓".green());
    Ok(())
}

fn print_transcript(transcript: &ChatTranscript) {
    if transcript.is_empty() {
        println!("{}", "No messages".dimmed());
        return;
    }

    for message in transcript.messages() {
        println!("{}", message.render());
    }
}
