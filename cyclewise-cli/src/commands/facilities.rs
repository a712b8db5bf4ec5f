use anyhow::Result;
use cyclewise_core::facilities::Directory;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(query: Option<&str>) -> Result<()> {
    let directory = Directory::default();
    let results = directory.search(query.unwrap_or_default());

    if results.is_empty() {
        println!("{}", "No facilities found".dimmed());
        return Ok(());
    }

    for (i, facility) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("📍 {}", facility.render());
    }

    Ok(())
}
