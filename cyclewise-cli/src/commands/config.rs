use anyhow::Result;
use cyclewise_core::config::{CycleWiseConfig, Settings};
use cyclewise_core::store::STORE_FILE_NAME;
use owo_colors::OwoColorize;

pub fn run(settings: &Settings) -> Result<()> {
    let config_path = CycleWiseConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", settings.display_path().display());
    println!(
        "  Store:   {}",
        settings.data_path().join(STORE_FILE_NAME).display()
    );
    println!();
    println!("{}", "Settings".bold());
    println!("  Horizon: {} cycles", settings.horizon_cycles());

    Ok(())
}
