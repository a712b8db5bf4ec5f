mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cyclewise_core::config::Settings;

#[derive(Parser)]
#[command(name = "cyclewise")]
#[command(about = "Predict your cycle, track symptoms and find care nearby")]
struct Cli {
    /// Show debug logging from cyclewise crates
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle predictions
    Cycle {
        #[command(subcommand)]
        command: CycleCommand,
    },
    /// Symptom ratings
    Symptoms {
        #[command(subcommand)]
        command: SymptomsCommand,
    },
    /// Chat transcript
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },
    /// Search healthcare facilities by name or address
    Facilities { query: Option<String> },
    /// Show config and data paths
    Config,
}

#[derive(Subcommand)]
enum CycleCommand {
    /// Show predicted periods, fertile windows and ovulation days
    Show {
        /// Number of cycles to predict (defaults to config)
        #[arg(long)]
        horizon: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Update the last period date and/or cycle length
    Set {
        /// Start of the last period (YYYY-MM-DD)
        #[arg(long)]
        last_period: Option<String>,

        /// Cycle length in days
        #[arg(long, allow_hyphen_values = true)]
        length: Option<String>,
    },
    /// Write predictions to an .ics file
    Export {
        path: std::path::PathBuf,

        #[arg(long)]
        horizon: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ics,
}

#[derive(Subcommand)]
enum SymptomsCommand {
    List,
    Add { name: String },
    Remove { name: String },
    /// Rate a symptom from 0 to 5
    Rate { name: String, rating: u8 },
    /// Restore the default symptoms
    Reset,
}

#[derive(Subcommand)]
enum ChatCommand {
    Show,
    /// Add a message from you
    Say { text: String },
    /// Add a reply from the assistant
    Reply { text: String },
    /// Write the transcript as plain text (stdout when no path is given)
    Export { path: Option<std::path::PathBuf> },
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let settings = Settings::load()?;

    match cli.command {
        Commands::Cycle { command } => match command {
            CycleCommand::Show { horizon, format } => {
                let horizon = horizon.unwrap_or_else(|| settings.horizon_cycles());
                commands::cycle::show(&settings, horizon, format)
            }
            CycleCommand::Set {
                last_period,
                length,
            } => commands::cycle::set(&settings, last_period, length),
            CycleCommand::Export { path, horizon } => {
                let horizon = horizon.unwrap_or_else(|| settings.horizon_cycles());
                commands::cycle::export(&settings, &path, horizon)
            }
        },
        Commands::Symptoms { command } => match command {
            SymptomsCommand::List => commands::symptoms::list(&settings),
            SymptomsCommand::Add { name } => commands::symptoms::add(&settings, &name),
            SymptomsCommand::Remove { name } => commands::symptoms::remove(&settings, &name),
            SymptomsCommand::Rate { name, rating } => {
                commands::symptoms::rate(&settings, &name, rating)
            }
            SymptomsCommand::Reset => commands::symptoms::reset(&settings),
        },
        Commands::Chat { command } => match command {
            ChatCommand::Show => commands::chat::show(&settings),
            ChatCommand::Say { text } => commands::chat::say(&settings, &text),
            ChatCommand::Reply { text } => commands::chat::reply(&settings, &text),
            ChatCommand::Export { path } => commands::chat::export(&settings, path.as_deref()),
            ChatCommand::Clear => commands::chat::clear(&settings),
        },
        Commands::Facilities { query } => commands::facilities::run(query.as_deref()),
        Commands::Config => commands::config::run(&settings),
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if debug {
        EnvFilter::new("cyclewise_core=debug,cyclewise_cli=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
