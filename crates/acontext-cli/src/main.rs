use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "acontext")]
#[command(about = "Acontext CLI - inspect and validate session task records", long_about = None)]
struct Cli {
    /// Default log filter when RUST_LOG is not set
    #[arg(long, global = true, env = "ACONTEXT_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one summary line per task, grouped by session
    Summarize {
        /// JSON file with a task or an array of tasks ("-" or omitted for stdin)
        file: Option<PathBuf>,
        /// Print the decoded records as JSON instead of summaries
        #[arg(long)]
        json: bool,
    },
    /// Check that every record is a valid task
    Validate {
        /// JSON file with a task or an array of tasks ("-" or omitted for stdin)
        file: Option<PathBuf>,
    },
    /// List the valid task statuses
    Statuses,
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Summarize { file, json } => commands::summarize::run(file.as_deref(), json)?,
        Commands::Validate { file } => commands::validate::run(file.as_deref())?,
        Commands::Statuses => commands::statuses::run(),
    }

    Ok(())
}
