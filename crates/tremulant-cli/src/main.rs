//! Tremulant CLI - offline host for the wavetable tremolo effect.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tremulant")]
#[command(author, version, about = "Wavetable amplitude modulation for WAV files", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an audio file through the effect
    Process(commands::process::ProcessArgs),

    /// Show WAV file information
    Info(commands::info::InfoArgs),

    /// Show the effect's parameters
    Params(commands::params::ParamsArgs),

    /// List and manage presets
    Presets(commands::presets::PresetsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
