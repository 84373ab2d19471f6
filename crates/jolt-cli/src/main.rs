use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "jolt-cli", version, about = "Jolt CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a caffeine dose
    Calculate(commands::calculate::CalculateArgs),
    /// Calculation history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// History statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Text report for the most recent calculation
    Report(commands::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calculate(args) => commands::calculate::run(args),
        Commands::History { action } => commands::history::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Report(args) => commands::report::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
