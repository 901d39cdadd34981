use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "homeroom-cli", version, about = "Homeroom CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assignment management
    Assignment {
        #[command(subcommand)]
        action: commands::assignment::AssignmentAction,
    },
    /// Workflow metrics
    Metrics {
        #[command(subcommand)]
        action: commands::metrics::MetricsAction,
    },
    /// Weekly guidance
    Insights {
        #[command(subcommand)]
        action: commands::insights::InsightsAction,
    },
    /// Reminder candidates
    Reminders {
        #[command(subcommand)]
        action: commands::reminders::RemindersAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Assignment { action } => commands::assignment::run(action),
        Commands::Metrics { action } => commands::metrics::run(action),
        Commands::Insights { action } => commands::insights::run(action),
        Commands::Reminders { action } => commands::reminders::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
