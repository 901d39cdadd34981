//! Workflow metrics commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use homeroom_core::{compute_metrics, Config};

use crate::common::{self, CliResult};

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Current status and due-date counters
    Show {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MetricsAction) -> CliResult {
    let config = Config::load_or_default();
    let (_store, planner) = common::load_planner(&config)?;

    match action {
        MetricsAction::Show { json } => {
            let metrics = compute_metrics(planner.assignments(), Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                println!("Total:         {}", metrics.total);
                println!("Not started:   {}", metrics.pending);
                println!("In progress:   {}", metrics.in_progress);
                println!("Completed:     {}", metrics.done);
                println!("Due today:     {}", metrics.due_today);
                println!("Due tomorrow:  {}", metrics.due_tomorrow);
                println!("Overdue:       {}", metrics.overdue);
            }
        }
    }
    Ok(())
}
