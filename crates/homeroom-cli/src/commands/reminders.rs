//! Reminder commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use homeroom_core::{build_reminders_with, hours_left_label, Config};

use crate::common::{self, CliResult};

#[derive(Subcommand)]
pub enum RemindersAction {
    /// Active reminder candidates, most urgent first
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RemindersAction) -> CliResult {
    let config = Config::load_or_default();
    let (_store, planner) = common::load_planner(&config)?;
    let now = Utc::now();

    match action {
        RemindersAction::List { json } => {
            let reminders = build_reminders_with(planner.assignments(), now, &config.reminders);
            if json {
                println!("{}", serde_json::to_string_pretty(&reminders)?);
                return Ok(());
            }

            if reminders.is_empty() {
                println!("No reminders right now.");
                return Ok(());
            }

            println!("{} active alert(s)", reminders.len());
            for candidate in &reminders {
                println!(
                    "  [{}] {} (due {})",
                    hours_left_label(candidate.hours_until_due),
                    candidate.assignment.title,
                    common::format_due(candidate.assignment.due_date)
                );
                println!("    {}", candidate.message);
            }
        }
    }
    Ok(())
}
