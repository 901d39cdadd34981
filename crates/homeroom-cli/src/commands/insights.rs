//! Weekly guidance commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use homeroom_core::{build_insights_with, Config};

use crate::common::{self, CliResult};

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Next actions, workload forecast, pacing tips and overdue items
    Show {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: InsightsAction) -> CliResult {
    let config = Config::load_or_default();
    let (_store, planner) = common::load_planner(&config)?;
    let now = Utc::now();

    match action {
        InsightsAction::Show { json } => {
            let insights = build_insights_with(planner.assignments(), now, &config.insights);
            if json {
                println!("{}", serde_json::to_string_pretty(&insights)?);
                return Ok(());
            }

            println!("Next actions");
            if insights.next_actions.is_empty() {
                println!("  (nothing queued)");
            }
            for action in &insights.next_actions {
                println!(
                    "  {} (due {})",
                    action.title,
                    common::format_due(action.due_date)
                );
                println!("    {}", action.detail);
            }

            println!();
            println!("Workload forecast ({:.1}h total)", insights.week_load.total_hours);
            for bucket in &insights.week_load.breakdown {
                let bar = "#".repeat((bucket.hours.ceil() as usize).min(40));
                println!("  {:<4}{:>6.1}h  {}", bucket.day, bucket.hours, bar);
            }

            println!();
            println!("Pacing tips");
            for tip in &insights.pacing_tips {
                println!("  - {tip}");
            }

            if !insights.overdue_items.is_empty() {
                println!();
                println!("Catch up now");
                for item in &insights.overdue_items {
                    println!(
                        "  {} (was due {})",
                        item.title,
                        common::format_due(item.due_date)
                    );
                }
            }
        }
    }
    Ok(())
}
