//! Assignment management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use homeroom_core::{
    default_due_date, parse_due_date, AssignmentInput, AssignmentStatus, Config, SortMode,
};

use crate::common::{self, CliResult};

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// Add a new assignment
    Add {
        /// Assignment title
        title: String,
        /// Course or context label
        #[arg(long)]
        course: Option<String>,
        /// Due date: RFC 3339, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD".
        /// Defaults to the coming 21:00
        #[arg(long)]
        due: Option<String>,
        /// Estimated effort in hours
        #[arg(long)]
        hours: Option<f64>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Reminder lead in hours (12, 24, 48 and 72 are the usual picks)
        #[arg(long)]
        lead: Option<u32>,
    },
    /// List assignments
    List {
        /// Sort mode: due-date, status or course
        #[arg(long)]
        sort: Option<SortMode>,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one assignment
    Show {
        /// Assignment ID
        id: String,
    },
    /// Set assignment status
    Status {
        /// Assignment ID
        id: String,
        /// New status: pending, in-progress or done
        status: AssignmentStatus,
    },
    /// Push the due date back by N hours
    Snooze {
        /// Assignment ID
        id: String,
        /// Hours to add to the due date
        hours: i64,
    },
    /// Change the reminder lead without touching the due date
    Lead {
        /// Assignment ID
        id: String,
        /// New lead in hours
        hours: u32,
    },
    /// Remove an assignment
    Remove {
        /// Assignment ID
        id: String,
    },
}

pub fn run(action: AssignmentAction) -> CliResult {
    let config = Config::load_or_default();
    let (store, mut planner) = common::load_planner(&config)?;
    let now = Utc::now();

    match action {
        AssignmentAction::Add {
            title,
            course,
            due,
            hours,
            notes,
            lead,
        } => {
            let due_date = match due {
                Some(raw) => parse_due_date(&raw)?,
                None => default_due_date(now),
            };
            let lead_hours = lead.unwrap_or(config.default_reminder_lead_hours);
            if lead_hours == 0 {
                return Err("reminder lead must be a positive number of hours".into());
            }
            let input = AssignmentInput {
                title,
                course,
                due_date: Some(due_date),
                estimated_hours: hours,
                notes,
            };
            let assignment = planner.create_with_lead(input, now, lead_hours)?.clone();
            store.save(planner.assignments())?;
            println!("Assignment created: {}", assignment.id);
            println!("{}", serde_json::to_string_pretty(&assignment)?);
            common::print_pulse(&planner);
        }
        AssignmentAction::List { sort, json } => {
            if let Some(mode) = sort {
                planner.set_sort_mode(mode);
            }
            let view = planner.sorted();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if view.is_empty() {
                println!("No assignments yet. Add one with `assignment add`.");
            } else {
                for assignment in &view {
                    common::print_assignment_line(assignment, now);
                }
            }
        }
        AssignmentAction::Show { id } => match planner.get(&id) {
            Some(assignment) => println!("{}", serde_json::to_string_pretty(assignment)?),
            None => println!("Assignment not found: {id}"),
        },
        AssignmentAction::Status { id, status } => {
            if planner.set_status(&id, status, now) {
                store.save(planner.assignments())?;
                println!("Status set to {status} for {id}");
                common::print_pulse(&planner);
            } else {
                println!("Assignment not found: {id}");
            }
        }
        AssignmentAction::Snooze { id, hours } => {
            if planner.snooze(&id, hours, now) {
                store.save(planner.assignments())?;
                println!("Due date pushed by {hours}h for {id}");
                common::print_pulse(&planner);
            } else {
                println!("Assignment not found: {id}");
            }
        }
        AssignmentAction::Lead { id, hours } => {
            if hours == 0 {
                return Err("reminder lead must be a positive number of hours".into());
            }
            if planner.set_reminder_lead(&id, hours, now) {
                store.save(planner.assignments())?;
                println!("Reminder lead set to {hours}h for {id}");
            } else {
                println!("Assignment not found: {id}");
            }
        }
        AssignmentAction::Remove { id } => {
            if planner.remove(&id) {
                store.save(planner.assignments())?;
                println!("Assignment removed: {id}");
                common::print_pulse(&planner);
            } else {
                println!("Assignment not found: {id}");
            }
        }
    }
    Ok(())
}
