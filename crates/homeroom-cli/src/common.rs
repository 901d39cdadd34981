//! Shared helpers for CLI commands.

use chrono::{DateTime, Local, Utc};
use homeroom_core::{compute_metrics, Assignment, AssignmentStore, Config, Planner};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load the persisted collection into a planner with the configured
/// default sort mode.
pub fn load_planner(config: &Config) -> Result<(AssignmentStore, Planner), Box<dyn std::error::Error>> {
    let store = AssignmentStore::open()?;
    let planner =
        Planner::from_assignments(store.load()).with_sort_mode(config.default_sort_mode);
    Ok((store, planner))
}

/// One-line status pulse printed after mutations.
pub fn print_pulse(planner: &Planner) {
    let metrics = compute_metrics(planner.assignments(), Utc::now());
    println!(
        "{} total | {} pending | {} in progress | {} overdue",
        metrics.total, metrics.pending, metrics.in_progress, metrics.overdue
    );
}

/// Due date formatted the way the list view shows it.
pub fn format_due(due: DateTime<Utc>) -> String {
    due.with_timezone(&Local)
        .format("%a, %b %e %H:%M")
        .to_string()
}

/// Relative distance to the due date ("3h left", "2d overdue").
pub fn format_relative(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (due - now).num_minutes();
    let (magnitude, suffix) = if minutes < 0 {
        (-minutes, "overdue")
    } else {
        (minutes, "left")
    };
    let label = if magnitude >= 48 * 60 {
        format!("{}d", magnitude / (24 * 60))
    } else if magnitude >= 60 {
        format!("{}h", magnitude / 60)
    } else {
        format!("{magnitude}m")
    };
    format!("{label} {suffix}")
}

/// Print one assignment as a list row.
pub fn print_assignment_line(assignment: &Assignment, now: DateTime<Utc>) {
    let course = assignment
        .course
        .as_deref()
        .map(|course| format!(" [{course}]"))
        .unwrap_or_default();
    let overdue = if assignment.is_overdue(now) {
        "  !! overdue"
    } else {
        ""
    };
    println!(
        "{}  {}{}  ({}, due {}, {}){}",
        assignment.id,
        assignment.title,
        course,
        assignment.status.label(),
        format_due(assignment.due_date),
        format_relative(assignment.due_date, now),
        overdue
    );
}
