//! Reminder engine: ranked nudges for assignments inside their lead window.
//!
//! A candidate is produced for every non-done assignment whose distance to
//! the due date has dropped to its reminder lead or below; already-overdue
//! items stay in the list with negative hours. Output is ranked most
//! urgent first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::insight::format_hours;

/// Urgency classification derived purely from `hours_until_due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyBand {
    /// Due time already passed
    PastDue,
    /// Inside the very-soon threshold
    VerySoon,
    /// Inside the lead window but not yet pressing
    Soon,
}

impl UrgencyBand {
    pub fn for_hours(hours_until_due: f64, thresholds: &ReminderThresholds) -> Self {
        if hours_until_due <= 0.0 {
            UrgencyBand::PastDue
        } else if hours_until_due <= thresholds.very_soon_hours {
            UrgencyBand::VerySoon
        } else {
            UrgencyBand::Soon
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBand::PastDue => "past due",
            UrgencyBand::VerySoon => "due very soon",
            UrgencyBand::Soon => "due soon",
        }
    }
}

/// Threshold separating "very soon" from merely "soon".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderThresholds {
    #[serde(default = "default_very_soon_hours")]
    pub very_soon_hours: f64,
}

fn default_very_soon_hours() -> f64 {
    6.0
}

impl Default for ReminderThresholds {
    fn default() -> Self {
        Self {
            very_soon_hours: default_very_soon_hours(),
        }
    }
}

/// One active reminder, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCandidate {
    pub assignment: Assignment,
    /// Signed hours to the due date at derivation time; negative is overdue
    pub hours_until_due: f64,
    pub message: String,
}

/// Render the "time left" badge: at least one whole hour, or "past due"
/// once the deadline passed.
pub fn hours_left_label(hours_until_due: f64) -> String {
    if hours_until_due <= 0.0 {
        "past due".to_string()
    } else {
        format!("{}h", hours_until_due.floor().max(1.0) as i64)
    }
}

/// Build the ranked reminder list with default thresholds.
pub fn build_reminders(assignments: &[Assignment], now: DateTime<Utc>) -> Vec<ReminderCandidate> {
    build_reminders_with(assignments, now, &ReminderThresholds::default())
}

/// Build the ranked reminder list at `now`.
///
/// Ordered by ascending `hours_until_due`, ties broken by id. No active
/// reminders yields an empty list, not an error.
pub fn build_reminders_with(
    assignments: &[Assignment],
    now: DateTime<Utc>,
    thresholds: &ReminderThresholds,
) -> Vec<ReminderCandidate> {
    let mut candidates: Vec<ReminderCandidate> = assignments
        .iter()
        .filter(|assignment| !assignment.is_done())
        .filter_map(|assignment| {
            let hours_until_due = assignment.hours_until_due(now);
            if hours_until_due > f64::from(assignment.reminder_lead_hours) {
                return None;
            }
            Some(ReminderCandidate {
                message: reminder_message(assignment, hours_until_due, thresholds),
                hours_until_due,
                assignment: assignment.clone(),
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.hours_until_due
            .total_cmp(&b.hours_until_due)
            .then_with(|| a.assignment.id.cmp(&b.assignment.id))
    });
    candidates
}

fn reminder_message(
    assignment: &Assignment,
    hours_until_due: f64,
    thresholds: &ReminderThresholds,
) -> String {
    match UrgencyBand::for_hours(hours_until_due, thresholds) {
        UrgencyBand::PastDue => format!(
            "\"{}\" is past due. Wrap it up or snooze it to a time you can keep.",
            assignment.title
        ),
        UrgencyBand::VerySoon => format!(
            "\"{}\" is due very soon, about {} left. Make it your next focus block.",
            assignment.title,
            hours_left_label(hours_until_due)
        ),
        UrgencyBand::Soon => {
            let effort = assignment
                .estimated_hours
                .map(|hours| format!(" Plan roughly {}h of work.", format_hours(hours)))
                .unwrap_or_default();
            format!(
                "\"{}\" comes due in about {}. A head start now keeps it light.{}",
                assignment.title,
                hours_left_label(hours_until_due),
                effort
            )
        }
    }
}
