//! Assignment records and the factory that builds and mutates them.
//!
//! The factory is pure given a clock reading: `build_assignment` and
//! `update_assignment` take `now` explicitly so callers (and tests) control
//! the observed instant. Identity and timestamps are assigned here and
//! nowhere else.

use chrono::offset::LocalResult;
use chrono::{DateTime, Days, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Reminder lead applied to newly created assignments, in hours.
pub const DEFAULT_REMINDER_LEAD_HOURS: u32 = 24;

/// Assignment progress state.
///
/// Transitions are unrestricted: this is a user-driven toggle, not a
/// workflow machine. Any state is reachable from any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    /// Not started yet
    Pending,
    /// Currently being worked on
    InProgress,
    /// Finished
    Done,
}

impl AssignmentStatus {
    /// Serialized form, also used as the lexical sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::InProgress => "in-progress",
            AssignmentStatus::Done => "done",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Not started",
            AssignmentStatus::InProgress => "In progress",
            AssignmentStatus::Done => "Completed",
        }
    }

    pub const ALL: [AssignmentStatus; 3] = [
        AssignmentStatus::Pending,
        AssignmentStatus::InProgress,
        AssignmentStatus::Done,
    ];
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        AssignmentStatus::Pending
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AssignmentStatus::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(AssignmentStatus::InProgress),
            "done" => Ok(AssignmentStatus::Done),
            other => Err(format!(
                "unknown status '{other}' (expected pending, in-progress or done)"
            )),
        }
    }
}

/// Raw input captured from the presentation layer.
///
/// `due_date` stays optional at the type level so the factory itself can
/// report the missing-due-date validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A tracked assignment.
///
/// Owned by the planner's collection; everything downstream reads it
/// immutably. Absent optionals serialize as omitted fields, never `null`,
/// so persisted records round-trip losslessly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier, immutable after creation
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// May lie in the past: that is an overdue item, not an error
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AssignmentStatus,
    /// Hours before `due_date` at which a reminder becomes active
    pub reminder_lead_hours: u32,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn is_done(&self) -> bool {
        self.status == AssignmentStatus::Done
    }

    /// Not done and past due at `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_done() && self.due_date < now
    }

    /// Signed distance to the due date in hours. Negative once past due.
    pub fn hours_until_due(&self, now: DateTime<Utc>) -> f64 {
        (self.due_date - now).num_seconds() as f64 / 3600.0
    }
}

/// Patch applied by `update_assignment`.
///
/// Fields are trusted: the intent that produced them (status toggle,
/// snooze, lead change) validated upstream. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub course: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub estimated_hours: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<AssignmentStatus>,
    pub reminder_lead_hours: Option<u32>,
}

impl AssignmentPatch {
    pub fn status(status: AssignmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn due_date(due_date: DateTime<Utc>) -> Self {
        Self {
            due_date: Some(due_date),
            ..Default::default()
        }
    }

    pub fn reminder_lead(hours: u32) -> Self {
        Self {
            reminder_lead_hours: Some(hours),
            ..Default::default()
        }
    }
}

/// Build a new assignment from user input.
///
/// Fails when the title is empty after trimming, the due date is absent,
/// or the estimate is not a finite positive number. No record is created
/// on failure.
pub fn build_assignment(
    input: AssignmentInput,
    now: DateTime<Utc>,
) -> Result<Assignment, ValidationError> {
    build_assignment_with_lead(input, now, DEFAULT_REMINDER_LEAD_HOURS)
}

/// `build_assignment` honoring a configured default reminder lead.
pub fn build_assignment_with_lead(
    input: AssignmentInput,
    now: DateTime<Utc>,
    lead_hours: u32,
) -> Result<Assignment, ValidationError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let due_date = input.due_date.ok_or(ValidationError::MissingDueDate)?;
    if let Some(hours) = input.estimated_hours {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(ValidationError::InvalidEstimate { value: hours });
        }
    }

    Ok(Assignment {
        id: format!("assignment-{}-{}", now.timestamp_millis(), uuid::Uuid::new_v4()),
        title,
        course: normalize_optional(input.course),
        due_date,
        estimated_hours: input.estimated_hours,
        notes: normalize_optional(input.notes),
        status: AssignmentStatus::Pending,
        reminder_lead_hours: lead_hours.max(1),
        created_at: now,
        updated_at: now,
    })
}

/// Return a new record with the patch applied and `updated_at` refreshed.
///
/// `id` and `created_at` are never touched. Never fails.
pub fn update_assignment(
    assignment: &Assignment,
    patch: AssignmentPatch,
    now: DateTime<Utc>,
) -> Assignment {
    let mut updated = assignment.clone();
    if let Some(title) = patch.title {
        updated.title = title;
    }
    if let Some(course) = patch.course {
        updated.course = normalize_optional(Some(course));
    }
    if let Some(due_date) = patch.due_date {
        updated.due_date = due_date;
    }
    if let Some(estimated_hours) = patch.estimated_hours {
        updated.estimated_hours = Some(estimated_hours);
    }
    if let Some(notes) = patch.notes {
        updated.notes = normalize_optional(Some(notes));
    }
    if let Some(status) = patch.status {
        updated.status = status;
    }
    if let Some(lead) = patch.reminder_lead_hours {
        updated.reminder_lead_hours = lead.max(1);
    }
    updated.updated_at = now;
    updated
}

/// Parse a due date from user input.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM`, and a
/// bare `YYYY-MM-DD` (end of that local day). Naive forms are read in the
/// host's local time zone.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingDueDate);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(local_to_utc(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(23, 59, 0) {
            return Ok(local_to_utc(naive));
        }
    }
    Err(ValidationError::UnparsableDueDate {
        value: raw.to_string(),
    })
}

/// Suggested due date when the user gives none: tonight at 21:00 local,
/// or tomorrow evening if that has already passed.
pub fn default_due_date(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.with_timezone(&Local).date_naive();
    for day in [today, today + Days::new(1)] {
        if let Some(naive) = day.and_hms_opt(21, 0, 0) {
            let candidate = local_to_utc(naive);
            if candidate > now {
                return candidate;
            }
        }
    }
    now + Duration::hours(24)
}

fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(local) => local.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Skipped by a DST jump; read the wall time as UTC instead.
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
