//! The planner owns the assignment collection and applies user intents.
//!
//! Every mutation replaces records wholesale through the factory, so the
//! collection is always a consistent snapshot; derived views are
//! recomputed in full from one clock reading per pass. Storage order is
//! newest-first and is never rewritten by the sort view.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assignment::{
    build_assignment_with_lead, update_assignment, Assignment, AssignmentInput, AssignmentPatch,
    AssignmentStatus, DEFAULT_REMINDER_LEAD_HOURS,
};
use crate::error::ValidationError;
use crate::insight::{build_insights_with, InsightBundle, InsightConfig};
use crate::metrics::{compute_metrics, MetricsSnapshot};
use crate::reminder::{build_reminders_with, ReminderCandidate, ReminderThresholds};

/// Ordering applied to the outward view of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Ascending due date
    DueDate,
    /// Lexical by serialized status
    Status,
    /// Lexical by course, absent course sorting as empty string
    Course,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::DueDate => "dueDate",
            SortMode::Status => "status",
            SortMode::Course => "course",
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::DueDate
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duedate" | "due-date" | "due_date" | "due" => Ok(SortMode::DueDate),
            "status" => Ok(SortMode::Status),
            "course" => Ok(SortMode::Course),
            other => Err(format!(
                "unknown sort mode '{other}' (expected due-date, status or course)"
            )),
        }
    }
}

/// All derived views, computed from one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    pub metrics: MetricsSnapshot,
    pub insights: InsightBundle,
    pub reminders: Vec<ReminderCandidate>,
}

/// Collection holder and intent surface.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    assignments: Vec<Assignment>,
    sort_mode: SortMode,
}

impl Planner {
    /// An empty planner with the default sort mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing collection (typically loaded from storage).
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            sort_mode: SortMode::default(),
        }
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The collection in storage order (newest first).
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
    }

    /// The outward view under the current sort mode. Storage order is
    /// left untouched; ties keep their storage order (stable sort).
    pub fn sorted(&self) -> Vec<Assignment> {
        let mut view = self.assignments.clone();
        match self.sort_mode {
            SortMode::DueDate => view.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
            SortMode::Status => view.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
            SortMode::Course => view.sort_by(|a, b| {
                a.course
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.course.as_deref().unwrap_or(""))
            }),
        }
        view
    }

    // ── Intents ──────────────────────────────────────────────────────

    /// Create a new assignment at the front of the collection.
    ///
    /// On validation failure the collection is unchanged and the error is
    /// returned to the caller.
    pub fn create(
        &mut self,
        input: AssignmentInput,
        now: DateTime<Utc>,
    ) -> Result<&Assignment, ValidationError> {
        self.create_with_lead(input, now, DEFAULT_REMINDER_LEAD_HOURS)
    }

    /// `create` honoring a configured default reminder lead.
    pub fn create_with_lead(
        &mut self,
        input: AssignmentInput,
        now: DateTime<Utc>,
        lead_hours: u32,
    ) -> Result<&Assignment, ValidationError> {
        let assignment = build_assignment_with_lead(input, now, lead_hours)?;
        self.assignments.insert(0, assignment);
        Ok(&self.assignments[0])
    }

    /// Set the status of an assignment. Unknown ids are a no-op.
    pub fn set_status(&mut self, id: &str, status: AssignmentStatus, now: DateTime<Utc>) -> bool {
        self.patch(id, AssignmentPatch::status(status), now)
    }

    /// Push an assignment's due date by `hours`. Unknown ids are a no-op.
    pub fn snooze(&mut self, id: &str, hours: i64, now: DateTime<Utc>) -> bool {
        let Some(slot) = self.assignments.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        let pushed = slot.due_date + Duration::hours(hours);
        *slot = update_assignment(slot, AssignmentPatch::due_date(pushed), now);
        true
    }

    /// Change the reminder lead without touching the due date.
    pub fn set_reminder_lead(&mut self, id: &str, hours: u32, now: DateTime<Utc>) -> bool {
        self.patch(id, AssignmentPatch::reminder_lead(hours), now)
    }

    /// Remove an assignment. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        self.assignments.len() < before
    }

    fn patch(&mut self, id: &str, patch: AssignmentPatch, now: DateTime<Utc>) -> bool {
        match self.assignments.iter_mut().find(|a| a.id == id) {
            Some(slot) => {
                *slot = update_assignment(slot, patch, now);
                true
            }
            None => false,
        }
    }

    // ── Derivation ───────────────────────────────────────────────────

    /// Recompute every derived view from the snapshot at `now` with
    /// default tunables.
    pub fn derive(&self, now: DateTime<Utc>) -> DerivedViews {
        self.derive_with(
            now,
            &InsightConfig::default(),
            &ReminderThresholds::default(),
        )
    }

    /// Recompute Metrics, Insights and Reminders in sequence, all
    /// observing the same instant.
    pub fn derive_with(
        &self,
        now: DateTime<Utc>,
        insight_config: &InsightConfig,
        reminder_thresholds: &ReminderThresholds,
    ) -> DerivedViews {
        DerivedViews {
            metrics: compute_metrics(&self.assignments, now),
            insights: build_insights_with(&self.assignments, now, insight_config),
            reminders: build_reminders_with(&self.assignments, now, reminder_thresholds),
        }
    }
}
