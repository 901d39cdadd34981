//! Status and due-date counters over the assignment collection.
//!
//! A snapshot is derived in a single pass and never persisted; callers
//! recompute it from the current collection on every read. Day boundaries
//! follow the host's local calendar at the injected instant.

use chrono::{DateTime, Days, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::{Assignment, AssignmentStatus};

/// Aggregate counters for the current collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
    pub due_today: usize,
    pub due_tomorrow: usize,
    pub overdue: usize,
}

/// Compute a snapshot of the collection at `now`.
///
/// Overdue takes precedence over "due today": an item already past its due
/// time counts as overdue even when the due date falls on the current day.
/// An empty collection yields all-zero counters.
pub fn compute_metrics(assignments: &[Assignment], now: DateTime<Utc>) -> MetricsSnapshot {
    let today = now.with_timezone(&Local).date_naive();
    let tomorrow = today + Days::new(1);

    let mut snapshot = MetricsSnapshot {
        total: assignments.len(),
        ..Default::default()
    };

    for assignment in assignments {
        match assignment.status {
            AssignmentStatus::Pending => snapshot.pending += 1,
            AssignmentStatus::InProgress => snapshot.in_progress += 1,
            AssignmentStatus::Done => snapshot.done += 1,
        }
        if assignment.is_done() {
            continue;
        }
        let due_day = assignment.due_date.with_timezone(&Local).date_naive();
        if assignment.due_date < now {
            snapshot.overdue += 1;
        } else if due_day == today {
            snapshot.due_today += 1;
        } else if due_day == tomorrow {
            snapshot.due_tomorrow += 1;
        }
    }

    snapshot
}
