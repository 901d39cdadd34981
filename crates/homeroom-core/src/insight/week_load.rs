//! Seven-day workload forecast.
//!
//! Buckets are a fixed Sun-Sat array indexed by days-from-Sunday so the
//! iteration order is stable regardless of which day the window starts on.
//! Days with zero load stay present with 0 hours.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;

/// Canonical day labels, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Estimated hours due on one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub day: String,
    pub hours: f64,
}

/// Workload forecast for the next seven local calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLoad {
    pub total_hours: f64,
    pub breakdown: [DayBucket; 7],
}

impl WeekLoad {
    /// An all-zero forecast.
    pub fn empty() -> Self {
        WeekLoad {
            total_hours: 0.0,
            breakdown: DAY_LABELS.map(|day| DayBucket {
                day: day.to_string(),
                hours: 0.0,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_hours <= f64::EPSILON
    }

    /// The loaded day carrying the most hours, if any day is loaded at all.
    pub fn busiest_day(&self) -> Option<&DayBucket> {
        self.breakdown
            .iter()
            .filter(|bucket| bucket.hours > 0.0)
            .max_by(|a, b| a.hours.total_cmp(&b.hours))
    }
}

/// Partition non-done assignments due within the next seven local calendar
/// days (today included) into day-of-week buckets. Missing estimates fall
/// back to `fallback_hours`.
pub fn build_week_load(
    assignments: &[Assignment],
    now: DateTime<Utc>,
    fallback_hours: f64,
) -> WeekLoad {
    let today = now.with_timezone(&Local).date_naive();
    let mut load = WeekLoad::empty();

    for assignment in assignments {
        if assignment.is_done() {
            continue;
        }
        let due_day = assignment.due_date.with_timezone(&Local).date_naive();
        let offset = due_day.signed_duration_since(today).num_days();
        if !(0..7).contains(&offset) {
            continue;
        }
        let hours = assignment.estimated_hours.unwrap_or(fallback_hours);
        let index = due_day.weekday().num_days_from_sunday() as usize;
        load.breakdown[index].hours += hours;
        load.total_hours += hours;
    }

    load
}
