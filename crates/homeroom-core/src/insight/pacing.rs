//! Pacing advice derived from the weekly forecast.
//!
//! Rules fire in a fixed order so the tip list is deterministic for a
//! given forecast: catch-up, heavy day, packed week, then a fallback so
//! the list is never empty. Threshold values are presentation-tuned and
//! configurable; tests assert selection and ordering, not wording.

use serde::{Deserialize, Serialize};

use super::week_load::WeekLoad;

/// Thresholds steering which pacing tips fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingThresholds {
    /// A single day carrying at least this many hours gets a heavy-day tip
    #[serde(default = "default_heavy_day_hours")]
    pub heavy_day_hours: f64,
    /// A week totalling at least this many hours gets a spread-out tip
    #[serde(default = "default_packed_week_hours")]
    pub packed_week_hours: f64,
}

fn default_heavy_day_hours() -> f64 {
    4.0
}

fn default_packed_week_hours() -> f64 {
    12.0
}

impl Default for PacingThresholds {
    fn default() -> Self {
        Self {
            heavy_day_hours: default_heavy_day_hours(),
            packed_week_hours: default_packed_week_hours(),
        }
    }
}

/// Build the ordered tip list for a forecast.
pub fn build_pacing_tips(
    week_load: &WeekLoad,
    overdue_count: usize,
    thresholds: &PacingThresholds,
) -> Vec<String> {
    let mut tips = Vec::new();

    if overdue_count > 0 {
        let plural = if overdue_count == 1 { "" } else { "s" };
        tips.push(format!(
            "Clear {overdue_count} overdue assignment{plural} first to get back on pace."
        ));
    }

    if let Some(busiest) = week_load.busiest_day() {
        if busiest.hours >= thresholds.heavy_day_hours {
            tips.push(format!(
                "{} is your heaviest day at {:.1}h. Start its biggest piece early.",
                busiest.day, busiest.hours
            ));
        }
    }

    if week_load.total_hours >= thresholds.packed_week_hours {
        tips.push(format!(
            "This week holds {:.1}h of estimated work. Spread sessions across lighter days.",
            week_load.total_hours
        ));
    }

    if tips.is_empty() {
        if week_load.is_empty() {
            tips.push(
                "Nothing is due in the next seven days. Add upcoming work or enjoy the slack."
                    .to_string(),
            );
        } else {
            tips.push(format!(
                "A steady pace covers this week: about {:.1}h before the next due dates.",
                week_load.total_hours
            ));
        }
    }

    tips
}
