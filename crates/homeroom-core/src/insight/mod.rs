//! Insight engine: next actions, weekly forecast, pacing tips, overdue list.
//!
//! All outputs are derived in full from the collection and one clock
//! reading; nothing here caches or mutates. The bundle carries everything
//! a guidance view needs for one render.

pub mod pacing;
pub mod week_load;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;

pub use pacing::PacingThresholds;
pub use week_load::{DayBucket, WeekLoad, DAY_LABELS};

/// One prioritized item in the "do this next" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub id: String,
    pub title: String,
    pub due_date: DateTime<Utc>,
    /// Short planning hint built from estimate and course when present
    pub detail: String,
}

/// A not-done assignment already past its due time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueItem {
    pub id: String,
    pub title: String,
    pub due_date: DateTime<Utc>,
}

/// Everything the guidance view needs, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    pub next_actions: Vec<NextAction>,
    pub week_load: WeekLoad,
    pub pacing_tips: Vec<String>,
    pub overdue_items: Vec<OverdueItem>,
}

/// Tunables for the insight engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Upper bound on the next-action list
    #[serde(default = "default_next_action_limit")]
    pub next_action_limit: usize,
    /// Hours assumed for assignments without an estimate
    #[serde(default = "default_fallback_estimated_hours")]
    pub fallback_estimated_hours: f64,
    #[serde(default)]
    pub pacing: PacingThresholds,
}

fn default_next_action_limit() -> usize {
    4
}

fn default_fallback_estimated_hours() -> f64 {
    1.0
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            next_action_limit: default_next_action_limit(),
            fallback_estimated_hours: default_fallback_estimated_hours(),
            pacing: PacingThresholds::default(),
        }
    }
}

/// Build the insight bundle with default tunables.
pub fn build_insights(assignments: &[Assignment], now: DateTime<Utc>) -> InsightBundle {
    build_insights_with(assignments, now, &InsightConfig::default())
}

/// Build the insight bundle at `now`.
///
/// Next actions and overdue items order by ascending due date with ties
/// broken by id for determinism. Never fails; an empty collection yields
/// empty lists, a zero forecast and a neutral pacing tip.
pub fn build_insights_with(
    assignments: &[Assignment],
    now: DateTime<Utc>,
    config: &InsightConfig,
) -> InsightBundle {
    let mut open: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_done()).collect();
    open.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));

    let next_actions = open
        .iter()
        .take(config.next_action_limit)
        .map(|assignment| NextAction {
            id: assignment.id.clone(),
            title: assignment.title.clone(),
            due_date: assignment.due_date,
            detail: next_action_detail(assignment),
        })
        .collect();

    let overdue_items: Vec<OverdueItem> = open
        .iter()
        .filter(|assignment| assignment.due_date < now)
        .map(|assignment| OverdueItem {
            id: assignment.id.clone(),
            title: assignment.title.clone(),
            due_date: assignment.due_date,
        })
        .collect();

    let week_load = week_load::build_week_load(assignments, now, config.fallback_estimated_hours);
    let pacing_tips = pacing::build_pacing_tips(&week_load, overdue_items.len(), &config.pacing);

    InsightBundle {
        next_actions,
        week_load,
        pacing_tips,
        overdue_items,
    }
}

fn next_action_detail(assignment: &Assignment) -> String {
    match (assignment.estimated_hours, assignment.course.as_deref()) {
        (Some(hours), Some(course)) => {
            format!("Plan about {}h for {course}.", format_hours(hours))
        }
        (Some(hours), None) => {
            format!("Set aside about {}h of focused time.", format_hours(hours))
        }
        (None, Some(course)) => format!("Block a working session for {course} soon."),
        (None, None) => "Prioritize this next.".to_string(),
    }
}

/// Render hours without a trailing `.0` for whole values.
pub(crate) fn format_hours(hours: f64) -> String {
    if hours.fract().abs() < 1e-9 {
        format!("{}", hours as i64)
    } else {
        format!("{hours:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{build_assignment, AssignmentInput, AssignmentStatus};
    use chrono::{Duration, Local, TimeZone};

    fn fixed_noon() -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn make(title: &str, due: DateTime<Utc>, now: DateTime<Utc>) -> Assignment {
        build_assignment(
            AssignmentInput {
                title: title.to_string(),
                due_date: Some(due),
                ..Default::default()
            },
            now,
        )
        .unwrap()
    }

    #[test]
    fn empty_collection_yields_neutral_bundle() {
        let bundle = build_insights(&[], fixed_noon());
        assert!(bundle.next_actions.is_empty());
        assert!(bundle.overdue_items.is_empty());
        assert!(bundle.week_load.is_empty());
        assert_eq!(bundle.pacing_tips.len(), 1);
    }

    #[test]
    fn next_actions_order_by_due_date() {
        let now = fixed_noon();
        let assignments = vec![
            make("later", now + Duration::hours(30), now),
            make("sooner", now + Duration::hours(2), now),
            make("middle", now + Duration::hours(10), now),
        ];
        let bundle = build_insights(&assignments, now);
        let titles: Vec<&str> = bundle
            .next_actions
            .iter()
            .map(|action| action.title.as_str())
            .collect();
        assert_eq!(titles, vec!["sooner", "middle", "later"]);
    }

    #[test]
    fn next_actions_break_ties_by_id() {
        let now = fixed_noon();
        let due = now + Duration::hours(5);
        let mut a = make("alpha", due, now);
        let mut b = make("beta", due, now);
        a.id = "assignment-2".to_string();
        b.id = "assignment-1".to_string();
        let bundle = build_insights(&[a, b], now);
        assert_eq!(bundle.next_actions[0].id, "assignment-1");
        assert_eq!(bundle.next_actions[1].id, "assignment-2");
    }

    #[test]
    fn next_actions_are_bounded() {
        let now = fixed_noon();
        let assignments: Vec<Assignment> = (0..10)
            .map(|i| make(&format!("task {i}"), now + Duration::hours(i), now))
            .collect();
        let config = InsightConfig::default();
        let bundle = build_insights_with(&assignments, now, &config);
        assert_eq!(bundle.next_actions.len(), config.next_action_limit);
    }

    #[test]
    fn detail_templates_use_estimate_and_course() {
        let now = fixed_noon();
        let due = now + Duration::hours(5);

        let mut both = make("a", due, now);
        both.estimated_hours = Some(2.0);
        both.course = Some("Psych 201".to_string());
        let mut hours_only = make("b", due, now);
        hours_only.estimated_hours = Some(1.5);
        let mut course_only = make("c", due, now);
        course_only.course = Some("Writing Lab".to_string());
        let neither = make("d", due, now);

        let bundle = build_insights(&[both, hours_only, course_only, neither], now);
        let details: Vec<&str> = bundle
            .next_actions
            .iter()
            .map(|action| action.detail.as_str())
            .collect();
        assert!(details.iter().any(|d| d.contains("2h") && d.contains("Psych 201")));
        assert!(details.iter().any(|d| d.contains("1.5h")));
        assert!(details.iter().any(|d| d.contains("Writing Lab")));
        assert!(details.iter().any(|d| d.contains("Prioritize")));
    }

    #[test]
    fn overdue_items_most_overdue_first() {
        let now = fixed_noon();
        let assignments = vec![
            make("recent", now - Duration::hours(1), now),
            make("ancient", now - Duration::hours(48), now),
        ];
        let bundle = build_insights(&assignments, now);
        assert_eq!(bundle.overdue_items.len(), 2);
        assert_eq!(bundle.overdue_items[0].title, "ancient");
        assert_eq!(bundle.overdue_items[1].title, "recent");
    }

    #[test]
    fn done_assignments_are_invisible() {
        let now = fixed_noon();
        let mut finished = make("finished", now - Duration::hours(5), now);
        finished.status = AssignmentStatus::Done;
        let bundle = build_insights(&[finished], now);
        assert!(bundle.next_actions.is_empty());
        assert!(bundle.overdue_items.is_empty());
        assert!(bundle.week_load.is_empty());
    }

    #[test]
    fn format_hours_drops_trailing_zero() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(0.5), "0.5");
    }

    #[test]
    fn bundle_serializes_camel_case() {
        let bundle = build_insights(&[], fixed_noon());
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.contains("\"nextActions\""));
        assert!(json.contains("\"weekLoad\""));
        assert!(json.contains("\"pacingTips\""));
        assert!(json.contains("\"overdueItems\""));
        assert!(json.contains("\"totalHours\""));
    }
}
