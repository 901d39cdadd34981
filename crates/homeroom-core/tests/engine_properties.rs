//! End-to-end properties of the derivation engines.
//!
//! These tests exercise the factory, planner and all three engines
//! together on realistic collections, including the monotone reminder
//! ordering property over generated inputs.

use chrono::{Duration, Local, TimeZone, Utc};
use proptest::prelude::*;

use homeroom_core::{
    build_reminders, compute_metrics, AssignmentInput, AssignmentStatus, Planner,
};

fn fixed_noon() -> chrono::DateTime<Utc> {
    Local
        .with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn input(title: &str, due: chrono::DateTime<Utc>) -> AssignmentInput {
    AssignmentInput {
        title: title.to_string(),
        due_date: Some(due),
        ..Default::default()
    }
}

#[test]
fn create_then_metrics_reports_a_single_pending() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    planner
        .create(input("Essay", now + Duration::hours(48)), now)
        .unwrap();

    let metrics = compute_metrics(planner.assignments(), now);
    assert_eq!(metrics.total, 1);
    assert_eq!(metrics.pending, 1);
    assert_eq!(metrics.in_progress, 0);
    assert_eq!(metrics.done, 0);
}

#[test]
fn update_preserves_identity_and_advances_updated_at() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    let id = planner
        .create(input("Lab", now + Duration::hours(5)), now)
        .unwrap()
        .id
        .clone();
    let created_at = planner.get(&id).unwrap().created_at;

    let later = now + Duration::minutes(10);
    planner.set_status(&id, AssignmentStatus::InProgress, later);

    let updated = planner.get(&id).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at > created_at);
}

#[test]
fn derivation_is_idempotent() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    planner
        .create(input("a", now + Duration::hours(2)), now)
        .unwrap();
    planner
        .create(input("b", now - Duration::hours(6)), now)
        .unwrap();
    planner
        .create(input("c", now + Duration::days(3)), now)
        .unwrap();

    let first = planner.derive(now);
    let second = planner.derive(now);
    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.insights, second.insights);
    assert_eq!(first.reminders, second.reminders);
}

#[test]
fn overdue_shows_up_in_metrics_and_insights() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    planner
        .create(input("Past due reading", now - Duration::hours(1)), now)
        .unwrap();

    let views = planner.derive(now);
    assert!(views.metrics.overdue >= 1);
    assert_eq!(views.insights.overdue_items.len(), 1);
    assert_eq!(views.insights.overdue_items[0].title, "Past due reading");
}

#[test]
fn snooze_moves_due_date_exactly() {
    let now = fixed_noon();
    let due = now + Duration::hours(3);
    let mut planner = Planner::new();
    let mut seeded = input("Quiz prep", due);
    seeded.course = Some("History".to_string());
    seeded.estimated_hours = Some(2.0);
    let id = planner.create(seeded, now).unwrap().id.clone();
    let before = planner.get(&id).unwrap().clone();

    let later = now + Duration::minutes(1);
    assert!(planner.snooze(&id, 24, later));

    let after = planner.get(&id).unwrap();
    assert_eq!(after.due_date, due + Duration::hours(24));
    assert_eq!(after.title, before.title);
    assert_eq!(after.course, before.course);
    assert_eq!(after.estimated_hours, before.estimated_hours);
    assert_eq!(after.status, before.status);
    assert_eq!(after.reminder_lead_hours, before.reminder_lead_hours);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.updated_at, later);
}

#[test]
fn essay_due_in_two_hours_scenario() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    planner
        .create(input("Essay", now + Duration::hours(2)), now)
        .unwrap();

    let views = planner.derive(now);

    assert_eq!(views.reminders.len(), 1);
    assert!((views.reminders[0].hours_until_due - 2.0).abs() < 0.01);

    assert_eq!(views.insights.next_actions.len(), 1);
    assert_eq!(views.insights.next_actions[0].title, "Essay");

    // No estimate given: the forecast uses the 1.0h fallback.
    assert!((views.insights.week_load.total_hours - 1.0).abs() < 1e-9);
}

#[test]
fn empty_collection_scenario() {
    let planner = Planner::new();
    let views = planner.derive(fixed_noon());

    assert_eq!(views.metrics, Default::default());
    assert!(views.insights.next_actions.is_empty());
    assert!(views.insights.overdue_items.is_empty());
    assert!(views.insights.week_load.is_empty());
    assert_eq!(views.insights.pacing_tips.len(), 1);
    assert!(views.reminders.is_empty());
}

#[test]
fn done_assignments_are_excluded_everywhere() {
    let now = fixed_noon();
    let mut planner = Planner::new();
    let id = planner
        .create(input("Old homework", now - Duration::hours(20)), now)
        .unwrap()
        .id
        .clone();
    planner.set_status(&id, AssignmentStatus::Done, now);

    let views = planner.derive(now);
    assert_eq!(views.metrics.overdue, 0);
    assert_eq!(views.metrics.done, 1);
    assert!(views.insights.overdue_items.is_empty());
    assert!(views.reminders.is_empty());
}

proptest! {
    /// For any two adjacent candidates A before B, A is at least as urgent.
    #[test]
    fn reminder_ordering_is_monotone(offsets in prop::collection::vec(-200i64..200, 0..24)) {
        let now = Utc::now();
        let mut planner = Planner::new();
        for (index, offset) in offsets.iter().enumerate() {
            planner
                .create(
                    input(&format!("task {index}"), now + Duration::hours(*offset)),
                    now,
                )
                .unwrap();
        }

        let reminders = build_reminders(planner.assignments(), now);
        for pair in reminders.windows(2) {
            prop_assert!(pair[0].hours_until_due <= pair[1].hours_until_due);
        }
    }

    /// Every candidate is inside its own lead window and not done.
    #[test]
    fn reminder_candidates_respect_the_lead_window(offsets in prop::collection::vec(-100i64..100, 0..16)) {
        let now = Utc::now();
        let mut planner = Planner::new();
        for (index, offset) in offsets.iter().enumerate() {
            planner
                .create(
                    input(&format!("task {index}"), now + Duration::hours(*offset)),
                    now,
                )
                .unwrap();
        }

        let reminders = build_reminders(planner.assignments(), now);
        for candidate in &reminders {
            prop_assert!(
                candidate.hours_until_due
                    <= f64::from(candidate.assignment.reminder_lead_hours)
            );
            prop_assert!(candidate.assignment.status != AssignmentStatus::Done);
        }
    }
}
