//! # Homeroom Core Library
//!
//! Core business logic for Homeroom, a single-user assignment tracker.
//! The CLI binary is a thin layer over this library; every operation is
//! available programmatically.
//!
//! ## Architecture
//!
//! - **Assignment factory**: validated construction and patch-style
//!   mutation of assignment records, pure given a clock reading
//! - **Derivation engines**: metrics counters, the insight bundle (next
//!   actions, weekly forecast, pacing tips, overdue list) and ranked
//!   reminder candidates, each recomputed in full from the current
//!   collection -- no caches, no incremental state
//! - **Planner**: owns the collection, applies user intents atomically and
//!   exposes the sorted view
//! - **Storage**: JSON-backed assignment store and TOML configuration
//!
//! ## Key Components
//!
//! - [`Planner`]: collection holder and intent surface
//! - [`MetricsSnapshot`]: status and due-date counters
//! - [`InsightBundle`]: prioritized guidance for the week ahead
//! - [`ReminderCandidate`]: an assignment inside its reminder window

pub mod assignment;
pub mod error;
pub mod insight;
pub mod metrics;
pub mod planner;
pub mod reminder;
pub mod storage;

pub use assignment::{
    build_assignment, build_assignment_with_lead, default_due_date, parse_due_date,
    update_assignment, Assignment, AssignmentInput, AssignmentPatch, AssignmentStatus,
    DEFAULT_REMINDER_LEAD_HOURS,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use insight::{
    build_insights, build_insights_with, DayBucket, InsightBundle, InsightConfig, NextAction,
    OverdueItem, PacingThresholds, WeekLoad,
};
pub use metrics::{compute_metrics, MetricsSnapshot};
pub use planner::{DerivedViews, Planner, SortMode};
pub use reminder::{
    build_reminders, build_reminders_with, hours_left_label, ReminderCandidate,
    ReminderThresholds, UrgencyBand,
};
pub use storage::{data_dir, AssignmentStore, Config};
