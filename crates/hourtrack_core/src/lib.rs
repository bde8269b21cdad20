//! Core domain logic for HourTrack volunteer-hour reporting.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::commitment::{CommitmentChange, CommitmentValidationError};
pub use model::leaderboard::{EffortColor, LeaderboardEntry, LeaderboardRow};
pub use model::profile::{ProfileValidationError, Role, UserId, UserProfile};
pub use model::role_info::{role_info_name, InfoVisibility, RoleInfo, VisibleRoleInfo};
pub use repo::profile_repo::{
    ProfileRepository, RepoError, RepoResult, SqliteProfileRepository,
};
pub use report::promised_hours::{
    promised_hours, DEFAULT_WEEKLY_COMMITTED_HOURS, HISTORY_NOT_TRACKED,
};
pub use report::week::{
    default_report_offset, end_of_day_instant, WeekWindow, DEFAULT_REPORT_WEEKS,
};
pub use service::leaderboard_service::shape_leaderboard;
pub use service::password_policy::{
    validate_password_change, PasswordChange, PasswordField, PasswordRuleViolation,
    MIN_NEW_PASSWORD_CHARS,
};
pub use service::report_service::{
    alphabetize, visible_role_infos, ReportService, ReportServiceError, SummaryReportRow,
    WeeklyReport, WeeklyReportOptions,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
