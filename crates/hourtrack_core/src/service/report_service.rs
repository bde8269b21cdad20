//! Weekly summaries report assembly.
//!
//! # Responsibility
//! - Build the per-user, per-week promised-hours report from the profile
//!   store.
//! - Filter role-info entries down to what a given viewer may see.
//!
//! # Invariants
//! - Report rows are sorted by case-insensitive `"first last"` name.
//! - `promised_hours_by_week` holds one value per window, index 0 being
//!   the current week.

use crate::model::profile::{Role, UserId, UserProfile};
use crate::model::role_info::{role_info_name, RoleInfo, VisibleRoleInfo};
use crate::repo::profile_repo::{ProfileRepository, RepoError};
use crate::report::promised_hours::promised_hours;
use crate::report::week::{default_report_offset, WeekWindow};
use chrono::{DateTime, FixedOffset, Utc};
use log::{error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Inputs fixing the report's reference point in time.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyReportOptions {
    /// Instant the report is generated for; windows are derived from it.
    pub generated_at: DateTime<Utc>,
    /// Offset the week boundaries are evaluated in.
    pub offset: FixedOffset,
}

impl WeeklyReportOptions {
    /// Options for `generated_at` with the default reference offset.
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            offset: default_report_offset(),
        }
    }
}

/// One user's row in the weekly summaries report.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReportRow {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Resolved promised hours, one value per report window.
    pub promised_hours_by_week: Vec<f64>,
}

/// Assembled weekly summaries report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub windows: Vec<WeekWindow>,
    pub rows: Vec<SummaryReportRow>,
}

/// Service error for report assembly.
#[derive(Debug)]
pub enum ReportServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ReportServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReportServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ReportServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Report facade over a profile repository implementation.
pub struct ReportService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds the weekly summaries report for every stored profile.
    ///
    /// # Side effects
    /// - Emits a `report_build` logging event with duration and row count.
    pub fn build_weekly_report(
        &self,
        options: &WeeklyReportOptions,
    ) -> Result<WeeklyReport, ReportServiceError> {
        let started_at = Instant::now();
        let result = self.assemble(options);

        let duration_ms = started_at.elapsed().as_millis();
        match &result {
            Ok(report) => info!(
                "event=report_build module=service status=ok rows={} weeks={} duration_ms={duration_ms}",
                report.rows.len(),
                report.windows.len()
            ),
            Err(err) => error!(
                "event=report_build module=service status=error duration_ms={duration_ms} error={err}"
            ),
        }

        result
    }

    fn assemble(&self, options: &WeeklyReportOptions) -> Result<WeeklyReport, ReportServiceError> {
        let mut profiles = self.repo.list_profiles()?;
        alphabetize(&mut profiles);

        let windows = WeekWindow::report_windows(options.generated_at, options.offset);

        let mut rows = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let history = self.repo.commitment_history(profile.uuid)?;
            let promised_hours_by_week = windows
                .iter()
                .map(|window| promised_hours(window.to_date, window.offset, history.as_deref()))
                .collect();

            rows.push(SummaryReportRow {
                user_id: profile.uuid,
                first_name: profile.first_name,
                last_name: profile.last_name,
                role: profile.role,
                promised_hours_by_week,
            });
        }

        Ok(WeeklyReport { windows, rows })
    }
}

/// Sorts profiles by case-insensitive `"first last"` display name.
pub fn alphabetize(profiles: &mut [UserProfile]) {
    profiles.sort_by_key(|profile| profile.display_name().to_lowercase());
}

/// Keeps the role-info entries relevant to the report's rows, annotating
/// each with whether `viewer_role` may read it.
pub fn visible_role_infos(
    infos: Vec<RoleInfo>,
    rows: &[SummaryReportRow],
    viewer_role: Role,
) -> Vec<VisibleRoleInfo> {
    let wanted: BTreeSet<String> = rows.iter().map(|row| role_info_name(row.role)).collect();

    infos
        .into_iter()
        .filter(|info| wanted.contains(&info.info_name))
        .map(|info| VisibleRoleInfo {
            can_read: info.visibility.can_read(viewer_role),
            info,
        })
        .collect()
}
