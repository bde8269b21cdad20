//! Promised-hours resolution.
//!
//! # Responsibility
//! - Determine the committed-hours value that was in effect at the end of
//!   a given week, from a user's commitment-change history.
//!
//! # Invariants
//! - Pure function of its arguments: no mutation, no I/O, no shared state.
//! - The week-end boundary is inclusive: a change dated exactly at the
//!   cutoff instant is in effect for that week.

use crate::model::commitment::CommitmentChange;
use crate::report::week::end_of_day_instant;
use chrono::{FixedOffset, NaiveDate};

/// System-wide default weekly commitment, returned when an account's
/// history is tracked but has no recorded change yet.
pub const DEFAULT_WEEKLY_COMMITTED_HOURS: f64 = 10.0;

/// Sentinel returned for accounts that predate commitment-history tracking
/// and therefore have no history at all.
pub const HISTORY_NOT_TRACKED: f64 = -1.0;

/// Resolves the hours a user had promised for the week ending on
/// `end_of_week`.
///
/// Committed hours form a step function over time; this returns the value
/// of that step function at the end-of-day instant (23:59:59.999 in
/// `offset`) of `end_of_week`:
///
/// - `None` history (account predates tracking) resolves to
///   [`HISTORY_NOT_TRACKED`].
/// - An empty history resolves to [`DEFAULT_WEEKLY_COMMITTED_HOURS`].
/// - Otherwise the latest change dated on or before the cutoff wins.
/// - If every change is dated after the cutoff, the user had not yet
///   joined that week and 0.0 is returned.
///
/// Histories are appended in chronological order, but stored order is not
/// trusted: entries are re-sorted by `date_changed` before scanning. The
/// sort is stable, so among changes with identical timestamps the
/// later-appended one wins.
pub fn promised_hours(
    end_of_week: NaiveDate,
    offset: FixedOffset,
    history: Option<&[CommitmentChange]>,
) -> f64 {
    let Some(history) = history else {
        return HISTORY_NOT_TRACKED;
    };
    if history.is_empty() {
        return DEFAULT_WEEKLY_COMMITTED_HOURS;
    }

    let cutoff = end_of_day_instant(end_of_week, offset);

    let mut ordered: Vec<&CommitmentChange> = history.iter().collect();
    ordered.sort_by_key(|change| change.date_changed);

    for change in ordered.iter().rev() {
        if change.date_changed <= cutoff {
            return change.hours;
        }
    }

    0.0
}
