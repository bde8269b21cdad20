//! Leaderboard row shaping.
//!
//! # Responsibility
//! - Derive display-ready leaderboard rows from raw time totals.
//!
//! # Invariants
//! - Hour values in shaped rows are rounded to two decimals.
//! - Bar widths are whole percentages of the largest total in the input.

use crate::model::leaderboard::{EffortColor, LeaderboardEntry, LeaderboardRow};

/// Divisor substituted when every total in the input is zero, so bar
/// widths stay defined.
const ZERO_MAX_TOTAL_DIVISOR: f64 = 10.0;

/// Shapes raw leaderboard entries into display rows.
///
/// Bar widths are scaled against the largest `total_hours` in `entries`;
/// an empty input produces an empty output.
pub fn shape_leaderboard(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRow> {
    if entries.is_empty() {
        return Vec::new();
    }

    let max_total = entries
        .iter()
        .map(|entry| entry.total_hours)
        .fold(0.0_f64, f64::max);
    let divisor = if max_total == 0.0 {
        ZERO_MAX_TOTAL_DIVISOR
    } else {
        max_total
    };

    entries
        .iter()
        .map(|entry| LeaderboardRow {
            name: entry.name.clone(),
            did_meet_weekly_commitment: entry.total_tangible_hours
                >= entry.weekly_committed_hours,
            weekly_committed: round2(entry.weekly_committed_hours),
            tangible: round2(entry.total_tangible_hours),
            intangible: round2(entry.total_intangible_hours),
            total: round2(entry.total_hours),
            tangible_bar_width: percent_width(entry.total_tangible_hours, divisor),
            intangible_bar_width: percent_width(entry.total_intangible_hours, divisor),
            tangible_bar_color: EffortColor::for_hours(entry.total_tangible_hours),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent_width(hours: f64, divisor: f64) -> u32 {
    (hours * 100.0 / divisor).round() as u32
}
