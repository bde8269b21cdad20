//! Leaderboard domain model.
//!
//! # Responsibility
//! - Define the raw time totals a leaderboard is computed from.
//! - Define the shaped display row and the effort color scale.
//!
//! # Invariants
//! - Bar widths are percentages in `0..=100`.
//! - Color classification depends only on tangible hours.

use serde::{Deserialize, Serialize};

/// Raw per-user totals as retrieved from the time-log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    /// Current weekly pledge in hours.
    pub weekly_committed_hours: f64,
    /// Logged time that counts toward the pledge.
    pub total_tangible_hours: f64,
    /// Logged time that does not count toward the pledge.
    pub total_intangible_hours: f64,
    pub total_hours: f64,
}

/// Display-ready leaderboard row derived from a [`LeaderboardEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub name: String,
    /// Whether tangible time reached the weekly pledge.
    pub did_meet_weekly_commitment: bool,
    /// Pledge rounded to two decimals.
    pub weekly_committed: f64,
    /// Tangible time rounded to two decimals.
    pub tangible: f64,
    /// Intangible time rounded to two decimals.
    pub intangible: f64,
    /// Total time rounded to two decimals.
    pub total: f64,
    /// Tangible bar width as a whole percentage of the column maximum.
    pub tangible_bar_width: u32,
    /// Intangible bar width as a whole percentage of the column maximum.
    pub intangible_bar_width: u32,
    pub tangible_bar_color: EffortColor,
}

/// Color ladder for weekly tangible effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortColor {
    Red,
    Orange,
    Green,
    Blue,
    Indigo,
    Violet,
    Purple,
}

impl EffortColor {
    /// Classifies tangible hours onto the color ladder.
    pub fn for_hours(hours: f64) -> Self {
        if hours < 5.0 {
            Self::Red
        } else if hours < 10.0 {
            Self::Orange
        } else if hours < 20.0 {
            Self::Green
        } else if hours < 30.0 {
            Self::Blue
        } else if hours < 40.0 {
            Self::Indigo
        } else if hours < 50.0 {
            Self::Violet
        } else {
            Self::Purple
        }
    }

    /// CSS class suffix used by the rendering layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
        }
    }
}
