//! Commitment-change domain model.
//!
//! # Responsibility
//! - Define the append-only record of changes to a user's weekly pledge.
//! - Validate hour values before they reach persistence.
//!
//! # Invariants
//! - `hours` is finite and non-negative once validated.
//! - Records are immutable after append; corrections are new appends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One point-in-time change to a user's weekly committed-hours target.
///
/// Serialized with the backend's camelCase field naming, since histories are
/// exchanged as-is with profile documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentChange {
    /// Instant the pledge changed. The change is in effect from this
    /// instant onward.
    pub date_changed: DateTime<Utc>,
    /// New weekly pledge in hours. Must be finite and non-negative.
    pub hours: f64,
}

/// Validation failure for a commitment-change record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitmentValidationError {
    /// `hours` is NaN or infinite.
    NonFiniteHours,
    /// `hours` is below zero.
    NegativeHours { hours: f64 },
}

impl Display for CommitmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteHours => write!(f, "committed hours must be a finite number"),
            Self::NegativeHours { hours } => {
                write!(f, "committed hours must be >= 0, got {hours}")
            }
        }
    }
}

impl Error for CommitmentValidationError {}

impl CommitmentChange {
    /// Creates a change record taking effect at `date_changed`.
    pub fn new(date_changed: DateTime<Utc>, hours: f64) -> Self {
        Self {
            date_changed,
            hours,
        }
    }

    /// Checks the hour-value invariants.
    ///
    /// Write paths must call this before persisting the record.
    pub fn validate(&self) -> Result<(), CommitmentValidationError> {
        if !self.hours.is_finite() {
            return Err(CommitmentValidationError::NonFiniteHours);
        }
        if self.hours < 0.0 {
            return Err(CommitmentValidationError::NegativeHours { hours: self.hours });
        }
        Ok(())
    }
}
