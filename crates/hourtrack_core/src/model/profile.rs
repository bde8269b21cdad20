//! User profile domain model.
//!
//! # Responsibility
//! - Define the user record the reporting surfaces are keyed on.
//! - Track whether commitment history exists for the user at all.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another user.
//! - `history_tracked == false` marks accounts that predate commitment
//!   history; their history reads as absent, not empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a user profile.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Organizational role attached to a profile.
///
/// Role names follow the backend's document spelling, including the space
/// in `Core Team`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Administrator,
    Manager,
    Mentor,
    #[serde(rename = "Core Team")]
    CoreTeam,
    Volunteer,
}

impl Role {
    /// Owners and administrators get elevated read access to role infos.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Owner | Self::Administrator)
    }

    /// Role name as rendered in reports, e.g. `Core Team`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Administrator => "Administrator",
            Self::Manager => "Manager",
            Self::Mentor => "Mentor",
            Self::CoreTeam => "Core Team",
            Self::Volunteer => "Volunteer",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Canonical user record for report and leaderboard assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable global ID used for history lookups and auditing.
    pub uuid: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Whether commitment history is recorded for this account. Accounts
    /// created before history tracking existed carry `false` forever.
    pub history_tracked: bool,
}

/// Validation failure for a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileValidationError {
    BlankFirstName,
    BlankLastName,
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFirstName => write!(f, "first name cannot be blank"),
            Self::BlankLastName => write!(f, "last name cannot be blank"),
        }
    }
}

impl Error for ProfileValidationError {}

impl UserProfile {
    /// Creates a profile with a generated stable ID and history tracking on.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, role: Role) -> Self {
        Self::with_id(Uuid::new_v4(), first_name, last_name, role)
    }

    /// Creates a profile with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            uuid,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            history_tracked: true,
        }
    }

    /// Checks the name invariants.
    ///
    /// Write paths must call this before persisting the record.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ProfileValidationError::BlankFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ProfileValidationError::BlankLastName);
        }
        Ok(())
    }

    /// `"First Last"`, the form reports sort and render by.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
