//! Role-info blurbs and their visibility policy.
//!
//! # Responsibility
//! - Model the per-role informational entries shown next to report rows.
//! - Decide who may read an entry from its visibility tier.
//!
//! # Invariants
//! - Visibility tiers are closed: every entry is exactly one of the three.

use crate::model::profile::Role;
use serde::{Deserialize, Serialize};

/// Read-access tier for a role info entry.
///
/// The backend stores these as the string codes `"0"`, `"1"` and `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoVisibility {
    /// Readable by every role.
    #[serde(rename = "0")]
    Everyone,
    /// Readable by owners and administrators only.
    #[serde(rename = "1")]
    AdminsOnly,
    /// Readable by every role except volunteers.
    #[serde(rename = "2")]
    NonVolunteers,
}

impl InfoVisibility {
    /// Whether a viewer holding `role` may read entries at this tier.
    pub fn can_read(&self, role: Role) -> bool {
        match self {
            Self::Everyone => true,
            Self::AdminsOnly => role.is_admin(),
            Self::NonVolunteers => role != Role::Volunteer,
        }
    }
}

/// One informational entry keyed by a `"{Role}Info"` name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    /// Lookup key, e.g. `VolunteerInfo`.
    pub info_name: String,
    /// Rendered blurb content.
    pub info_content: String,
    pub visibility: InfoVisibility,
}

/// Role info paired with the viewer's resolved read permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRoleInfo {
    pub info: RoleInfo,
    pub can_read: bool,
}

/// Builds the `"{Role}Info"` lookup name for a role.
pub fn role_info_name(role: Role) -> String {
    // The backend key omits the space in multi-word role names.
    format!("{}Info", role.display_name().replace(' ', ""))
}
