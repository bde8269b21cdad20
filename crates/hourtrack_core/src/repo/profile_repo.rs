//! Profile repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable read/write APIs over `users` and `commitment_changes`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call model `validate()` before SQL mutations.
//! - Commitment history is append-only: no update or delete of change rows.
//! - History reads preserve the absent/empty distinction via
//!   `Option<Vec<_>>`.

use crate::db::DbError;
use crate::model::commitment::{CommitmentChange, CommitmentValidationError};
use crate::model::profile::{ProfileValidationError, Role, UserId, UserProfile};
use chrono::{TimeZone, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PROFILE_SELECT_SQL: &str = "SELECT
    uuid,
    first_name,
    last_name,
    role,
    history_tracked
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for profile persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Profile(ProfileValidationError),
    Commitment(CommitmentValidationError),
    Db(DbError),
    NotFound(UserId),
    /// Commitment writes are rejected for accounts that predate history
    /// tracking; their history must stay absent.
    HistoryNotTracked(UserId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(err) => write!(f, "{err}"),
            Self::Commitment(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::HistoryNotTracked(id) => {
                write!(f, "commitment history is not tracked for user {id}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted profile data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Profile(err) => Some(err),
            Self::Commitment(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::HistoryNotTracked(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ProfileValidationError> for RepoError {
    fn from(value: ProfileValidationError) -> Self {
        Self::Profile(value)
    }
}

impl From<CommitmentValidationError> for RepoError {
    fn from(value: CommitmentValidationError) -> Self {
        Self::Commitment(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for profiles and their commitment histories.
pub trait ProfileRepository {
    fn create_profile(&self, profile: &UserProfile) -> RepoResult<UserId>;
    fn get_profile(&self, id: UserId) -> RepoResult<Option<UserProfile>>;
    fn list_profiles(&self) -> RepoResult<Vec<UserProfile>>;
    fn append_commitment_change(&self, id: UserId, change: &CommitmentChange) -> RepoResult<()>;
    /// Returns `None` for untracked accounts, otherwise every recorded
    /// change in append order.
    fn commitment_history(&self, id: UserId) -> RepoResult<Option<Vec<CommitmentChange>>>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn history_tracked(&self, id: UserId) -> RepoResult<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT history_tracked FROM users WHERE uuid = ?1;")?;
        let mut rows = stmt.query([id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Err(RepoError::NotFound(id));
        };
        parse_tracked_flag(row.get::<_, i64>(0)?)
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn create_profile(&self, profile: &UserProfile) -> RepoResult<UserId> {
        profile.validate()?;

        self.conn.execute(
            "INSERT INTO users (uuid, first_name, last_name, role, history_tracked)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                profile.uuid.to_string(),
                profile.first_name.as_str(),
                profile.last_name.as_str(),
                role_to_db(profile.role),
                i64::from(profile.history_tracked),
            ],
        )?;

        Ok(profile.uuid)
    }

    fn get_profile(&self, id: UserId) -> RepoResult<Option<UserProfile>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFILE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_profile_row(row)?));
        }

        Ok(None)
    }

    fn list_profiles(&self) -> RepoResult<Vec<UserProfile>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFILE_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut profiles = Vec::new();
        while let Some(row) = rows.next()? {
            profiles.push(parse_profile_row(row)?);
        }

        Ok(profiles)
    }

    fn append_commitment_change(&self, id: UserId, change: &CommitmentChange) -> RepoResult<()> {
        change.validate()?;

        if !self.history_tracked(id)? {
            return Err(RepoError::HistoryNotTracked(id));
        }

        self.conn.execute(
            "INSERT INTO commitment_changes (user_uuid, date_changed, hours)
             VALUES (?1, ?2, ?3);",
            params![
                id.to_string(),
                change.date_changed.timestamp_millis(),
                change.hours,
            ],
        )?;

        Ok(())
    }

    fn commitment_history(&self, id: UserId) -> RepoResult<Option<Vec<CommitmentChange>>> {
        if !self.history_tracked(id)? {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT date_changed, hours
             FROM commitment_changes
             WHERE user_uuid = ?1
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        let mut history = Vec::new();
        while let Some(row) = rows.next()? {
            history.push(parse_change_row(row)?);
        }

        Ok(Some(history))
    }
}

fn parse_profile_row(row: &Row<'_>) -> RepoResult<UserProfile> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in users.uuid"))
    })?;

    let role_text: String = row.get("role")?;
    let role = parse_role(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in users.role"))
    })?;

    let history_tracked = parse_tracked_flag(row.get::<_, i64>("history_tracked")?)?;

    let profile = UserProfile {
        uuid,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        role,
        history_tracked,
    };
    profile.validate()?;
    Ok(profile)
}

fn parse_change_row(row: &Row<'_>) -> RepoResult<CommitmentChange> {
    let millis: i64 = row.get("date_changed")?;
    let date_changed = Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid timestamp `{millis}` in commitment_changes.date_changed"
        ))
    })?;

    let change = CommitmentChange::new(date_changed, row.get("hours")?);
    change.validate()?;
    Ok(change)
}

fn parse_tracked_flag(value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid history_tracked value `{other}` in users.history_tracked"
        ))),
    }
}

fn role_to_db(role: Role) -> &'static str {
    role.display_name()
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "Owner" => Some(Role::Owner),
        "Administrator" => Some(Role::Administrator),
        "Manager" => Some(Role::Manager),
        "Mentor" => Some(Role::Mentor),
        "Core Team" => Some(Role::CoreTeam),
        "Volunteer" => Some(Role::Volunteer),
        _ => None,
    }
}
