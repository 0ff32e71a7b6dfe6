//! User records and the credential-check contract.
//!
//! Credential storage is the placeholder contract the boundary requires:
//! plaintext comparison, no hashing, no token expiry. A hardened scheme
//! is deliberately out of scope here.

use crate::{error::Result, Error, RecordId, SyncStatus, Syncable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A user account. Soft-deleted via `deleted`/`active`, never erased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: RecordId,
    /// Login name, unique
    pub username: String,
    /// Plaintext placeholder credential; always stripped from responses
    pub password: String,
    pub full_name: String,
    /// Must be unique among non-deleted users
    pub email: String,
    pub role: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub shift: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub sync_status: SyncStatus,
    #[serde(default)]
    pub deleted: bool,
}

impl User {
    /// Whether this account can be used at all.
    pub fn is_usable(&self) -> bool {
        self.active && !self.deleted
    }

    /// Plaintext comparison; placeholder contract, not a security design.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Projection with the credential field stripped.
    pub fn redacted(&self) -> UserPublic {
        UserPublic {
            id: self.id.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            active: self.active,
            shift: self.shift.clone(),
            created_at: self.created_at,
            last_access: self.last_access,
            last_modified: self.last_modified,
            sync_status: self.sync_status,
            deleted: self.deleted,
        }
    }
}

impl Syncable for User {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.last_modified)
    }

    fn mark_synced(&mut self, _now: DateTime<Utc>) {
        self.sync_status = SyncStatus::Synced;
    }
}

/// A user record as exposed to clients - no password field exists at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: RecordId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub shift: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
    pub sync_status: SyncStatus,
    pub deleted: bool,
}

/// Check email uniqueness among non-deleted users.
pub fn email_taken(users: &[User], email: &str) -> bool {
    users.iter().any(|u| u.email == email && !u.deleted)
}

/// Look up a usable account by username and verify its credential.
///
/// Unknown username, inactive or deleted account, and wrong password all
/// collapse to the same [`Error::InvalidCredentials`], so the response
/// never reveals whether the account exists.
pub fn authenticate<'a>(
    users: &'a mut [User],
    username: &str,
    password: &str,
) -> Result<&'a mut User> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let user = users
        .iter_mut()
        .find(|u| u.username == username && u.is_usable())
        .ok_or(Error::InvalidCredentials)?;

    if !user.verify_password(password) {
        return Err(Error::InvalidCredentials);
    }

    Ok(user)
}
