//! User account model.
//!
//! # Responsibility
//! - Define the account record referenced by projects, tasks and feedback.
//! - Validate identity fields before accounts enter the store.
//!
//! # Invariants
//! - Users are always linked by `UserId`, never embedded by value, so a
//!   profile edit never leaves stale copies behind.
//! - `email` must have a plausible `local@domain.tld` shape.

use crate::model::ids::UserId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Membership role inside a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Project owner; defaults as reporter for new tasks.
    Leader,
    /// Regular project member.
    Member,
    /// Supervising teacher reviewing milestones.
    Teacher,
}

/// Validation failures for user records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Id is the nil UUID.
    NilId,
    /// Display name is blank after trim.
    BlankName,
    /// Email does not match the accepted shape.
    InvalidEmail(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "user id must not be nil"),
            Self::BlankName => write!(f, "user name must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid user email: `{value}`"),
        }
    }
}

impl Error for UserValidationError {}

/// Account record referenced across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account id.
    pub id: UserId,
    /// Display name shown on cards and avatars.
    pub name: String,
    /// Contact email; validated shape only, never verified here.
    pub email: String,
    /// Project role.
    pub role: UserRole,
    /// Avatar/display color as a `#rrggbb` hex string.
    pub color: String,
}

impl User {
    /// Creates a user with a generated stable id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        color: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, role, color)
    }

    /// Creates a user with a caller-provided id.
    ///
    /// Used where identity already exists externally (account service DTOs).
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            color: color.into(),
        }
    }

    /// Checks record invariants before the store accepts it.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.id.is_nil() {
            return Err(UserValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(UserValidationError::BlankName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}
