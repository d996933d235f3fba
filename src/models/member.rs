//! Member model
//!
//! A participant belonging to exactly one group.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GroupId, MemberId};

/// A member of a savings group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Row id
    pub id: MemberId,

    /// Member name, unique within the group
    pub name: String,

    /// Free-text role (Chairperson, Treasurer, member, ...)
    pub role: String,

    /// Owning group
    pub group_id: GroupId,
}

impl Member {
    /// Validate a member name before it is stored
    pub fn validate_name(name: &str) -> Result<(), MemberValidationError> {
        if name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
        }
    }
}

impl std::error::Error for MemberValidationError {}
