//! Group model
//!
//! A named savings circle. Group names are unique across the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GroupId;

/// A stokvel savings group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Row id
    pub id: GroupId,

    /// Unique group name
    pub name: String,
}

impl Group {
    /// Maximum accepted name length
    pub const MAX_NAME_LEN: usize = 100;

    /// Validate a group name before it is stored
    pub fn validate_name(name: &str) -> Result<(), GroupValidationError> {
        if name.trim().is_empty() {
            return Err(GroupValidationError::EmptyName);
        }

        if name.len() > Self::MAX_NAME_LEN {
            return Err(GroupValidationError::NameTooLong(name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Group name too long ({} chars, max {})",
                len,
                Group::MAX_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for GroupValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(Group::validate_name("Savers").is_ok());
        assert_eq!(
            Group::validate_name("   "),
            Err(GroupValidationError::EmptyName)
        );
        assert!(matches!(
            Group::validate_name(&"x".repeat(101)),
            Err(GroupValidationError::NameTooLong(101))
        ));
    }
}
