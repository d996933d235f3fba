//! Group service
//!
//! Creates groups and resolves them by name for the other services.

use crate::audit::EntityType;
use crate::error::{StokvelError, StokvelResult};
use crate::models::Group;
use crate::storage::Storage;

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new group
    pub fn create(&self, name: &str) -> StokvelResult<Group> {
        let name = name.trim();
        Group::validate_name(name).map_err(|e| StokvelError::Validation(e.to_string()))?;

        if self.storage.groups().get_by_name(name)?.is_some() {
            return Err(StokvelError::duplicate_group(name));
        }

        let group = self.storage.groups().insert(name)?;

        self.storage.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        );
        tracing::info!(id = %group.id, name = %group.name, "Created group");

        Ok(group)
    }

    /// Get a group by exact name
    pub fn get_by_name(&self, name: &str) -> StokvelResult<Option<Group>> {
        self.storage.groups().get_by_name(name.trim())
    }

    /// Resolve a group by name, failing when it does not exist
    pub fn require(&self, name: &str) -> StokvelResult<Group> {
        self.get_by_name(name)?
            .ok_or_else(|| StokvelError::group_not_found(name.trim()))
    }

    /// List all groups
    pub fn list(&self) -> StokvelResult<Vec<Group>> {
        self.storage.groups().get_all()
    }
}
