//! Member service
//!
//! Adds members to existing groups and lists them.

use crate::audit::EntityType;
use crate::error::{StokvelError, StokvelResult};
use crate::models::{Group, Member};
use crate::services::GroupService;
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a member to a group
    pub fn add(&self, group_name: &str, name: &str, role: &str) -> StokvelResult<Member> {
        let group = GroupService::new(self.storage).require(group_name)?;

        let name = name.trim();
        Member::validate_name(name).map_err(|e| StokvelError::Validation(e.to_string()))?;

        if self.storage.members().get_by_name(group.id, name)?.is_some() {
            return Err(StokvelError::duplicate_member(name, &group.name));
        }

        let member = self.storage.members().insert(group.id, name, role.trim())?;

        self.storage.log_create(
            EntityType::Member,
            member.id.to_string(),
            Some(member.name.clone()),
            &member,
        );
        tracing::info!(id = %member.id, group = %group.name, name = %member.name, "Added member");

        Ok(member)
    }

    /// Resolve a member of a group by name, failing when absent
    pub fn require(&self, group: &Group, name: &str) -> StokvelResult<Member> {
        let name = name.trim();
        self.storage
            .members()
            .get_by_name(group.id, name)?
            .ok_or_else(|| StokvelError::member_not_found(name, &group.name))
    }

    /// List the members of a group
    pub fn list_for_group(&self, group_name: &str) -> StokvelResult<(Group, Vec<Member>)> {
        let group = GroupService::new(self.storage).require(group_name)?;
        let members = self.storage.members().list_by_group(group.id)?;
        Ok((group, members))
    }
}
