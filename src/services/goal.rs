//! Savings goal service

use crate::audit::EntityType;
use crate::error::StokvelResult;
use crate::models::{Amount, Goal, Group};
use crate::services::GroupService;
use crate::storage::Storage;

/// Service for group savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set a savings goal for a group
    ///
    /// The deadline is stored as typed and never parsed.
    pub fn set(&self, group_name: &str, amount: Amount, deadline: &str) -> StokvelResult<Goal> {
        let group = GroupService::new(self.storage).require(group_name)?;
        let goal = self.storage.goals().insert(group.id, amount, deadline.trim())?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(group.name.clone()),
            &goal,
        );
        tracing::info!(id = %goal.id, group = %group.name, amount = amount.value(), "Set goal");

        Ok(goal)
    }

    /// Goals for an already-resolved group
    pub fn list_for(&self, group: &Group) -> StokvelResult<Vec<Goal>> {
        self.storage.goals().list_by_group(group.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_goal() {
        let storage = Storage::in_memory().unwrap();
        let group = GroupService::new(&storage).create("Savers").unwrap();
        let service = GoalService::new(&storage);

        let goal = service.set("Savers", Amount::new(5000.0), "2025-12-31").unwrap();
        assert_eq!(goal.deadline, "2025-12-31");
        assert_eq!(service.list_for(&group).unwrap(), vec![goal]);
    }

    #[test]
    fn test_unparseable_deadline_accepted() {
        let storage = Storage::in_memory().unwrap();
        GroupService::new(&storage).create("Savers").unwrap();

        let goal = GoalService::new(&storage)
            .set("Savers", Amount::new(100.0), "someday")
            .unwrap();
        assert_eq!(goal.deadline, "someday");
    }

    #[test]
    fn test_missing_group() {
        let storage = Storage::in_memory().unwrap();
        let err = GoalService::new(&storage)
            .set("Savers", Amount::new(100.0), "2025-12-31")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
