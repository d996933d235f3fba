//! Contribution service

use chrono::Local;

use crate::audit::EntityType;
use crate::error::StokvelResult;
use crate::models::{Amount, Contribution};
use crate::services::{GroupService, MemberService};
use crate::storage::Storage;

/// Service for recording member contributions
pub struct ContributionService<'a> {
    storage: &'a Storage,
}

impl<'a> ContributionService<'a> {
    /// Create a new contribution service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a contribution by a member of a group
    ///
    /// The amount is stored as given, including zero or negative values.
    pub fn record(
        &self,
        group_name: &str,
        member_name: &str,
        amount: Amount,
    ) -> StokvelResult<Contribution> {
        let group = GroupService::new(self.storage).require(group_name)?;
        let member = MemberService::new(self.storage).require(&group, member_name)?;

        let contribution = self.storage.contributions().insert(
            member.id,
            amount,
            Local::now().naive_local(),
        )?;

        self.storage.log_create(
            EntityType::Contribution,
            contribution.id.to_string(),
            Some(member.name.clone()),
            &contribution,
        );
        tracing::info!(
            id = %contribution.id,
            group = %group.name,
            member = %member.name,
            amount = amount.value(),
            "Recorded contribution"
        );

        Ok(contribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Storage {
        let storage = Storage::in_memory().unwrap();
        GroupService::new(&storage).create("Savers").unwrap();
        MemberService::new(&storage)
            .add("Savers", "Thabo", "Chairperson")
            .unwrap();
        storage
    }

    #[test]
    fn test_record_contribution() {
        let storage = setup();
        let contribution = ContributionService::new(&storage)
            .record("Savers", "Thabo", Amount::new(100.0))
            .unwrap();

        assert_eq!(contribution.amount.value(), 100.0);
        assert_eq!(storage.contributions().get_all().unwrap(), vec![contribution]);
    }

    #[test]
    fn test_negative_amount_accepted_as_given() {
        let storage = setup();
        let contribution = ContributionService::new(&storage)
            .record("Savers", "Thabo", Amount::new(-25.125))
            .unwrap();
        assert_eq!(contribution.amount.value(), -25.125);
    }

    #[test]
    fn test_unknown_member_or_group() {
        let storage = setup();
        let service = ContributionService::new(&storage);

        let err = service.record("Savers", "Naledi", Amount::new(10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Member 'Naledi' not found in group 'Savers'.");

        let err = service.record("Spenders", "Thabo", Amount::new(10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Group 'Spenders' not found.");

        assert_eq!(storage.row_count("contributions").unwrap(), 0);
    }
}
