//! Payout service

use chrono::Local;

use crate::audit::EntityType;
use crate::error::StokvelResult;
use crate::models::{Amount, Payout};
use crate::services::GroupService;
use crate::storage::Storage;

/// Service for recording group payouts
pub struct PayoutService<'a> {
    storage: &'a Storage,
}

impl<'a> PayoutService<'a> {
    /// Create a new payout service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a payout from a group
    ///
    /// The recipient is free text; it is not checked against the member list.
    pub fn record(
        &self,
        group_name: &str,
        recipient: &str,
        amount: Amount,
        reason: &str,
    ) -> StokvelResult<Payout> {
        let group = GroupService::new(self.storage).require(group_name)?;

        let payout = self.storage.payouts().insert(
            group.id,
            recipient.trim(),
            amount,
            reason.trim(),
            Local::now().naive_local(),
        )?;

        self.storage.log_create(
            EntityType::Payout,
            payout.id.to_string(),
            Some(payout.recipient.clone()),
            &payout,
        );
        tracing::info!(
            id = %payout.id,
            group = %group.name,
            recipient = %payout.recipient,
            amount = amount.value(),
            "Recorded payout"
        );

        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_payout_to_non_member() {
        let storage = Storage::in_memory().unwrap();
        GroupService::new(&storage).create("Savers").unwrap();

        let payout = PayoutService::new(&storage)
            .record("Savers", "Thabo", Amount::new(40.0), "emergency")
            .unwrap();

        assert_eq!(payout.recipient, "Thabo");
        assert_eq!(payout.reason, "emergency");
        assert_eq!(storage.row_count("payouts").unwrap(), 1);
    }

    #[test]
    fn test_missing_group() {
        let storage = Storage::in_memory().unwrap();
        let err = PayoutService::new(&storage)
            .record("Savers", "Thabo", Amount::new(40.0), "emergency")
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(storage.row_count("payouts").unwrap(), 0);
    }
}
