//! Payout model
//!
//! A disbursement from a group. The recipient is free text and does not have
//! to be a member of the group.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::{GroupId, PayoutId};

/// A monetary disbursement from a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: PayoutId,
    pub group_id: GroupId,
    pub recipient: String,
    pub amount: Amount,
    pub reason: String,
    /// Local time the payout was recorded
    pub date: NaiveDateTime,
}
