//! Contribution model
//!
//! A deposit attributed to a member. Dated at creation time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::{ContributionId, MemberId};

/// A monetary deposit made by a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: ContributionId,
    pub member_id: MemberId,
    pub amount: Amount,
    /// Local time the contribution was recorded
    pub date: NaiveDateTime,
}
