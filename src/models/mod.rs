//! Core data models for the stokvel ledger
//!
//! This module contains the data structures that represent the savings-group
//! domain: groups, members, contributions, payouts, and goals.

pub mod amount;
pub mod contribution;
pub mod goal;
pub mod group;
pub mod ids;
pub mod member;
pub mod payout;

pub use amount::{Amount, AmountParseError};
pub use contribution::Contribution;
pub use goal::Goal;
pub use group::{Group, GroupValidationError};
pub use ids::{ContributionId, GoalId, GroupId, MemberId, PayoutId};
pub use member::{Member, MemberValidationError};
pub use payout::Payout;
