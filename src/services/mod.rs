//! Service layer for the stokvel ledger
//!
//! The service layer provides the record operations on top of the storage
//! layer: resolving parents by name, rejecting duplicates, and writing the
//! audit trail. Failures are returned as errors and leave the store untouched.

pub mod contribution;
pub mod goal;
pub mod group;
pub mod member;
pub mod payout;

pub use contribution::ContributionService;
pub use goal::GoalService;
pub use group::GroupService;
pub use member::MemberService;
pub use payout::PayoutService;
