//! Reports module for the stokvel ledger
//!
//! Provides the group summary (contributions, payouts, balance, goals) and
//! the member listing, each renderable for the terminal or as an SMS body.

pub mod members;
pub mod summary;

pub use members::MemberListReport;
pub use summary::{ContributionLine, GroupSummary};
