//! Audit logging for the stokvel ledger
//!
//! Every record inserted into the ledger is also appended to an audit log as
//! a single JSON line. Ledger rows are never updated or deleted, so the log
//! only ever holds creations.
//!
//! - `AuditEntry`: one logged creation with timestamp, entity information,
//!   and the serialized record.
//! - `AuditLogger`: appends entries to the log file (JSONL) and reads them
//!   back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType};
pub use logger::AuditLogger;
