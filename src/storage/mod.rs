//! Storage layer for the stokvel ledger
//!
//! Provides a SQLite-backed store with one repository per table. The schema
//! is created on open if it does not exist yet. Every insert runs in
//! autocommit mode, so each write is durable as soon as it returns.

pub mod contributions;
pub mod goals;
pub mod groups;
pub mod members;
pub mod payouts;
pub mod schema;

pub use contributions::ContributionRepository;
pub use goals::GoalRepository;
pub use groups::GroupRepository;
pub use members::MemberRepository;
pub use payouts::PayoutRepository;
pub use schema::{create_tables, TABLES};

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::StokvelPaths;
use crate::error::StokvelError;

/// Format used for timestamps stored in text columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Accepts stored timestamps with or without fractional seconds
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: Connection,
    paths: Option<StokvelPaths>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open (or create) the database in the given data directory
    pub fn open(paths: StokvelPaths) -> Result<Self, StokvelError> {
        paths.ensure_directories()?;

        let db_path = paths.database_file();
        let conn = Connection::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Opened ledger database");

        // The ledger stays usable without its audit trail
        let audit = match AuditLogger::open(paths.audit_log()) {
            Ok(logger) => Some(logger),
            Err(e) => {
                tracing::warn!(error = %e, "Audit log disabled");
                None
            }
        };

        let storage = Self {
            conn,
            audit,
            paths: Some(paths),
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Open an in-memory database without an audit log
    pub fn in_memory() -> Result<Self, StokvelError> {
        let storage = Self {
            conn: Connection::open_in_memory()?,
            paths: None,
            audit: None,
        };
        storage.initialize()?;
        Ok(storage)
    }

    fn initialize(&self) -> Result<(), StokvelError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_tables(&self.conn)
    }

    /// Get the paths configuration (None for in-memory stores)
    pub fn paths(&self) -> Option<&StokvelPaths> {
        self.paths.as_ref()
    }

    /// Raw connection for whole-table reads
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn groups(&self) -> GroupRepository<'_> {
        GroupRepository::new(&self.conn)
    }

    pub fn members(&self) -> MemberRepository<'_> {
        MemberRepository::new(&self.conn)
    }

    pub fn contributions(&self) -> ContributionRepository<'_> {
        ContributionRepository::new(&self.conn)
    }

    pub fn payouts(&self) -> PayoutRepository<'_> {
        PayoutRepository::new(&self.conn)
    }

    pub fn goals(&self) -> GoalRepository<'_> {
        GoalRepository::new(&self.conn)
    }

    /// Number of rows in a ledger table
    pub fn row_count(&self, table: &str) -> Result<usize, StokvelError> {
        if !TABLES.contains(&table) {
            return Err(StokvelError::Storage(format!("Unknown table: {}", table)));
        }

        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }

    /// Record a newly created row in the audit log
    ///
    /// The row is already committed, so a failed append is only logged.
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        let Some(logger) = &self.audit else {
            return;
        };

        let entry = AuditEntry::created(entity_type, entity_id, entity_name, entity);
        if let Err(e) = logger.record(&entry) {
            tracing::warn!(
                error = %e,
                entity = %entry.entity_type,
                id = %entry.entity_id,
                "Failed to append audit entry"
            );
        }
    }

    /// The audit logger, if this store keeps one
    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}

/// Format a timestamp for storage
pub(crate) fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Read a stored timestamp column
pub(crate) fn read_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_PARSE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
