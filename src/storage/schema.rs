//! Ledger schema
//!
//! Table and column order here is the column order used by CSV export.

use rusqlite::Connection;

use crate::error::StokvelError;

/// Ledger tables, parents before children
pub const TABLES: [&str; 5] = ["groups", "members", "contributions", "payouts", "goals"];

const CREATE_GROUPS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS groups (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL UNIQUE
)";

const CREATE_MEMBERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS members (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL,
    role VARCHAR NOT NULL DEFAULT '',
    group_id INTEGER NOT NULL REFERENCES groups (id)
)";

const CREATE_MEMBERS_INDEX: &str = "
CREATE UNIQUE INDEX IF NOT EXISTS ix_members_group_name ON members (group_id, name)";

const CREATE_CONTRIBUTIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS contributions (
    id INTEGER PRIMARY KEY,
    member_id INTEGER NOT NULL REFERENCES members (id),
    amount FLOAT NOT NULL,
    date DATETIME NOT NULL
)";

const CREATE_PAYOUTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS payouts (
    id INTEGER PRIMARY KEY,
    group_id INTEGER NOT NULL REFERENCES groups (id),
    recipient VARCHAR NOT NULL,
    amount FLOAT NOT NULL,
    reason VARCHAR NOT NULL DEFAULT '',
    date DATETIME NOT NULL
)";

const CREATE_GOALS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS goals (
    id INTEGER PRIMARY KEY,
    group_id INTEGER NOT NULL REFERENCES groups (id),
    amount FLOAT NOT NULL,
    deadline VARCHAR NOT NULL
)";

/// Create every ledger table that does not exist yet
pub fn create_tables(conn: &Connection) -> Result<(), StokvelError> {
    for ddl in [
        CREATE_GROUPS_TABLE,
        CREATE_MEMBERS_TABLE,
        CREATE_MEMBERS_INDEX,
        CREATE_CONTRIBUTIONS_TABLE,
        CREATE_PAYOUTS_TABLE,
        CREATE_GOALS_TABLE,
    ] {
        conn.execute(ddl, ())?;
    }

    tracing::debug!("Ledger schema ready");
    Ok(())
}
