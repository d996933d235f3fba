//! Group repository

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StokvelError;
use crate::models::{Group, GroupId};

/// Repository for the `groups` table
pub struct GroupRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Group> {
        Ok(Group {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    /// Insert a group and return it with its new id
    pub fn insert(&self, name: &str) -> Result<Group, StokvelError> {
        self.conn
            .execute("INSERT INTO groups (name) VALUES (?1)", params![name])?;

        let id = GroupId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, name, "Inserted group");

        Ok(Group {
            id,
            name: name.to_string(),
        })
    }

    /// Get a group by id
    pub fn get(&self, id: GroupId) -> Result<Option<Group>, StokvelError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name FROM groups WHERE id = ?1",
                params![id],
                Self::from_row,
            )
            .optional()?)
    }

    /// Get a group by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Group>, StokvelError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name FROM groups WHERE name = ?1",
                params![name],
                Self::from_row,
            )
            .optional()?)
    }

    /// Get all groups in insertion order
    pub fn get_all(&self) -> Result<Vec<Group>, StokvelError> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM groups ORDER BY id")?;
        let groups = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }
}
