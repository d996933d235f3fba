//! Member repository

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StokvelError;
use crate::models::{GroupId, Member, MemberId};

const MEMBER_COLUMNS: &str = "id, name, role, group_id";

/// Repository for the `members` table
pub struct MemberRepository<'a> {
    conn: &'a Connection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Member> {
        Ok(Member {
            id: row.get(0)?,
            name: row.get(1)?,
            role: row.get(2)?,
            group_id: row.get(3)?,
        })
    }

    /// Insert a member into a group
    pub fn insert(&self, group_id: GroupId, name: &str, role: &str) -> Result<Member, StokvelError> {
        self.conn.execute(
            "INSERT INTO members (name, role, group_id) VALUES (?1, ?2, ?3)",
            params![name, role, group_id],
        )?;

        let id = MemberId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, %group_id, name, "Inserted member");

        Ok(Member {
            id,
            name: name.to_string(),
            role: role.to_string(),
            group_id,
        })
    }

    /// Get a member by exact name within a group
    pub fn get_by_name(&self, group_id: GroupId, name: &str) -> Result<Option<Member>, StokvelError> {
        Ok(self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM members WHERE group_id = ?1 AND name = ?2",
                    MEMBER_COLUMNS
                ),
                params![group_id, name],
                Self::from_row,
            )
            .optional()?)
    }

    /// All members of a group in insertion order
    pub fn list_by_group(&self, group_id: GroupId) -> Result<Vec<Member>, StokvelError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM members WHERE group_id = ?1 ORDER BY id",
            MEMBER_COLUMNS
        ))?;
        let members = stmt
            .query_map(params![group_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(members)
    }

    /// All members in insertion order
    pub fn get_all(&self) -> Result<Vec<Member>, StokvelError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM members ORDER BY id", MEMBER_COLUMNS))?;
        let members = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::GroupId;
    use crate::storage::Storage;

    #[test]
    fn test_lookup_is_scoped_to_group() {
        let storage = Storage::in_memory().unwrap();
        let savers = storage.groups().insert("Savers").unwrap();
        let burial = storage.groups().insert("Burial Society").unwrap();

        let thabo = storage.members().insert(savers.id, "Thabo", "Chairperson").unwrap();

        assert_eq!(
            storage.members().get_by_name(savers.id, "Thabo").unwrap(),
            Some(thabo)
        );
        assert!(storage.members().get_by_name(burial.id, "Thabo").unwrap().is_none());
    }

    #[test]
    fn test_same_name_allowed_in_different_groups() {
        let storage = Storage::in_memory().unwrap();
        let a = storage.groups().insert("A").unwrap();
        let b = storage.groups().insert("B").unwrap();

        storage.members().insert(a.id, "Lerato", "member").unwrap();
        storage.members().insert(b.id, "Lerato", "Treasurer").unwrap();

        assert_eq!(storage.members().list_by_group(a.id).unwrap().len(), 1);
        assert_eq!(storage.members().get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_foreign_key_enforced() {
        let storage = Storage::in_memory().unwrap();
        assert!(storage
            .members()
            .insert(GroupId::new(99), "Ghost", "member")
            .is_err());
    }
}
