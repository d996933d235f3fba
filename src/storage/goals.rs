//! Goal repository

use rusqlite::{params, Connection, Row};

use crate::error::StokvelError;
use crate::models::{Amount, Goal, GoalId, GroupId};

/// Repository for the `goals` table
pub struct GoalRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GoalRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Goal> {
        Ok(Goal {
            id: row.get(0)?,
            group_id: row.get(1)?,
            amount: row.get(2)?,
            deadline: row.get(3)?,
        })
    }

    /// Insert a savings goal for a group
    pub fn insert(&self, group_id: GroupId, amount: Amount, deadline: &str) -> Result<Goal, StokvelError> {
        self.conn.execute(
            "INSERT INTO goals (group_id, amount, deadline) VALUES (?1, ?2, ?3)",
            params![group_id, amount, deadline],
        )?;

        let id = GoalId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, %group_id, amount = amount.value(), deadline, "Inserted goal");

        Ok(Goal {
            id,
            group_id,
            amount,
            deadline: deadline.to_string(),
        })
    }

    /// Goals of a group, in insertion order
    pub fn list_by_group(&self, group_id: GroupId) -> Result<Vec<Goal>, StokvelError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, group_id, amount, deadline FROM goals WHERE group_id = ?1 ORDER BY id",
        )?;
        let goals = stmt
            .query_map(params![group_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }

    /// All goals in insertion order
    pub fn get_all(&self) -> Result<Vec<Goal>, StokvelError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, group_id, amount, deadline FROM goals ORDER BY id")?;
        let goals = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn test_deadline_stored_verbatim() {
        let storage = Storage::in_memory().unwrap();
        let group = storage.groups().insert("Savers").unwrap();

        storage
            .goals()
            .insert(group.id, Amount::new(5000.0), "end of December")
            .unwrap();

        let goals = storage.goals().list_by_group(group.id).unwrap();
        assert_eq!(goals[0].deadline, "end of December");
        assert_eq!(storage.goals().get_all().unwrap().len(), 1);
    }
}
