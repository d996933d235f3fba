//! Contribution repository

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

use super::{format_timestamp, read_timestamp};
use crate::error::StokvelError;
use crate::models::{Amount, Contribution, ContributionId, GroupId, MemberId};

/// Repository for the `contributions` table
pub struct ContributionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ContributionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Contribution> {
        Ok(Contribution {
            id: row.get(0)?,
            member_id: row.get(1)?,
            amount: row.get(2)?,
            date: read_timestamp(row, 3)?,
        })
    }

    /// Insert a contribution for a member
    pub fn insert(
        &self,
        member_id: MemberId,
        amount: Amount,
        date: NaiveDateTime,
    ) -> Result<Contribution, StokvelError> {
        self.conn.execute(
            "INSERT INTO contributions (member_id, amount, date) VALUES (?1, ?2, ?3)",
            params![member_id, amount, format_timestamp(&date)],
        )?;

        let id = ContributionId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, %member_id, amount = amount.value(), "Inserted contribution");

        Ok(Contribution {
            id,
            member_id,
            amount,
            date,
        })
    }

    /// Contributions made by any member of a group, in insertion order
    pub fn list_by_group(&self, group_id: GroupId) -> Result<Vec<Contribution>, StokvelError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.member_id, c.amount, c.date
             FROM contributions c
             JOIN members m ON m.id = c.member_id
             WHERE m.group_id = ?1
             ORDER BY c.id",
        )?;
        let contributions = stmt
            .query_map(params![group_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contributions)
    }

    /// All contributions in insertion order
    pub fn get_all(&self) -> Result<Vec<Contribution>, StokvelError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, member_id, amount, date FROM contributions ORDER BY id")?;
        let contributions = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contributions)
    }
}
