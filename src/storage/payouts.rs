//! Payout repository

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

use super::{format_timestamp, read_timestamp};
use crate::error::StokvelError;
use crate::models::{Amount, GroupId, Payout, PayoutId};

const PAYOUT_COLUMNS: &str = "id, group_id, recipient, amount, reason, date";

/// Repository for the `payouts` table
pub struct PayoutRepository<'a> {
    conn: &'a Connection,
}

impl<'a> PayoutRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Payout> {
        Ok(Payout {
            id: row.get(0)?,
            group_id: row.get(1)?,
            recipient: row.get(2)?,
            amount: row.get(3)?,
            reason: row.get(4)?,
            date: read_timestamp(row, 5)?,
        })
    }

    /// Insert a payout from a group
    pub fn insert(
        &self,
        group_id: GroupId,
        recipient: &str,
        amount: Amount,
        reason: &str,
        date: NaiveDateTime,
    ) -> Result<Payout, StokvelError> {
        self.conn.execute(
            "INSERT INTO payouts (group_id, recipient, amount, reason, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![group_id, recipient, amount, reason, format_timestamp(&date)],
        )?;

        let id = PayoutId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, %group_id, recipient, amount = amount.value(), "Inserted payout");

        Ok(Payout {
            id,
            group_id,
            recipient: recipient.to_string(),
            amount,
            reason: reason.to_string(),
            date,
        })
    }

    /// Payouts made by a group, in insertion order
    pub fn list_by_group(&self, group_id: GroupId) -> Result<Vec<Payout>, StokvelError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM payouts WHERE group_id = ?1 ORDER BY id",
            PAYOUT_COLUMNS
        ))?;
        let payouts = stmt
            .query_map(params![group_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(payouts)
    }

    /// All payouts in insertion order
    pub fn get_all(&self) -> Result<Vec<Payout>, StokvelError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM payouts ORDER BY id", PAYOUT_COLUMNS))?;
        let payouts = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(payouts)
    }
}
