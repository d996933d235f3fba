//! CSV Export functionality
//!
//! Each table is read in full with `SELECT *`, so the header is the table's
//! column names in declaration order and each value is taken positionally.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;

use crate::error::{StokvelError, StokvelResult};
use crate::storage::{Storage, TABLES};

/// A table that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTable {
    pub table: &'static str,
    pub path: PathBuf,
    /// Data rows written, excluding the header
    pub rows: usize,
}

/// Write one table as CSV, returning the number of data rows
///
/// The header is written even when the table is empty.
pub fn export_table_csv<W: Write>(
    storage: &Storage,
    table: &str,
    writer: W,
) -> StokvelResult<usize> {
    if !TABLES.contains(&table) {
        return Err(StokvelError::Export(format!("Unknown table: {}", table)));
    }

    let mut stmt = storage
        .connection()
        .prepare(&format!("SELECT * FROM {} ORDER BY id", table))?;
    let headers: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = headers.len();

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(&headers)?;

    let mut rows = stmt.query([])?;
    let mut count = 0;
    while let Some(row) = rows.next()? {
        let mut record = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            record.push(format_value(row.get_ref(idx)?));
        }
        csv_writer.write_record(&record)?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| StokvelError::Export(e.to_string()))?;
    Ok(count)
}

/// Export every non-empty table to `<dir>/<table>.csv`
///
/// Files for empty tables are neither created nor removed.
pub fn export_all_csv(storage: &Storage, dir: &Path) -> StokvelResult<Vec<ExportedTable>> {
    std::fs::create_dir_all(dir).map_err(|e| {
        StokvelError::Export(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut exported = Vec::new();

    for table in TABLES {
        if storage.row_count(table)? == 0 {
            tracing::debug!(table, "Skipping empty table");
            continue;
        }

        let path = dir.join(format!("{}.csv", table));
        let file = File::create(&path).map_err(|e| {
            StokvelError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let rows = export_table_csv(storage, table, BufWriter::new(file))?;
        tracing::info!(table, rows, path = %path.display(), "Exported table");

        exported.push(ExportedTable { table, path, rows });
    }

    Ok(exported)
}

/// Render a column value the way it is stored
fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        // Debug keeps the fractional part on whole numbers (100.0, not 100)
        ValueRef::Real(f) => format!("{:?}", f),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}
