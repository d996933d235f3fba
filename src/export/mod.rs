//! Export module for the stokvel ledger
//!
//! Dumps every ledger table to its own CSV file (`groups.csv`,
//! `members.csv`, ...). Tables without rows produce no file.

pub mod csv;

pub use self::csv::{export_all_csv, export_table_csv, ExportedTable};
