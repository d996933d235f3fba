//! Stokvel Manager - terminal ledger for community savings groups
//!
//! A stokvel is a rotating savings club: members pay into a shared pot and
//! the group pays out of it. This crate keeps that ledger in SQLite and
//! drives it from a numbered menu.
//!
//! # Architecture
//!
//! - `config`: data directory, settings and SMS credentials
//! - `error`: the crate error type
//! - `models`: groups, members, contributions, payouts and goals
//! - `storage`: SQLite schema and repositories
//! - `services`: name-keyed business operations
//! - `reports`: group summary and member list
//! - `export`: CSV dump of every table
//! - `notify`: SMS delivery
//! - `audit`: append-only record of every create
//! - `shell`: the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use stokvel::config::{Settings, StokvelPaths};
//! use stokvel::storage::Storage;
//!
//! let paths = StokvelPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{StokvelError, StokvelResult};
