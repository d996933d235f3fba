//! Configuration module for the stokvel ledger
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - User settings persistence
//! - SMS provider credentials from the environment

pub mod paths;
pub mod settings;
pub mod sms;

pub use paths::StokvelPaths;
pub use settings::Settings;
pub use sms::SmsConfig;
