//! SMS provider credentials
//!
//! Twilio credentials and the sender number are read from the environment at
//! startup. A `.env` file is loaded first when present.

/// Account SID variable
pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
/// Auth token variable
pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";
/// Sender phone number variable
pub const FROM_NUMBER_ENV: &str = "TWILIO_PHONE_NUMBER";

/// Credentials for the SMS provider
#[derive(Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .finish()
    }
}

impl SmsConfig {
    /// Load `.env` (if any) and read credentials from the process environment
    pub fn from_env() -> Option<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from an arbitrary key lookup
    ///
    /// Returns `None` unless all three values are present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(Self {
            account_sid: get(ACCOUNT_SID_ENV)?,
            auth_token: get(AUTH_TOKEN_ENV)?,
            from_number: get(FROM_NUMBER_ENV)?,
        })
    }
}
