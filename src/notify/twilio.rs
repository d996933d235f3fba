//! Twilio REST delivery
//!
//! Messages are created with a form-encoded POST to
//! `/2010-04-01/Accounts/{sid}/Messages.json`, authenticated with the account
//! SID and auth token.

use std::time::Duration;

use serde::Deserialize;

use super::SmsSender;
use crate::config::SmsConfig;
use crate::error::{StokvelError, StokvelResult};

/// Production API host
pub const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error payload returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

/// Sends SMS messages through Twilio
pub struct TwilioSender {
    client: reqwest::blocking::Client,
    config: SmsConfig,
    base_url: String,
}

impl TwilioSender {
    /// Create a sender with a pre-configured HTTP client
    pub fn new(config: SmsConfig) -> StokvelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StokvelError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            base_url: TWILIO_API_BASE.to_string(),
        })
    }

    /// Point the sender at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.config.account_sid
        )
    }
}

impl SmsSender for TwilioSender {
    fn send(&self, to: &str, body: &str) -> StokvelResult<()> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .map_err(|e| {
                tracing::warn!(error = %e, "SMS request failed");
                StokvelError::Notification(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(to, status = status.as_u16(), "SMS sent");
            return Ok(());
        }

        let detail = match response.json::<ApiError>() {
            Ok(ApiError {
                code: Some(code),
                message,
            }) => format!("{} (code {})", message, code),
            Ok(ApiError { message, .. }) => message,
            Err(_) => status.to_string(),
        };
        tracing::warn!(to, status = status.as_u16(), %detail, "SMS rejected by provider");

        Err(StokvelError::Notification(format!(
            "HTTP {}: {}",
            status.as_u16(),
            detail
        )))
    }
}
