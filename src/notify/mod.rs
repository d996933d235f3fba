//! SMS notification side-channel
//!
//! Summaries and member lists can be forwarded as plain-text SMS messages.
//! Delivery goes through the [`SmsSender`] trait so the shell does not depend
//! on a particular provider; [`TwilioSender`] is the production
//! implementation. A failed send is reported to the caller and never undoes
//! ledger writes that already happened.

mod twilio;

pub use twilio::TwilioSender;

use crate::error::{StokvelError, StokvelResult};

/// Something that can deliver a text message to a phone number
pub trait SmsSender {
    /// Send `body` to the phone number `to`
    fn send(&self, to: &str, body: &str) -> StokvelResult<()>;
}

/// Send through an optional sender
///
/// Fails with a notification error when no sender is configured or the
/// recipient number is blank.
pub fn send_sms(sender: Option<&dyn SmsSender>, to: &str, body: &str) -> StokvelResult<()> {
    let sender = sender.ok_or_else(|| {
        StokvelError::Notification(
            "SMS is not configured (set TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER)"
                .into(),
        )
    })?;

    let to = to.trim();
    if to.is_empty() {
        return Err(StokvelError::Notification(
            "recipient phone number is empty".into(),
        ));
    }

    sender.send(to, body)
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSender;
    use super::*;

    #[test]
    fn test_send_without_sender() {
        let err = send_sms(None, "+27830000000", "hello").unwrap_err();
        assert!(matches!(err, StokvelError::Notification(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_send_trims_number() {
        let sender = RecordingSender::default();
        send_sms(Some(&sender), "  +27830000000 ", "hello").unwrap();

        assert_eq!(
            *sender.sent.borrow(),
            vec![("+27830000000".to_string(), "hello".to_string())]
        );
    }

    #[test]
    fn test_blank_number_rejected() {
        let sender = RecordingSender::default();
        assert!(send_sms(Some(&sender), "   ", "hello").is_err());
        assert!(sender.sent.borrow().is_empty());
    }
}
