use std::{collections::BTreeMap, future::Future};

use studio_models::email_address::EmailAddressWithName;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Deliver `email` from the configured sender address.
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailSendError>> + Send;

    /// Check that the delivery provider is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// An email with both an HTML and a plain text representation, so the
/// receiving client can pick the best one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub html: String,
    pub text: String,
    /// A formatted mailbox such as `"Jane Doe" <jane@example.com>`.
    pub reply_to: Option<String>,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    /// The provider returned an explicit error for this email.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<(), String>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                Box::pin(std::future::ready(result.map_err(EmailSendError::Rejected)))
            });
        self
    }

    pub fn with_ping(mut self, result: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(
                result
                    .then_some(())
                    .ok_or_else(|| anyhow::anyhow!("ping failed")),
            ))
        });
        self
    }
}
