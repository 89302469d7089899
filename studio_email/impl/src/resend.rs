use std::sync::Arc;

use studio_email_contracts::{Email, EmailSendError, EmailService};
use studio_extern_contracts::resend::{ResendApiService, ResendEmailRequest, ResendSendResult};
use studio_models::email_address::EmailAddressWithName;
use tracing::debug;

/// Delivers emails through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendEmailService<Api> {
    api: Api,
    api_key: Arc<str>,
    from: Arc<EmailAddressWithName>,
}

impl<Api> ResendEmailService<Api> {
    pub fn new(api: Api, api_key: impl Into<Arc<str>>, from: EmailAddressWithName) -> Self {
        Self {
            api,
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

impl<Api> EmailService for ResendEmailService<Api>
where
    Api: ResendApiService,
{
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let request = ResendEmailRequest {
            from: self.from.to_string(),
            to: vec![email.recipient.to_string()],
            subject: email.subject,
            html: email.html,
            text: email.text,
            reply_to: email.reply_to,
            headers: email.headers,
        };

        match self.api.send_email(&self.api_key, &request).await? {
            ResendSendResult::Sent { id } => {
                debug!(%id, "email accepted by resend");
                Ok(())
            }
            ResendSendResult::Rejected { message } => Err(EmailSendError::Rejected(message)),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        // resend has no unauthenticated health endpoint
        Ok(())
    }
}
