use studio_email_contracts::{Email, EmailSendError, EmailService};
use studio_extern_contracts::resend::ResendApiService;

pub use crate::{resend::ResendEmailService, smtp::SmtpEmailService};

mod resend;
mod smtp;

/// The email delivery backend selected by the configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl<ResendApi> {
    Resend(ResendEmailService<ResendApi>),
    Smtp(SmtpEmailService),
    /// No provider credentials are configured, every send fails.
    Disabled,
}

impl<ResendApi> EmailServiceImpl<ResendApi> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl<ResendApi> EmailService for EmailServiceImpl<ResendApi>
where
    ResendApi: ResendApiService,
{
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        match self {
            Self::Resend(resend) => resend.send(email).await,
            Self::Smtp(smtp) => smtp.send(email).await,
            Self::Disabled => Err(anyhow::anyhow!("Email delivery is not configured").into()),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Resend(resend) => resend.ping().await,
            Self::Smtp(smtp) => smtp.ping().await,
            Self::Disabled => Ok(()),
        }
    }
}
