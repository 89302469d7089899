use std::time::Duration;

use anyhow::{anyhow, Context};
use lettre::{
    message::{
        header::{HeaderName, HeaderValue},
        Mailbox, MessageBuilder, MultiPart,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use studio_email_contracts::{Email, EmailSendError, EmailService};
use studio_models::email_address::EmailAddressWithName;
use studio_utils::Apply;

/// Delivers emails through an SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    pub fn new(url: &str, from: EmailAddressWithName, timeout: Duration) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)
            .context("Invalid SMTP url")?
            .timeout(Some(timeout))
            .build();

        Ok(Self { from, transport })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let message = build_message(&self.from, email)?;

        match self.transport.send(message).await {
            Ok(response) if response.is_positive() => Ok(()),
            Ok(response) => Err(EmailSendError::Rejected(
                response.message().collect::<Vec<_>>().join(" "),
            )),
            Err(err) if err.is_permanent() => Err(EmailSendError::Rejected(err.to_string())),
            Err(err) => Err(anyhow::Error::new(err)
                .context("Failed to send email via SMTP")
                .into()),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    let reply_to = email
        .reply_to
        .as_deref()
        .map(str::parse::<Mailbox>)
        .transpose()
        .context("Invalid reply-to mailbox")?;

    let builder = email
        .headers
        .into_iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("reply-to"))
        .try_fold(Message::builder(), |builder, (name, value)| {
            let name = HeaderName::new_from_ascii(name)
                .map_err(|_| anyhow!("Invalid header name"))?;
            anyhow::Ok(builder.raw_header(HeaderValue::new(name, value)))
        })?;

    builder
        .from(from.0.clone())
        .to(email.recipient.0)
        .apply_map(reply_to, MessageBuilder::reply_to)
        .subject(email.subject)
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))
        .context("Failed to build email message")
}
