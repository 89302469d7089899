use std::{collections::BTreeMap, sync::Arc};

use studio_core_contact_contracts::{ContactSendMessageError, ContactService};
use studio_email_contracts::{Email, EmailSendError, EmailService};
use studio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use studio_templates_contracts::{
    ContactMessageData, ContactMessageHtmlTemplate, ContactMessageTextTemplate, TemplateBrand,
    TemplateService,
};
use tracing::{error, info};

const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: Arc<ContactServiceConfig>,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Mailbox receiving the notifications. `None` if delivery is not fully
    /// configured, in which case every submission fails without contacting
    /// the provider.
    pub recipient: Option<EmailAddressWithName>,
    pub subject_prefix: Option<String>,
    pub brand: TemplateBrand,
}

impl<EmailS, TemplateS> ContactServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config: config.into(),
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let Some(recipient) = self.config.recipient.clone() else {
            error!("contact submission received but email delivery is not configured");
            return Err(ContactSendMessageError::NotConfigured);
        };

        let subject = subject(self.config.subject_prefix.as_deref(), &submission);
        let reply_to = reply_to(&submission);

        let data = ContactMessageData {
            brand: self.config.brand.clone(),
            interest: submission
                .interest
                .as_deref()
                .map_or(PLACEHOLDER, String::as_str)
                .into(),
            name: submission.name.to_string(),
            email: submission.email.to_string(),
            phone: submission
                .phone
                .as_deref()
                .map_or(PLACEHOLDER, String::as_str)
                .into(),
            message: submission.message.to_string(),
        };
        let text = self.template.render(&ContactMessageTextTemplate(data.clone()))?;
        let html = self.template.render(&ContactMessageHtmlTemplate(data))?;

        let email = Email {
            recipient,
            subject,
            html,
            text,
            reply_to: Some(reply_to.clone()),
            headers: BTreeMap::from([
                ("Reply-To".into(), reply_to),
                ("X-Website-Form".into(), "contact".into()),
            ]),
        };

        match self.email.send(email).await {
            Ok(()) => {
                info!("contact message delivered");
                Ok(())
            }
            Err(EmailSendError::Rejected(message)) => {
                error!(%message, "email provider rejected contact message");
                Err(ContactSendMessageError::Delivery(message))
            }
            Err(EmailSendError::Other(err)) => {
                error!("failed to deliver contact message: {err:#}");
                Err(ContactSendMessageError::Delivery(format!("{err:#}")))
            }
        }
    }
}

fn subject(prefix: Option<&str>, submission: &ContactSubmission) -> String {
    let subject = match &submission.interest {
        Some(interest) => format!("Inquiry: {}", **interest),
        None => format!("New message from {}", *submission.name),
    };

    match prefix {
        Some(prefix) => format!("{prefix} {subject}"),
        None => subject,
    }
}

fn reply_to(submission: &ContactSubmission) -> String {
    let name = submission.name.replace('"', "'");
    if name.is_empty() {
        submission.email.to_string()
    } else {
        format!("\"{name}\" <{}>", *submission.email)
    }
}

#[cfg(test)]
mod tests {
    use studio_email_contracts::MockEmailService;
    use studio_models::contact::ContactSubmissionInput;
    use studio_templates_contracts::MockTemplateService;
    use studio_utils::assert_matches;

    use super::*;

    fn config() -> ContactServiceConfig {
        ContactServiceConfig {
            recipient: Some("Studio Inbox <inbox@example.com>".parse().unwrap()),
            subject_prefix: None,
            brand: TemplateBrand {
                name: "Shea Studio".into(),
                url: Some("https://example.com/".into()),
                logo: None,
            },
        }
    }

    fn submission(interest: Option<&str>, name: &str) -> ContactSubmission {
        ContactSubmissionInput {
            interest: interest.map(Into::into),
            name: Some(name.into()),
            email: Some("jane@x.com".into()),
            phone: None,
            message: Some("Hello there, I'd like to book.".into()),
        }
        .validate()
        .unwrap()
    }

    fn data(config: &ContactServiceConfig, interest: &str, name: &str) -> ContactMessageData {
        ContactMessageData {
            brand: config.brand.clone(),
            interest: interest.into(),
            name: name.into(),
            email: "jane@x.com".into(),
            phone: "—".into(),
            message: "Hello there, I'd like to book.".into(),
        }
    }

    fn templates(data: ContactMessageData) -> MockTemplateService {
        MockTemplateService::new()
            .with_render(ContactMessageTextTemplate(data.clone()), "text body".into())
            .with_render(ContactMessageHtmlTemplate(data), "<p>html body</p>".into())
    }

    fn email(config: &ContactServiceConfig, subject: &str, reply_to: &str) -> Email {
        Email {
            recipient: config.recipient.clone().unwrap(),
            subject: subject.into(),
            html: "<p>html body</p>".into(),
            text: "text body".into(),
            reply_to: Some(reply_to.into()),
            headers: BTreeMap::from([
                ("Reply-To".into(), reply_to.into()),
                ("X-Website-Form".into(), "contact".into()),
            ]),
        }
    }

    #[test]
    fn subject_prefix_is_prepended_verbatim() {
        let submission = submission(None, "Jane Doe");
        assert_eq!(
            subject(Some("[Web] "), &submission),
            "[Web]  New message from Jane Doe"
        );
        assert_eq!(subject(None, &submission), "New message from Jane Doe");
    }

    #[tokio::test]
    async fn ok_without_interest() {
        // Arrange
        let config = config();
        let template = templates(data(&config, "—", "Jane Doe"));
        let email_service = MockEmailService::new().with_send(
            email(&config, "New message from Jane Doe", "\"Jane Doe\" <jane@x.com>"),
            Ok(()),
        );

        let sut = ContactServiceImpl::new(email_service, template, config);

        // Act
        let result = sut.send_message(submission(None, "Jane Doe")).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ok_with_interest_and_prefix() {
        // Arrange
        let config = ContactServiceConfig {
            subject_prefix: Some("[Website]".into()),
            ..config()
        };
        let template = templates(data(&config, "Maternity — The Total Bump", "Jane Doe"));
        let email_service = MockEmailService::new().with_send(
            email(
                &config,
                "[Website] Inquiry: Maternity — The Total Bump",
                "\"Jane Doe\" <jane@x.com>",
            ),
            Ok(()),
        );

        let sut = ContactServiceImpl::new(email_service, template, config);

        // Act
        let result = sut
            .send_message(submission(Some("Maternity — The Total Bump"), "Jane Doe"))
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn quotes_in_name_are_replaced() {
        // Arrange
        let config = config();
        let template = templates(data(&config, "—", "Jane \"JD\" Doe"));
        let email_service = MockEmailService::new().with_send(
            email(
                &config,
                "New message from Jane \"JD\" Doe",
                "\"Jane 'JD' Doe\" <jane@x.com>",
            ),
            Ok(()),
        );

        let sut = ContactServiceImpl::new(email_service, template, config);

        // Act
        let result = sut.send_message(submission(None, "Jane \"JD\" Doe")).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn not_configured() {
        // Arrange
        let config = ContactServiceConfig {
            recipient: None,
            ..config()
        };

        let sut =
            ContactServiceImpl::new(MockEmailService::new(), MockTemplateService::new(), config);

        // Act
        let result = sut.send_message(submission(None, "Jane Doe")).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::NotConfigured));
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let config = config();
        let template = templates(data(&config, "—", "Jane Doe"));
        let email_service = MockEmailService::new().with_send(
            email(&config, "New message from Jane Doe", "\"Jane Doe\" <jane@x.com>"),
            Err("The recipient domain is not verified".into()),
        );

        let sut = ContactServiceImpl::new(email_service, template, config);

        // Act
        let result = sut.send_message(submission(None, "Jane Doe")).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Delivery(message))
                if message == "The recipient domain is not verified"
        );
    }
}
