use std::{
    collections::{BTreeMap, BTreeSet},
    time::Duration,
};

use studio_models::contact::{ContactField, CONTACT_EMAIL_REGEX, CONTACT_PHONE_REGEX};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{ContactApi, ContactRequest};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const NAME_MAX_LEN: usize = 100;
const MESSAGE_MIN_LEN: usize = 10;
const MESSAGE_MAX_LEN: usize = 5000;

/// The state of a form submission. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Success {
        message: String,
    },
    Error {
        message: String,
        /// Diagnostic detail for operators, not meant for end users.
        debug: Option<String>,
    },
}

impl FormStatus {
    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            debug: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormFields {
    pub interest: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot, hidden from humans.
    pub website: String,
}

#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFormFields,
    touched: BTreeSet<ContactField>,
    status: watch::Sender<FormStatus>,
    timeout: Duration,
}

impl ContactForm {
    /// Create an empty form, optionally with an inquiry topic selected (e.g.
    /// from a package deep link).
    pub fn new(interest: Option<&str>) -> Self {
        Self {
            fields: ContactFormFields {
                interest: interest.unwrap_or_default().trim().into(),
                ..Default::default()
            },
            touched: BTreeSet::new(),
            status: watch::Sender::new(FormStatus::Idle),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn status(&self) -> FormStatus {
        self.status.borrow().clone()
    }

    /// Observe status changes.
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    /// Mark a field as interacted with, so its errors become visible.
    pub fn touch(&mut self, field: ContactField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched.contains(&field)
    }

    /// Validate the current field values.
    pub fn errors(&self) -> BTreeMap<ContactField, &'static str> {
        let fields = &self.fields;
        let name = fields.name.trim().chars().count();
        let message = fields.message.trim().chars().count();
        let phone = fields.phone.trim();

        [
            (
                ContactField::Name,
                if name == 0 {
                    Some("Please enter your name.")
                } else if name > NAME_MAX_LEN {
                    Some("Name is too long.")
                } else {
                    None
                },
            ),
            (
                ContactField::Email,
                (!CONTACT_EMAIL_REGEX.is_match(fields.email.trim()))
                    .then_some("Enter a valid email."),
            ),
            (
                ContactField::Phone,
                (!phone.is_empty() && !CONTACT_PHONE_REGEX.is_match(phone))
                    .then_some("Enter a valid phone number."),
            ),
            (
                ContactField::Message,
                if message < MESSAGE_MIN_LEN {
                    Some("Please include a short message (10+ characters).")
                } else if message > MESSAGE_MAX_LEN {
                    Some("Message is too long.")
                } else {
                    None
                },
            ),
        ]
        .into_iter()
        .filter_map(|(field, error)| Some((field, error?)))
        .collect()
    }

    /// The errors of fields the user has already interacted with.
    pub fn visible_errors(&self) -> BTreeMap<ContactField, &'static str> {
        let mut errors = self.errors();
        errors.retain(|field, _| self.touched.contains(field));
        errors
    }

    /// Validate and submit the form, returning the final status.
    ///
    /// A request that takes longer than the configured timeout is dropped and
    /// reported as failed, even if the server completes it later.
    pub async fn submit(&mut self, api: &impl ContactApi) -> FormStatus {
        self.set_status(FormStatus::Idle);

        if !self.fields.website.is_empty() {
            debug!("honeypot field is filled, not submitting");
            return self.set_status(FormStatus::error("Submission failed."));
        }

        if !self.errors().is_empty() {
            self.touched.extend([
                ContactField::Name,
                ContactField::Email,
                ContactField::Message,
            ]);
            if !self.fields.phone.is_empty() {
                self.touched.insert(ContactField::Phone);
            }
            return self.set_status(FormStatus::error("Please fix the highlighted fields."));
        }

        self.set_status(FormStatus::Loading);

        let request = self.request();
        let status = match tokio::time::timeout(self.timeout, api.send(&request)).await {
            Err(_) => {
                warn!(timeout = ?self.timeout, "contact request timed out");
                FormStatus::error("Request timed out. Please try again.")
            }
            Ok(Err(err)) => {
                warn!("contact request failed: {err:#}");
                FormStatus::Error {
                    message: "Something went wrong. Please try again.".into(),
                    debug: Some(format!("{err:#}")),
                }
            }
            Ok(Ok(response)) if response.is_success() => {
                self.fields = ContactFormFields::default();
                self.touched.clear();
                FormStatus::Success {
                    message: "Thanks! Your message has been sent.".into(),
                }
            }
            Ok(Ok(response)) => FormStatus::Error {
                message: response
                    .error
                    .unwrap_or_else(|| format!("Request failed ({})", response.status)),
                debug: response.debug,
            },
        };

        self.set_status(status)
    }

    fn request(&self) -> ContactRequest {
        let fields = &self.fields;
        ContactRequest {
            interest: fields.interest.trim().into(),
            name: fields.name.trim().into(),
            email: fields.email.trim().into(),
            phone: fields.phone.trim().into(),
            message: fields.message.trim().into(),
        }
    }

    fn set_status(&self, status: FormStatus) -> FormStatus {
        self.status.send_replace(status.clone());
        status
    }
}
