use std::{collections::BTreeMap, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_text;

/// A validated contact form submission.
///
/// Only ever constructed through [`ContactSubmissionInput::validate`] or the
/// validating newtypes, so holding one means every field passed both the
/// sanitize and the validate stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub interest: Option<ContactInterest>,
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: Option<ContactPhone>,
    pub message: ContactMessageContent,
}

#[nutype(
    sanitize(with = |s: String| sanitize_text(&s)),
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactInterest(String);

#[nutype(
    sanitize(with = |s: String| sanitize_text(&s)),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(with = |s: String| sanitize_text(&s)),
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(with = |s: String| sanitize_text(&s)),
    validate(regex = CONTACT_PHONE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(with = |s: String| sanitize_text(&s)),
    validate(len_char_min = 10, len_char_max = 5000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessageContent(String);

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub static CONTACT_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+\-.]{7,20}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Interest,
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Interest,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Message,
    ];

    /// The message reported for this field when it fails validation.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Interest => "Interest is too long.",
            Self::Name => "Name is required and must be ≤ 100 chars.",
            Self::Email => "Valid email required.",
            Self::Phone => "Invalid phone.",
            Self::Message => "Message must be 10–5000 characters.",
        }
    }
}

/// Per field validation messages, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFieldErrors(pub BTreeMap<ContactField, &'static str>);

impl ContactFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    fn reject(&mut self, field: ContactField) {
        self.0.insert(field, field.error_message());
    }
}

/// The untrusted shape of a submission as received from a client.
///
/// Missing fields are treated like empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmissionInput {
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmissionInput {
    /// Sanitizes and validates every field independently.
    ///
    /// Returns either a fully valid submission or the messages of all fields
    /// that failed, never a partially valid submission.
    pub fn validate(self) -> Result<ContactSubmission, ContactFieldErrors> {
        let mut errors = ContactFieldErrors::default();

        let interest = optional(self.interest, ContactInterest::try_new);
        let name = ContactName::try_new(self.name.unwrap_or_default());
        let email = ContactEmail::try_new(self.email.unwrap_or_default());
        let phone = optional(self.phone, ContactPhone::try_new);
        let message = ContactMessageContent::try_new(self.message.unwrap_or_default());

        let interest = interest
            .inspect_err(|_| errors.reject(ContactField::Interest))
            .ok();
        let name = name.inspect_err(|_| errors.reject(ContactField::Name)).ok();
        let email = email.inspect_err(|_| errors.reject(ContactField::Email)).ok();
        let phone = phone.inspect_err(|_| errors.reject(ContactField::Phone)).ok();
        let message = message
            .inspect_err(|_| errors.reject(ContactField::Message))
            .ok();

        match (interest, name, email, phone, message) {
            (Some(interest), Some(name), Some(email), Some(phone), Some(message)) => {
                Ok(ContactSubmission {
                    interest,
                    name,
                    email,
                    phone,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Optional fields that are empty after sanitizing count as absent.
fn optional<T, E>(
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, E>,
) -> Result<Option<T>, E> {
    let value = sanitize_text(&value.unwrap_or_default());
    if value.is_empty() {
        return Ok(None);
    }
    parse(value).map(Some)
}
