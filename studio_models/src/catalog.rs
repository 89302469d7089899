use serde::{Deserialize, Serialize};

/// A bookable service as shown on the services page and in preview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    pub price: String,
    pub duration: String,
    pub img: String,
    pub alt: String,
    pub deliverables: Vec<String>,
    pub best_for: Vec<String>,
    pub packages: Vec<ServicePackage>,
}

/// A package tier of a [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub name: String,
    pub duration: String,
    pub deliverables: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// An entry of the contact form's "inquiry topic" dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestOption {
    pub value: String,
    pub label: String,
}

impl InterestOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The interest label used to deep link into the contact form from a
/// package card, e.g. `Maternity — The Total Bump`.
pub fn package_interest_label(service: &Service, package: &ServicePackage) -> String {
    format!("{} — {}", service.title, package.name)
}
