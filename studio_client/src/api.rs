use std::future::Future;

use anyhow::Context;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use studio_utils::studio_version;
use url::Url;

#[cfg_attr(test, mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Post a submission to the contact endpoint.
    ///
    /// Only transport failures are errors, every HTTP response is returned.
    fn send(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

/// The JSON body sent to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub interest: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub status: u16,
    pub error: Option<String>,
    pub debug: Option<String>,
}

impl ContactApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    debug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpContactApi {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpContactApi {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Studio Contact Client (Version {})", studio_version()))
            .build()
            .context("Failed to build HTTP client")?;
        let endpoint = base_url
            .join("api/contact")
            .context("Invalid backend url")?;
        Ok(Self { http, endpoint })
    }
}

impl ContactApi for HttpContactApi {
    async fn send(&self, request: &ContactRequest) -> anyhow::Result<ContactApiResponse> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send contact request")?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .context("Failed to read contact response")?;

        let (error, debug) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody { error, debug }) => (error, debug),
            Err(_) if text.trim().is_empty() => (Some("Unknown server response.".into()), None),
            Err(_) => (Some(text), None),
        };

        Ok(ContactApiResponse {
            status,
            error: error.filter(|e| !e.is_empty()),
            debug: debug.filter(|d| !d.is_empty()),
        })
    }
}
