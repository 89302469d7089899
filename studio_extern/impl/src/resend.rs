use std::sync::Arc;

use anyhow::{anyhow, Context};
use reqwest::StatusCode;
use serde::Deserialize;
use studio_extern_contracts::resend::{ResendApiService, ResendEmailRequest, ResendSendResult};
use url::Url;

use crate::http::HttpClient;

/// https://resend.com/docs/api-reference/emails/send-email
const API_ENDPOINT: &str = "https://api.resend.com/";

#[derive(Debug, Clone)]
pub struct ResendApiServiceImpl {
    config: ResendApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ResendApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ResendApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => API_ENDPOINT.parse()?,
        };
        Ok(Self {
            endpoint: endpoint.into(),
        })
    }
}

impl ResendApiServiceImpl {
    pub fn new(config: ResendApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl ResendApiService for ResendApiServiceImpl {
    async fn send_email(
        &self,
        api_key: &str,
        request: &ResendEmailRequest,
    ) -> anyhow::Result<ResendSendResult> {
        let url = self
            .config
            .endpoint
            .join("emails")
            .context("Failed to build resend URL")?;

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send resend request")?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SendResponse>()
                .await
                .map(|SendResponse { id }| ResendSendResult::Sent { id })
                .context("Failed to deserialize resend response");
        }

        let body = response
            .text()
            .await
            .context("Failed to read resend error response")?;

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(ErrorResponse { message, name }) => {
                tracing::debug!(%status, ?name, "resend rejected the email");
                Ok(ResendSendResult::Rejected { message })
            }
            Err(_) => Err(unexpected_status(status, &body)),
        }
    }
}

fn unexpected_status(status: StatusCode, body: &str) -> anyhow::Error {
    anyhow!("Resend returned {status}: {}", body.trim())
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
    name: Option<String>,
}
