use std::{collections::BTreeMap, future::Future};

use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResendApiService: Send + Sync + 'static {
    /// Submit an email to the Resend delivery API.
    ///
    /// An explicit error object returned by the API is reported as
    /// [`ResendSendResult::Rejected`], transport and protocol failures as
    /// `Err`.
    fn send_email(
        &self,
        api_key: &str,
        request: &ResendEmailRequest,
    ) -> impl Future<Output = anyhow::Result<ResendSendResult>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendSendResult {
    Sent { id: String },
    Rejected { message: String },
}

#[cfg(feature = "mock")]
impl MockResendApiService {
    pub fn with_send_email(
        mut self,
        api_key: String,
        request: ResendEmailRequest,
        result: ResendSendResult,
    ) -> Self {
        self.expect_send_email()
            .once()
            .with(
                mockall::predicate::eq(api_key),
                mockall::predicate::eq(request),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
