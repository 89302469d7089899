use std::{ops::Deref, sync::LazyLock, time::Duration};

use anyhow::Context;
use studio_utils::studio_version;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("Studio Backend (Version {})", studio_version()));

/// Shared HTTP client for all outgoing requests to third-party APIs.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    /// Create a client whose requests fail after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .timeout(timeout)
            .build()
            .map(Self)
            .context("Failed to build HTTP client")
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
