//! HTTP probe of the protected endpoint.
//!
//! # Responsibilities
//! - Issue a GET to the configured target
//! - Map transport errors and non-200 responses to `ProbeError`

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::config::TargetConfig;

/// Why a call to the protected endpoint failed.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid target url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("service call failed with status {0}")]
    UnexpectedStatus(StatusCode),
}

/// GETs a fixed URL; only `200 OK` is a success.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    url: Url,
}

impl HttpProbe {
    pub fn new(config: &TargetConfig) -> Result<Self, ProbeError> {
        let url = Url::parse(&config.url)?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .no_proxy()
            .user_agent(concat!("circuit-guard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Perform one call against the target.
    pub async fn call(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(ProbeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::UnexpectedStatus(status));
        }

        tracing::info!(url = %self.url, "Service call succeeded");
        Ok(())
    }
}
