//! Shared page fetcher used by every recipe

use std::time::Duration;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::version::error::RecipeError;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Per-request settings for sites that reject plain clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overrides the default user agent
    pub user_agent: Option<&'static str>,
    /// Sends the request through the cookie-enabled client
    pub cookies: bool,
}

/// Performs exactly one GET per call and returns the body as text
pub struct PageFetcher {
    client: Client,
    cookie_client: Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().user_agent(DEFAULT_USER_AGENT).build()?,
            cookie_client: Client::builder()
                .user_agent(DEFAULT_USER_AGENT)
                .cookie_store(true)
                .build()?,
            timeout,
        })
    }

    pub async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String, RecipeError> {
        let client = if options.cookies {
            &self.cookie_client
        } else {
            &self.client
        };

        let mut request = client.get(url).timeout(self.timeout);
        if let Some(user_agent) = options.user_agent {
            request = request.header(USER_AGENT, user_agent);
        }

        debug!("Fetching {}", url);
        let response = request.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(RecipeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn map_error(&self, error: reqwest::Error) -> RecipeError {
        if error.is_timeout() {
            RecipeError::Timeout(self.timeout.as_millis() as u64)
        } else {
            RecipeError::Network(error)
        }
    }
}
