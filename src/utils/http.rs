// src/utils/http.rs
use std::time::Duration;
use anyhow::{Result, Context};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for making requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or_else(|| format!("jobhunt/{}", env!("CARGO_PKG_VERSION")));
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(30));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, user_agent })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);

        self.client
            .get(url)
            .send()
            .await
            .context(format!("Failed to GET {}", url))
    }

    /// Make a GET request and deserialize the JSON response body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "GET {} returned status {}",
                url,
                response.status()
            ));
        }

        response
            .json::<T>()
            .await
            .context(format!("Failed to parse JSON from {}", url))
    }

    /// Get the user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
