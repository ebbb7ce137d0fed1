// src/sourcing/probe.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::config::ProbeConfig;
use crate::error::{JobHuntError, JobHuntResult};
use crate::utils::http::HttpClient;
use super::provider::Provider;

/// Live existence check for a (provider, handle) pair.
///
/// Implementations must be total: every failure mode collapses into `false`.
/// The resolver depends only on this trait, so its branching logic stays
/// unit-testable without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    /// Does `handle` exist as a valid board on `provider`?
    async fn probe(&self, provider: Provider, handle: &str) -> bool;
}

/// Prober backed by a single HTTP GET against the platform's public board URL
pub struct HttpProber {
    client: HttpClient,
}

impl HttpProber {
    pub fn new(user_agent: Option<String>, config: &ProbeConfig) -> JobHuntResult<Self> {
        let client = HttpClient::new(user_agent, Some(config.timeout_secs))
            .map_err(|e| JobHuntError::ConfigError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    /// One bounded GET, no retries. A transient network failure is
    /// indistinguishable from "handle does not exist" for this run.
    async fn probe(&self, provider: Provider, handle: &str) -> bool {
        let url = provider.board_url(handle);

        match self.client.get(&url).await {
            Ok(response) => {
                let status_ok = response.status() == StatusCode::OK;
                // Nonexistent handles can redirect to the platform's own
                // marketing site, so the status alone is not enough.
                let host_ok = host_matches(response.url(), provider.host_fragment());

                if !(status_ok && host_ok) {
                    debug!(
                        "probe {}:{} rejected (status {}, final host {:?})",
                        provider,
                        handle,
                        response.status(),
                        response.url().host_str()
                    );
                }
                status_ok && host_ok
            }
            Err(e) => {
                debug!("probe {}:{} failed: {}", provider, handle, e);
                false
            }
        }
    }
}

/// Check that the final resolved URL still points at the expected platform
fn host_matches(url: &Url, fragment: &str) -> bool {
    url.host_str().map_or(false, |host| host.contains(fragment))
}
