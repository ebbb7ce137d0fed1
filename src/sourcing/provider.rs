// src/sourcing/provider.rs
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::error::JobHuntError;

/// ATS platform hosting a company's public job board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Greenhouse,
    Lever,
}

impl Provider {
    /// Fixed platform preference order for handle inference.
    /// Greenhouse is exhausted in full before Lever is attempted at all.
    pub const PRIORITY: [Provider; 2] = [Provider::Greenhouse, Provider::Lever];

    /// Canonical public board URL for a handle
    pub fn board_url(&self, handle: &str) -> String {
        match self {
            Provider::Greenhouse => format!("https://boards.greenhouse.io/{}", handle),
            Provider::Lever => format!("https://jobs.lever.co/{}", handle),
        }
    }

    /// Substring the final response host must contain for a probe to count.
    /// Guards against redirects to a generic landing page on a foreign host.
    pub fn host_fragment(&self) -> &'static str {
        match self {
            Provider::Greenhouse => "greenhouse",
            Provider::Lever => "lever.co",
        }
    }

    /// Public job-listing API endpoint for a handle
    pub fn jobs_url(&self, handle: &str) -> String {
        match self {
            Provider::Greenhouse => {
                format!("https://boards-api.greenhouse.io/v1/boards/{}/jobs", handle)
            }
            Provider::Lever => format!("https://api.lever.co/v0/postings/{}?mode=json", handle),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Greenhouse => "greenhouse",
            Provider::Lever => "lever",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = JobHuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greenhouse" => Ok(Provider::Greenhouse),
            "lever" => Ok(Provider::Lever),
            other => Err(JobHuntError::InvalidInput(format!("Unknown provider: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_urls_use_the_platform_templates() {
        assert_eq!(
            Provider::Greenhouse.board_url("acme"),
            "https://boards.greenhouse.io/acme"
        );
        assert_eq!(Provider::Lever.board_url("acme"), "https://jobs.lever.co/acme");
    }

    #[test]
    fn priority_is_greenhouse_then_lever() {
        assert_eq!(Provider::PRIORITY, [Provider::Greenhouse, Provider::Lever]);
    }
}
