// src/sourcing/lever.rs
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{JobHuntError, JobHuntResult};
use crate::utils::http::HttpClient;
use super::model::JobPosting;
use super::provider::Provider;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeverPosting {
    text: String,
    hosted_url: String,
    categories: Option<LeverCategories>,
    // Epoch milliseconds
    created_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct LeverCategories {
    location: Option<String>,
}

/// Fetch the open postings of a Lever board
pub async fn fetch_jobs(client: &HttpClient, handle: &str) -> JobHuntResult<Vec<JobPosting>> {
    let url = Provider::Lever.jobs_url(handle);
    let postings: Vec<LeverPosting> =
        client.get_json(&url).await.map_err(|e| JobHuntError::ApiError {
            provider: Provider::Lever,
            handle: handle.to_string(),
            message: e.to_string(),
        })?;

    debug!("Fetched {} lever postings for '{}'", postings.len(), handle);
    Ok(to_postings(handle, postings))
}

fn to_postings(handle: &str, postings: Vec<LeverPosting>) -> Vec<JobPosting> {
    postings
        .into_iter()
        .map(|posting| JobPosting {
            source: Provider::Lever,
            company: handle.to_string(),
            title: posting.text,
            location: posting.categories.and_then(|c| c.location),
            url: posting.hosted_url,
            posted_at: posting
                .created_at
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_lever_postings() {
        let postings: Vec<LeverPosting> = serde_json::from_str(
            r#"[
                {
                    "id": "a1b2c3",
                    "text": "Backend Engineer",
                    "hostedUrl": "https://jobs.lever.co/acme/a1b2c3",
                    "categories": { "location": "Berlin", "team": "Engineering" },
                    "createdAt": 1706745600000
                },
                {
                    "id": "d4e5f6",
                    "text": "Account Executive",
                    "hostedUrl": "https://jobs.lever.co/acme/d4e5f6"
                }
            ]"#,
        )
        .unwrap();

        let postings = to_postings("acme", postings);
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].source, Provider::Lever);
        assert_eq!(postings[0].title, "Backend Engineer");
        assert_eq!(postings[0].location.as_deref(), Some("Berlin"));
        assert_eq!(
            postings[0].posted_at.map(|t| t.timestamp_millis()),
            Some(1706745600000)
        );
        assert!(postings[1].location.is_none());
        assert!(postings[1].posted_at.is_none());
    }
}
