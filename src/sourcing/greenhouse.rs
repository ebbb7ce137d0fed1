// src/sourcing/greenhouse.rs
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{JobHuntError, JobHuntResult};
use crate::utils::http::HttpClient;
use super::model::JobPosting;
use super::provider::Provider;

#[derive(Debug, Deserialize)]
struct BoardResponse {
    jobs: Vec<BoardJob>,
}

#[derive(Debug, Deserialize)]
struct BoardJob {
    title: String,
    absolute_url: String,
    location: Option<BoardLocation>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct BoardLocation {
    name: String,
}

/// Fetch the open postings of a Greenhouse board
pub async fn fetch_jobs(client: &HttpClient, handle: &str) -> JobHuntResult<Vec<JobPosting>> {
    let url = Provider::Greenhouse.jobs_url(handle);
    let board: BoardResponse =
        client.get_json(&url).await.map_err(|e| JobHuntError::ApiError {
            provider: Provider::Greenhouse,
            handle: handle.to_string(),
            message: e.to_string(),
        })?;

    debug!("Fetched {} greenhouse postings for '{}'", board.jobs.len(), handle);
    Ok(to_postings(handle, board))
}

fn to_postings(handle: &str, board: BoardResponse) -> Vec<JobPosting> {
    board
        .jobs
        .into_iter()
        .map(|job| JobPosting {
            source: Provider::Greenhouse,
            company: handle.to_string(),
            title: job.title,
            location: job.location.map(|l| l.name),
            url: job.absolute_url,
            posted_at: job.updated_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_board_jobs_into_postings() {
        let board: BoardResponse = serde_json::from_str(
            r#"{
                "jobs": [
                    {
                        "id": 4000001,
                        "title": "Staff Engineer",
                        "absolute_url": "https://boards.greenhouse.io/acme/jobs/4000001",
                        "location": { "name": "Remote - US" },
                        "updated_at": "2024-02-01T11:22:23-04:00"
                    },
                    {
                        "id": 4000002,
                        "title": "Recruiter",
                        "absolute_url": "https://boards.greenhouse.io/acme/jobs/4000002"
                    }
                ]
            }"#,
        )
        .unwrap();

        let postings = to_postings("acme", board);
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].source, Provider::Greenhouse);
        assert_eq!(postings[0].company, "acme");
        assert_eq!(postings[0].title, "Staff Engineer");
        assert_eq!(postings[0].location.as_deref(), Some("Remote - US"));
        assert!(postings[0].posted_at.is_some());
        assert!(postings[1].location.is_none());
        assert!(postings[1].posted_at.is_none());
    }
}
