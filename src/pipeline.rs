// src/pipeline.rs
use tracing::{info, warn};

use crate::sourcing::{greenhouse, lever, JobPosting, Provider, ResolvedBook};
use crate::utils::http::HttpClient;

/// Fetch listings for every resolved target, in every category.
///
/// A handle whose fetch fails is logged and skipped; one dead board never
/// aborts the run.
pub async fn collect_postings(client: &HttpClient, targets: &ResolvedBook) -> Vec<JobPosting> {
    let mut collected = Vec::new();

    for target in targets.values().flatten() {
        let fetched = match target.provider {
            Provider::Greenhouse => greenhouse::fetch_jobs(client, &target.handle).await,
            Provider::Lever => lever::fetch_jobs(client, &target.handle).await,
        };

        match fetched {
            Ok(mut postings) => collected.append(&mut postings),
            Err(e) => warn!("[{}:{}] fetch failed: {}", target.provider, target.handle, e),
        }
    }

    let target_count: usize = targets.values().map(|v| v.len()).sum();
    info!("Collected {} postings from {} targets", collected.len(), target_count);

    collected
}
