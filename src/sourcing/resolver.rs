// src/sourcing/resolver.rs
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, debug, warn};

use super::candidates::handle_candidates;
use super::model::{ResolvedBook, ResolvedTarget, TargetBook, TargetSpec};
use super::probe::Prober;
use super::provider::Provider;

/// Resolves a target book into confirmed (provider, handle) pairs.
///
/// Items are probed concurrently up to `max_concurrent`, but each item's own
/// probes stay strictly sequential: candidate order and the Greenhouse-before-
/// Lever platform priority are part of the resolution contract, and no
/// (provider, handle) pair is requested more than once per resolution.
pub struct TargetResolver<P> {
    prober: Arc<P>,
    max_concurrent: usize,
}

impl<P: Prober + 'static> TargetResolver<P> {
    pub fn new(prober: P, max_concurrent: usize) -> Self {
        Self {
            prober: Arc::new(prober),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Resolve every item of every category, dropping items that cannot be
    /// confirmed. Output categories are exactly the input categories, and
    /// surviving items keep their relative input order.
    pub async fn resolve(&self, book: TargetBook) -> ResolvedBook {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));

        // One task per item, spawned up front; the semaphore bounds how many
        // probes are in flight at once.
        let mut pending: Vec<(String, Vec<JoinHandle<Option<ResolvedTarget>>>)> = Vec::new();
        for (category, specs) in book {
            let mut handles = Vec::with_capacity(specs.len());
            for spec in specs {
                let prober = Arc::clone(&self.prober);
                let semaphore = Arc::clone(&semaphore);
                handles.push(tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.unwrap();
                    resolve_one(prober.as_ref(), spec).await
                }));
            }
            pending.push((category, handles));
        }

        // Join in spawn order so output order is independent of completion order
        let mut out = ResolvedBook::new();
        for (category, handles) in pending {
            let mut resolved = Vec::new();
            for handle in handles {
                match handle.await {
                    Ok(Some(target)) => resolved.push(target),
                    Ok(None) => {}
                    Err(e) => warn!("Resolution task failed: {}", e),
                }
            }
            info!("Resolved {} targets in category '{}'", resolved.len(), category);
            out.insert(category, resolved);
        }

        out
    }
}

/// Resolve a single target spec. Never fails: an unresolvable item is `None`.
async fn resolve_one<P: Prober + ?Sized>(prober: &P, spec: TargetSpec) -> Option<ResolvedTarget> {
    // Explicit case: validate the stated pair and pass it through unchanged
    if let (Some(provider), Some(handle)) = (spec.provider, spec.handle.clone()) {
        if prober.probe(provider, &handle).await {
            return Some(ResolvedTarget {
                name: spec.name,
                provider,
                handle,
            });
        }
        debug!("Could not confirm {}:{} for '{}'", provider, handle, spec.name);
        return None;
    }

    // Inference case: every candidate against Greenhouse before any against
    // Lever, candidates in generation order, first success wins
    let candidates = handle_candidates(&spec.name);
    for provider in Provider::PRIORITY {
        for candidate in &candidates {
            if prober.probe(provider, candidate).await {
                debug!("Inferred {}:{} for '{}'", provider, candidate, spec.name);
                return Some(ResolvedTarget {
                    name: spec.name,
                    provider,
                    handle: candidate.clone(),
                });
            }
        }
    }

    debug!("No provider found for '{}'", spec.name);
    None
}
