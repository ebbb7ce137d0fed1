// src/sourcing/model.rs
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use super::provider::Provider;

/// One entry of the hand-maintained target list: a company the user wants
/// postings from, with the provider/handle pair filled in when known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// A target whose provider and handle were confirmed reachable (or
/// heuristically accepted) at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub name: String,
    pub provider: Provider,
    pub handle: String,
}

/// Category name -> target specs, as loaded from the targets document
pub type TargetBook = HashMap<String, Vec<TargetSpec>>;

/// Category name -> resolved targets
pub type ResolvedBook = HashMap<String, Vec<ResolvedTarget>>;

/// A job posting as returned by a provider's listing API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub source: Provider,
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub url: String,
    pub posted_at: Option<DateTime<Utc>>,
}
