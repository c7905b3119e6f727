//! # Garden Configuration
//!
//! Connection settings for the catalog endpoint and the candidate-seed policy
//! used by the beneficiary scan. Passed explicitly into `CatalogFetcher` and
//! `Garden`; nothing here is global.
//!
//! | Env | Default |
//! |-----|---------|
//! | `GARDEN_API_URL` | `http://localhost:3000/api/garden-data` |
//! | `GARDEN_REQUEST_TIMEOUT_MS` | `10000` (`0` disables the transport timeout) |
//! | `GARDEN_USER_AGENT` | `garden-core/<version>` |
//! | `GARDEN_CANDIDATE_SEEDS` | unset: scan every seed in the catalog |

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/garden-data";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

fn default_user_agent() -> String {
    format!("garden-core/{}", env!("CARGO_PKG_VERSION"))
}

/// Which seeds the beneficiary scan visits, in order
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "mode", content = "ids")]
pub enum CandidateSeeds {
    /// Every seed id in a fresh catalog response, in catalog order
    #[default]
    Catalog,
    /// An explicit ordered list; earlier ids win on duplicate slugs
    Fixed(Vec<String>),
}

impl CandidateSeeds {
    /// Parse a comma-separated id list. Blank input means `Catalog`.
    pub fn parse(list: &str) -> Self {
        let ids: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            CandidateSeeds::Catalog
        } else {
            CandidateSeeds::Fixed(ids)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Full URL of the garden catalog endpoint
    pub endpoint: String,
    /// Transport timeout in milliseconds; `0` leaves requests unbounded
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub candidate_seeds: CandidateSeeds,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            candidate_seeds: CandidateSeeds::Catalog,
        }
    }
}

impl GardenConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Load from `GARDEN_*` environment variables, defaulting anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads through the given lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("GARDEN_API_URL").filter(|u| !u.trim().is_empty()) {
            config.endpoint = url.trim().to_string();
        }

        if let Some(raw) = lookup("GARDEN_REQUEST_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.request_timeout_ms = ms,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Ignoring invalid GARDEN_REQUEST_TIMEOUT_MS, using default"
                ),
            }
        }

        if let Some(agent) = lookup("GARDEN_USER_AGENT").filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        if let Some(list) = lookup("GARDEN_CANDIDATE_SEEDS") {
            config.candidate_seeds = CandidateSeeds::parse(&list);
        }

        config
    }

    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    pub fn with_candidate_seeds(mut self, candidates: CandidateSeeds) -> Self {
        self.candidate_seeds = candidates;
        self
    }

    /// Transport timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}
