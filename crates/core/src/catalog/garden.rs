//! # Garden Client
//!
//! The handle callers hold to resolve seeds and beneficiaries. Wraps a
//! `CatalogSource` and turns any source failure into the fallback snapshot,
//! so nothing above this layer ever sees a transport error.

use super::fallback::fallback_response;
use super::resolver::{BeneficiaryResolver, SeedLookup};
use super::{CatalogFetcher, CatalogSource, FallbackCatalog};
use crate::config::{CandidateSeeds, GardenConfig};
use crate::models::{BeneficiaryMatch, GardenDataResponse, Seed};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolution entry point for the front end.
///
/// Cheap to clone; clones share the underlying source. Every call goes back
/// to the source, nothing is cached between calls.
#[derive(Clone)]
pub struct Garden {
    source: Arc<dyn CatalogSource>,
    candidates: CandidateSeeds,
}

impl Garden {
    pub fn new(source: Arc<dyn CatalogSource>, candidates: CandidateSeeds) -> Self {
        Self { source, candidates }
    }

    /// Live HTTP catalog as described by `config`
    pub fn from_config(config: &GardenConfig) -> Result<Self> {
        let fetcher = CatalogFetcher::new(config)?;
        Ok(Self::new(Arc::new(fetcher), config.candidate_seeds.clone()))
    }

    /// Serve only the bundled snapshot
    pub fn offline() -> Self {
        Self::new(Arc::new(FallbackCatalog), CandidateSeeds::Catalog)
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Fetch the catalog. Never fails: any source error yields the fallback
    /// snapshot with `success = false`.
    pub async fn fetch_garden_data(&self) -> GardenDataResponse {
        match self.source.fetch_catalog().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "Catalog fetch failed, serving fallback snapshot"
                );
                fallback_response()
            }
        }
    }

    /// Exact-match lookup by id against a fresh catalog
    #[tracing::instrument(skip(self))]
    pub async fn fetch_seed_by_id(&self, id: &str) -> Option<Seed> {
        let data = self.fetch_garden_data().await;
        data.seeds.into_iter().find(|seed| seed.id == id)
    }

    /// Seed ids the beneficiary scan visits, in priority order
    pub async fn candidate_seed_ids(&self) -> Vec<String> {
        match &self.candidates {
            CandidateSeeds::Fixed(ids) => ids.clone(),
            CandidateSeeds::Catalog => self.fetch_garden_data().await.seed_ids(),
        }
    }

    /// Find a beneficiary by slug across all candidate seeds
    #[tracing::instrument(skip(self))]
    pub async fn find_beneficiary_by_slug(&self, slug: &str) -> Option<BeneficiaryMatch> {
        let candidates = self.candidate_seed_ids().await;
        BeneficiaryResolver::new(self, candidates)
            .find_by_slug(slug)
            .await
    }

    /// Find a beneficiary within one known seed, without scanning others
    pub async fn find_beneficiary_in_seed(
        &self,
        seed_id: &str,
        slug: &str,
    ) -> Option<BeneficiaryMatch> {
        let seed = self.fetch_seed_by_id(seed_id).await?;
        let beneficiary = seed.find_beneficiary(slug)?.clone();
        Some(BeneficiaryMatch { seed, beneficiary })
    }
}

#[async_trait]
impl SeedLookup for Garden {
    async fn lookup_seed(&self, id: &str) -> Result<Option<Seed>> {
        Ok(self.fetch_seed_by_id(id).await)
    }
}
