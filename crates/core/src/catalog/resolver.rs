//! # Beneficiary Resolver
//!
//! The catalog has no beneficiary-indexed search, so finding a beneficiary
//! by slug means walking candidate seeds one at a time and scanning each
//! seed's embedded list.

use crate::models::{BeneficiaryMatch, Seed};
use anyhow::Result;
use async_trait::async_trait;

/// Resolves a single seed by id
#[async_trait]
pub trait SeedLookup: Send + Sync {
    /// `Ok(None)` is a normal not-found; `Err` is a failed lookup
    async fn lookup_seed(&self, id: &str) -> Result<Option<Seed>>;
}

/// Scans an ordered list of candidate seeds for a beneficiary slug.
///
/// Earlier candidates win when two seeds carry the same slug. A failed
/// lookup is logged and skipped, and so is a seed with no beneficiaries.
pub struct BeneficiaryResolver<'a, L: SeedLookup + ?Sized> {
    lookup: &'a L,
    candidates: Vec<String>,
}

impl<'a, L: SeedLookup + ?Sized> BeneficiaryResolver<'a, L> {
    pub fn new(lookup: &'a L, candidates: Vec<String>) -> Self {
        Self { lookup, candidates }
    }

    /// First `{seed, beneficiary}` pair whose slug matches, or `None` once
    /// every candidate has been tried
    #[tracing::instrument(skip(self), fields(candidates = self.candidates.len()))]
    pub async fn find_by_slug(&self, slug: &str) -> Option<BeneficiaryMatch> {
        for id in &self.candidates {
            let seed = match self.lookup.lookup_seed(id).await {
                Ok(Some(seed)) => seed,
                Ok(None) => {
                    tracing::debug!(seed_id = %id, "Candidate seed not found, skipping");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        seed_id = %id,
                        error = %e,
                        "Candidate seed lookup failed, continuing scan"
                    );
                    continue;
                }
            };

            if seed.beneficiaries.is_empty() {
                tracing::debug!(seed_id = %id, "Candidate seed has no beneficiaries");
                continue;
            }

            if let Some(found) = seed.find_beneficiary(slug) {
                let beneficiary = found.clone();
                tracing::debug!(seed_id = %id, "Beneficiary resolved");
                return Some(BeneficiaryMatch { seed, beneficiary });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_seeds;
    use crate::models::Beneficiary;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Outcome {
        Found(Seed),
        Missing,
        Fails,
    }

    struct ScriptedLookup {
        outcomes: HashMap<String, Outcome>,
        visited: Mutex<Vec<String>>,
    }

    impl ScriptedLookup {
        fn new(outcomes: Vec<(&str, Outcome)>) -> Self {
            Self {
                outcomes: outcomes
                    .into_iter()
                    .map(|(id, o)| (id.to_string(), o))
                    .collect(),
                visited: Mutex::new(Vec::new()),
            }
        }

        fn visited(&self) -> Vec<String> {
            self.visited.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SeedLookup for ScriptedLookup {
        async fn lookup_seed(&self, id: &str) -> Result<Option<Seed>> {
            self.visited.lock().unwrap().push(id.to_string());
            match self.outcomes.get(id) {
                Some(Outcome::Found(seed)) => Ok(Some(seed.clone())),
                Some(Outcome::Fails) => Err(anyhow::anyhow!("seed {} unavailable", id)),
                Some(Outcome::Missing) | None => Ok(None),
            }
        }
    }

    fn seed_with(id: &str, slugs: &[&str]) -> Seed {
        let mut seed = fallback_seeds().remove(0);
        seed.id = id.to_string();
        seed.beneficiaries = slugs
            .iter()
            .map(|slug| Beneficiary {
                id: format!("{}-{}", id, slug),
                name: slug.to_uppercase(),
                slug: slug.to_string(),
                image: String::new(),
                percentage: None,
                layout: Default::default(),
            })
            .collect();
        seed
    }

    fn candidates(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_candidate_wins_on_duplicate_slug() {
        let lookup = ScriptedLookup::new(vec![
            ("1", Outcome::Found(seed_with("1", &["abc", "dup"]))),
            ("2", Outcome::Found(seed_with("2", &["dup"]))),
        ]);
        let resolver = BeneficiaryResolver::new(&lookup, candidates(&["1", "2"]));

        let found = resolver.find_by_slug("dup").await.unwrap();
        assert_eq!(found.seed.id, "1");
        assert_eq!(found.beneficiary.id, "1-dup");
        assert_eq!(lookup.visited(), vec!["1"]);
    }

    #[tokio::test]
    async fn test_failed_candidate_does_not_abort_scan() {
        let lookup = ScriptedLookup::new(vec![
            ("1", Outcome::Fails),
            ("2", Outcome::Found(seed_with("2", &["grg"]))),
        ]);
        let resolver = BeneficiaryResolver::new(&lookup, candidates(&["1", "2"]));

        let found = resolver.find_by_slug("grg").await.unwrap();
        assert_eq!(found.seed.id, "2");
        assert_eq!(lookup.visited(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_empty_and_missing_seeds_are_skipped() {
        let lookup = ScriptedLookup::new(vec![
            ("1", Outcome::Found(seed_with("1", &[]))),
            ("2", Outcome::Missing),
            ("3", Outcome::Found(seed_with("3", &["x"]))),
        ]);
        let resolver = BeneficiaryResolver::new(&lookup, candidates(&["1", "2", "3"]));

        let found = resolver.find_by_slug("x").await.unwrap();
        assert_eq!(found.seed.id, "3");
    }

    #[tokio::test]
    async fn test_none_when_all_candidates_fail() {
        let lookup = ScriptedLookup::new(vec![("1", Outcome::Fails), ("2", Outcome::Fails)]);
        let resolver = BeneficiaryResolver::new(&lookup, candidates(&["1", "2"]));

        assert!(resolver.find_by_slug("grg").await.is_none());
        assert_eq!(lookup.visited(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_none_when_slug_absent() {
        let lookup = ScriptedLookup::new(vec![("1", Outcome::Found(seed_with("1", &["a"])))]);
        let resolver = BeneficiaryResolver::new(&lookup, candidates(&["1"]));
        assert!(resolver.find_by_slug("b").await.is_none());
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let lookup = ScriptedLookup::new(vec![]);
        let resolver = BeneficiaryResolver::new(&lookup, Vec::new());
        assert!(resolver.find_by_slug("a").await.is_none());
        assert!(lookup.visited().is_empty());
    }
}
