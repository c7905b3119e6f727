//! # Ecosystem URLs
//!
//! Two path shapes for the same beneficiary page:
//!
//! - seed-scoped: `/seed/{seedId}/{seedSlug}/ecosystem/{beneficiarySlug}`
//! - global: `/ecosystem/{beneficiarySlug}`
//!
//! Values are substituted as given. Callers pass URL-safe slugs.

use crate::models::{Beneficiary, Seed};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemUrlParams {
    #[serde(default)]
    pub seed_id: Option<String>,
    #[serde(default)]
    pub seed_slug: Option<String>,
    pub beneficiary_slug: String,
}

impl EcosystemUrlParams {
    pub fn global(beneficiary_slug: impl Into<String>) -> Self {
        Self {
            seed_id: None,
            seed_slug: None,
            beneficiary_slug: beneficiary_slug.into(),
        }
    }

    pub fn seed_scoped(
        seed_id: impl Into<String>,
        seed_slug: impl Into<String>,
        beneficiary_slug: impl Into<String>,
    ) -> Self {
        Self {
            seed_id: Some(seed_id.into()),
            seed_slug: Some(seed_slug.into()),
            beneficiary_slug: beneficiary_slug.into(),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Seed-scoped path when both seed id and seed slug are present (non-empty),
/// global path otherwise
pub fn build_ecosystem_url(params: &EcosystemUrlParams) -> String {
    match (present(&params.seed_id), present(&params.seed_slug)) {
        (Some(seed_id), Some(seed_slug)) => format!(
            "/seed/{}/{}/ecosystem/{}",
            seed_id, seed_slug, params.beneficiary_slug
        ),
        _ => format!("/ecosystem/{}", params.beneficiary_slug),
    }
}

/// Link for a resolved beneficiary; seed-scoped when a seed slug is given
pub fn ecosystem_url_for(
    seed: &Seed,
    beneficiary: &Beneficiary,
    seed_slug: Option<&str>,
) -> String {
    let params = match seed_slug {
        Some(slug) => EcosystemUrlParams::seed_scoped(&seed.id, slug, &beneficiary.slug),
        None => EcosystemUrlParams::global(&beneficiary.slug),
    };
    build_ecosystem_url(&params)
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
