//! # Garden Models
//!
//! Wire types for the garden catalog and the presentation records derived
//! from it. Everything here is constructed by deserializing a catalog
//! response (or the bundled fallback snapshot) and is never mutated in
//! place; a refetch produces a fresh set of values.

use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single trait attribute from a seed's NFT metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub trait_type: String,
    /// Attribute values arrive as strings or numbers depending on the trait
    pub value: serde_json::Value,
}

impl Attribute {
    /// Render the value as display text, without JSON quoting
    pub fn display_value(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Seed metadata: an existence flag plus ordered trait attributes
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeedMetadata {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A conservation project funded by a seed, addressable by slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
    /// Unique within the owning seed's beneficiary list
    pub slug: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Layout-position fields used by the front end. Passed through untouched.
    #[serde(flatten)]
    pub layout: BTreeMap<String, serde_json::Value>,
}

/// A top-level catalog record with its embedded beneficiaries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub id: String,
    pub label: String,
    pub name: String,
    pub description: String,
    pub seed_image_url: String,
    pub latest_snapshot_url: Option<String>,
    pub snapshot_count: u64,
    /// Owner wallet address
    pub owner: String,
    /// Numeric string in the chain's smallest unit
    pub deposit_amount: Option<String>,
    pub snapshot_price: String,
    pub is_withdrawn: bool,
    pub is_live: bool,
    #[serde(default)]
    pub metadata: SeedMetadata,
    /// Absent and empty lists are treated the same
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
}

impl Seed {
    /// First beneficiary whose slug matches exactly
    pub fn find_beneficiary(&self, slug: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.slug == slug)
    }

    /// Ordinal position of a beneficiary within this seed's list.
    ///
    /// Matches on slug first (the external key), then on id.
    pub fn beneficiary_position(&self, beneficiary: &Beneficiary) -> Option<usize> {
        self.beneficiaries
            .iter()
            .position(|b| b.slug == beneficiary.slug)
            .or_else(|| {
                self.beneficiaries
                    .iter()
                    .position(|b| b.id == beneficiary.id)
            })
    }

    /// Look up a metadata attribute by trait type (case-insensitive)
    pub fn attribute(&self, trait_type: &str) -> Option<&Attribute> {
        self.metadata
            .attributes
            .iter()
            .find(|a| a.trait_type.eq_ignore_ascii_case(trait_type))
    }
}

/// Body of the garden catalog endpoint.
///
/// `seeds` is required on the wire: a body without it fails to parse and
/// the caller receives the fallback snapshot instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenDataResponse {
    pub success: bool,
    pub seeds: Vec<Seed>,
    /// RFC 3339 on the way out; RFC 3339 or epoch milliseconds on the way in
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireTimestamp {
        Text(DateTime<Utc>),
        Millis(i64),
    }

    match WireTimestamp::deserialize(deserializer)? {
        WireTimestamp::Text(ts) => Ok(ts),
        WireTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| de::Error::custom(format!("timestamp {} out of range", ms))),
    }
}

impl GardenDataResponse {
    /// Exact-match lookup by seed id
    pub fn seed(&self, id: &str) -> Option<&Seed> {
        self.seeds.iter().find(|s| s.id == id)
    }

    /// Seed ids in catalog order
    pub fn seed_ids(&self) -> Vec<String> {
        self.seeds.iter().map(|s| s.id.clone()).collect()
    }
}

/// A resolved beneficiary together with the seed that owns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeneficiaryMatch {
    pub seed: Seed,
    pub beneficiary: Beneficiary,
}

/// Presentation-ready record for an ecosystem page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemProject {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub area: String,
    pub short_text: String,
    pub extended_text: String,
    pub background_image_url: String,
    /// Never empty; falls back to the default emblem asset
    pub seed_emblem_url: String,
    pub seed_id: String,
}
