//! # Fallback Snapshot
//!
//! The bundled catalog served whenever the live fetch fails. It is built in
//! process from constants, never read from disk or the network, so it is
//! always available and always the same for a given crate version.

use super::CatalogSource;
use crate::error::CatalogResult;
use crate::models::{Attribute, Beneficiary, GardenDataResponse, Seed, SeedMetadata};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;

/// Bumped whenever the bundled seeds change
pub const FALLBACK_SNAPSHOT_VERSION: &str = "2024.06.1";

fn beneficiary(id: &str, name: &str, slug: &str, percentage: f64, x: i64, y: i64) -> Beneficiary {
    let mut layout = BTreeMap::new();
    layout.insert("x".to_string(), json!(x));
    layout.insert("y".to_string(), json!(y));

    Beneficiary {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        image: format!("/beneficiaries/{}.jpg", slug),
        percentage: Some(percentage),
        layout,
    }
}

fn attribute(trait_type: &str, value: serde_json::Value) -> Attribute {
    Attribute {
        trait_type: trait_type.to_string(),
        value,
    }
}

fn seed_one() -> Seed {
    Seed {
        id: "1".to_string(),
        label: "Seed #1".to_string(),
        name: "Northern Canopy".to_string(),
        description: "Funds habitat protection across three northern and island ecosystems. \
                      Every snapshot minted from this seed sends a share of its price to the projects below."
            .to_string(),
        seed_image_url: "/seeds/seed_1.png".to_string(),
        latest_snapshot_url: None,
        snapshot_count: 0,
        owner: "0x0000000000000000000000000000000000000000".to_string(),
        deposit_amount: None,
        snapshot_price: "0.011".to_string(),
        is_withdrawn: false,
        is_live: true,
        metadata: SeedMetadata {
            exists: true,
            attributes: vec![
                attribute("Generation", json!(1)),
                attribute("Biome", json!("Boreal")),
            ],
        },
        beneficiaries: vec![
            beneficiary("b-wal", "Walrus Watch", "wal", 40.0, 120, 80),
            beneficiary("b-pim", "Pygmy Elephant Initiative", "pim", 30.0, 260, 140),
            beneficiary("b-tig", "Tiger Corridors", "tig", 30.0, 180, 300),
        ],
    }
}

fn seed_two() -> Seed {
    Seed {
        id: "2".to_string(),
        label: "Seed #2".to_string(),
        name: "Equatorial Roots".to_string(),
        description: "Supports four equatorial conservation programmes protecting great apes, \
                      elephants, jaguars and grassland birds."
            .to_string(),
        seed_image_url: "/seeds/seed_2.png".to_string(),
        latest_snapshot_url: None,
        snapshot_count: 0,
        owner: "0x0000000000000000000000000000000000000000".to_string(),
        deposit_amount: None,
        snapshot_price: "0.011".to_string(),
        is_withdrawn: false,
        is_live: true,
        metadata: SeedMetadata {
            exists: true,
            attributes: vec![
                attribute("Generation", json!(1)),
                attribute("Biome", json!("Tropical")),
            ],
        },
        beneficiaries: vec![
            beneficiary("b-grg", "Grauer's Gorilla Fund", "grg", 25.0, 140, 60),
            beneficiary("b-elg", "Elephant Guardians", "elg", 25.0, 300, 120),
            beneficiary("b-jag", "Jaguar Alliance", "jag", 25.0, 220, 260),
            beneficiary("b-bue", "Bustard Grasslands", "bue", 25.0, 80, 220),
        ],
    }
}

/// Seeds in the bundled snapshot, in catalog order
pub fn fallback_seeds() -> Vec<Seed> {
    vec![seed_one(), seed_two()]
}

/// The snapshot as a catalog response. `success` is false so callers can tell
/// they are looking at bundled data, though they never need to.
pub fn fallback_response() -> GardenDataResponse {
    GardenDataResponse {
        success: false,
        seeds: fallback_seeds(),
        timestamp: Utc::now(),
    }
}

/// A catalog source that always serves the bundled snapshot.
///
/// Useful offline and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

#[async_trait]
impl CatalogSource for FallbackCatalog {
    async fn fetch_catalog(&self) -> CatalogResult<GardenDataResponse> {
        Ok(fallback_response())
    }

    fn describe(&self) -> String {
        format!("fallback snapshot {}", FALLBACK_SNAPSHOT_VERSION)
    }
}
