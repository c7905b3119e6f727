//! # Catalog Module
//!
//! Fetching and resolving seeds from the garden catalog.
//!
//! ## Architecture
//!
//! ```text
//!   Garden (client handle)
//!      │  fetch_garden_data / fetch_seed_by_id / find_beneficiary_by_slug
//!      ↓
//!   Arc<dyn CatalogSource> ── CatalogFetcher (HTTP)  ─┐
//!                          └─ FallbackCatalog         │ any error
//!                                                     ↓
//!                                         fallback_response()
//! ```
//!
//! Sources report failures as `CatalogError`; `Garden` is the single place
//! where a failure turns into the fallback snapshot.

pub mod fallback;
pub mod fetcher;
pub mod garden;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

use crate::error::CatalogResult;
use crate::models::GardenDataResponse;
use async_trait::async_trait;

pub use fallback::{fallback_response, fallback_seeds, FallbackCatalog, FALLBACK_SNAPSHOT_VERSION};
pub use fetcher::CatalogFetcher;
pub use garden::Garden;
pub use resolver::{BeneficiaryResolver, SeedLookup};

/// Something that can produce a full seed catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole catalog. One attempt per call, no caching.
    async fn fetch_catalog(&self) -> CatalogResult<GardenDataResponse>;

    /// Short human-readable description for logs
    fn describe(&self) -> String {
        "catalog source".to_string()
    }
}
