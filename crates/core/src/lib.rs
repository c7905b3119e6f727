//! # Garden Core
//!
//! Client-side resolution layer between the garden catalog endpoint and the
//! front end. Turns an unstable remote list of seeds (with embedded
//! beneficiaries) into stable view models, and degrades to a bundled
//! snapshot whenever the remote is unavailable.
//!
//! ## Architecture
//!
//! - `assets/` - Static tables: beneficiary index → emblem code, code → artwork, default locations
//! - `catalog/` - Catalog sources, fallback snapshot, the `Garden` client handle and the beneficiary scan
//! - `ecosystem/` - `EcosystemProject` mapping and canonical ecosystem URLs
//! - `models/` - Wire and view types
//! - `config/` - Endpoint, transport timeout and candidate-seed policy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use garden_core::{Garden, GardenConfig};
//! use garden_core::ecosystem::{ecosystem_url_for, to_ecosystem_project};
//!
//! let garden = Garden::from_config(&GardenConfig::from_env())?;
//! if let Some(found) = garden.find_beneficiary_by_slug("grg").await {
//!     let project = to_ecosystem_project(&found.beneficiary, &found.seed);
//!     let url = ecosystem_url_for(&found.seed, &found.beneficiary, None);
//! }
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod ecosystem;
pub mod error;
pub mod models;

pub use catalog::{CatalogFetcher, CatalogSource, FallbackCatalog, Garden};
pub use config::{CandidateSeeds, GardenConfig};
pub use error::CatalogError;
pub use models::{
    Beneficiary, BeneficiaryMatch, EcosystemProject, GardenDataResponse, Seed, SeedMetadata,
};
