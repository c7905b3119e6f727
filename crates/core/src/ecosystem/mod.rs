//! # Ecosystem Module
//!
//! Turns a resolved beneficiary into what the front end renders:
//!
//! - `mapper` - `EcosystemProject` view model, including emblem derivation
//! - `url` - canonical paths for the global and seed-scoped ecosystem routes

pub mod mapper;
pub mod url;

pub use mapper::to_ecosystem_project;
pub use url::{build_ecosystem_url, ecosystem_url_for, slugify, EcosystemUrlParams};
