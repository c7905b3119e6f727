//! # Errors
//!
//! Typed failures for catalog fetches. Not-found is never an error here;
//! resolvers return `Option` for that.

use thiserror::Error;

/// Why a live catalog fetch could not be used
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, TLS, or timeout failure
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("catalog body could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body parsed but reported `success: false`
    #[error("catalog endpoint reported an unsuccessful response")]
    Unsuccessful,
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
