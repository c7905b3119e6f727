//! # Catalog Fetcher
//!
//! HTTP source for the garden catalog. Issues exactly one GET per call and
//! keeps no cache; two concurrent callers make two round trips.

use super::CatalogSource;
use crate::config::GardenConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::GardenDataResponse;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// Fetches the live catalog from the configured endpoint
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogFetcher {
    /// Build a fetcher with its own HTTP client from config
    pub fn new(config: &GardenConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    /// Reuse an existing client (shares its connection pool)
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogFetcher {
    async fn fetch_catalog(&self) -> CatalogResult<GardenDataResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let data: GardenDataResponse = serde_json::from_slice(&body)?;

        if !data.success {
            return Err(CatalogError::Unsuccessful);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            seeds = data.seeds.len(),
            "Fetched garden catalog"
        );

        Ok(data)
    }

    fn describe(&self) -> String {
        format!("catalog endpoint {}", self.endpoint)
    }
}
