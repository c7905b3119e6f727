//! Throwaway HTTP endpoints and catalog doubles for tests.

use super::CatalogSource;
use crate::error::{CatalogError, CatalogResult};
use crate::models::GardenDataResponse;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Answer exactly one request with a canned response, then close
pub async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/api/garden-data", addr)
}

/// Accept a connection and never answer
pub async fn hanging_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            let _held = socket;
            std::future::pending::<()>().await;
        }
    });

    format!("http://{}/api/garden-data", addr)
}

/// An address nothing is listening on
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/garden-data", addr)
}

/// Serves a fixed catalog and counts calls
pub struct StaticCatalog {
    response: GardenDataResponse,
    calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(response: GardenDataResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_catalog(&self) -> CatalogResult<GardenDataResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Always fails as if the endpoint were down
pub struct BrokenCatalog;

#[async_trait]
impl CatalogSource for BrokenCatalog {
    async fn fetch_catalog(&self) -> CatalogResult<GardenDataResponse> {
        Err(CatalogError::Status { status: 502 })
    }
}
