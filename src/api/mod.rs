// src/api/mod.rs

//! REST API boundary for the faculty directory backend.
//!
//! Every endpoint answers with a JSON envelope `{ success, data?, message? }`.
//! The `success` flag is authoritative regardless of the HTTP status code, so
//! response bodies are always decoded through [`decode_envelope`].

pub mod http;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::models::FacultyRecord;

// Re-export for convenience
pub use http::HttpFacultyApi;

/// Wire envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded server-side
    pub success: bool,

    /// Operation payload, shape depends on the endpoint
    #[serde(default)]
    pub data: Option<T>,

    /// Human-readable message, usually present on failure
    #[serde(default)]
    pub message: Option<String>,
}

/// Decode a response body, honoring the `success` flag.
///
/// A `success: false` envelope surfaces the server's `message`. A body that
/// does not parse as the envelope at all is treated the same way, with the
/// per-operation fallback message.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: &str,
    fallback: &str,
) -> Result<Option<T>> {
    let envelope: ApiResponse<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => return Err(AppError::api(fallback)),
    };

    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(AppError::api(
            envelope.message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

/// Server operations on faculty records.
#[async_trait]
pub trait FacultyApi: Send + Sync {
    /// Fetch the full directory listing.
    async fn fetch_all(&self) -> Result<Vec<FacultyRecord>>;

    /// Create a new record. The body carries no identifier; the server
    /// assigns one and may echo the stored record back.
    async fn create(&self, record: &FacultyRecord) -> Result<Option<FacultyRecord>>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: &str, record: &FacultyRecord) -> Result<Option<FacultyRecord>>;

    /// Delete the record stored under `id`.
    async fn remove(&self, id: &str) -> Result<()>;
}
