// src/api/http.rs

//! `reqwest`-backed implementation of [`FacultyApi`].

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{FacultyApi, decode_envelope};
use crate::error::Result;
use crate::models::{ApiConfig, FacultyRecord};
use crate::utils::http::create_async_client;

/// HTTP client for the faculty REST endpoints.
pub struct HttpFacultyApi {
    client: Client,
    base_url: String,
}

impl HttpFacultyApi {
    /// Create a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/faculty", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/faculty/{}", self.base_url, id)
    }
}

#[async_trait]
impl FacultyApi for HttpFacultyApi {
    async fn fetch_all(&self) -> Result<Vec<FacultyRecord>> {
        let body = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .text()
            .await?;

        let records = decode_envelope::<Vec<FacultyRecord>>(&body, "Failed to fetch faculty")?;
        Ok(records.unwrap_or_default())
    }

    async fn create(&self, record: &FacultyRecord) -> Result<Option<FacultyRecord>> {
        let body = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?
            .text()
            .await?;

        decode_envelope(&body, "Failed to create faculty member")
    }

    async fn update(&self, id: &str, record: &FacultyRecord) -> Result<Option<FacultyRecord>> {
        let body = self
            .client
            .put(self.record_url(id))
            .json(record)
            .send()
            .await?
            .text()
            .await?;

        decode_envelope(&body, "Failed to update faculty member")
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let body = self
            .client
            .delete(self.record_url(id))
            .send()
            .await?
            .text()
            .await?;

        decode_envelope::<FacultyRecord>(&body, "Failed to delete faculty member")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_are_built_from_base() {
        let config = ApiConfig {
            base_url: "https://example.com/api".to_string(),
            ..ApiConfig::default()
        };
        let api = HttpFacultyApi::new(&config).unwrap();

        assert_eq!(api.collection_url(), "https://example.com/api/faculty");
        assert_eq!(api.record_url("abc"), "https://example.com/api/faculty/abc");
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://example.com/api/".to_string(),
            ..ApiConfig::default()
        };
        let api = HttpFacultyApi::new(&config).unwrap();

        assert_eq!(api.collection_url(), "https://example.com/api/faculty");
    }
}
