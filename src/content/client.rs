// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Sanity content store.
//!
//! The portfolio issues one GROQ query per visit. A missing project id is
//! reported as [`ContentError::NotConfigured`] before any request is built.

use super::{ContentSource, Photo};
use crate::config::ContentConfig;
use crate::error::ContentError;
use serde::Deserialize;

/// Newest photos first, with every field the portfolio card shows.
pub const PHOTOS_QUERY: &str = r#"*[_type == "photo"] | order(_createdAt desc) { _id, title, image, description, location, camera, settings, tags, _createdAt }"#;

const USER_AGENT: &str = concat!("Adventures/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<Photo>>,
}

#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl SanityClient {
    /// Creates a client for the given content settings.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: ContentConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ContentError::Http(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Query endpoint, or `None` when no project id is set.
    #[must_use]
    pub fn endpoint(&self) -> Option<String> {
        endpoint(&self.config)
    }
}

/// Builds the query endpoint for `config`.
#[must_use]
pub fn endpoint(config: &ContentConfig) -> Option<String> {
    let project = config
        .project_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())?;
    let host = if config.use_cdn { "apicdn" } else { "api" };
    let version = config.api_version.trim_start_matches('v');
    Some(format!(
        "https://{project}.{host}.sanity.io/v{version}/data/query/{dataset}",
        dataset = config.dataset
    ))
}

impl ContentSource for SanityClient {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, ContentError> {
        let url = self.endpoint().ok_or(ContentError::NotConfigured)?;
        tracing::debug!(%url, "querying content store");

        let response = self
            .http
            .get(&url)
            .query(&[("query", PHOTOS_QUERY)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.result.unwrap_or_default())
    }
}
