// SPDX-License-Identifier: MPL-2.0
//! Resolving image references to decoded images or a placeholder.
//!
//! Every image element asks [`ImageSource::resolve`] exactly once. Any failure
//! along the way (missing file, HTTP error, undecodable bytes) produces
//! [`ImageOutcome::Placeholder`]; nothing is retried.

use super::image::{decode_image, ImageData};
use crate::error::{ContentError, Error, Result};
use std::path::{Path, PathBuf};

/// Where the bytes of an image live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    File(PathBuf),
    Remote(String),
}

impl ImageLocation {
    /// Resolves a slide or page reference.
    ///
    /// `http(s)` URLs stay remote; anything else is a path under `asset_dir`,
    /// with any leading `/` dropped so `/images/a.jpg` lands inside it.
    #[must_use]
    pub fn from_reference(reference: &str, asset_dir: &Path) -> Self {
        if reference.starts_with("https://") || reference.starts_with("http://") {
            return ImageLocation::Remote(reference.to_string());
        }
        let relative = reference.trim_start_matches(['/', '\\']);
        ImageLocation::File(asset_dir.join(relative))
    }
}

/// Result of resolving one image.
#[derive(Debug, Clone)]
pub enum ImageOutcome {
    Ready(ImageData),
    Placeholder,
}

/// Loads images from disk or over HTTP.
#[derive(Debug, Clone, Default)]
pub struct ImageSource {
    http: reqwest::Client,
}

impl ImageSource {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetches and decodes `location`, falling back to a placeholder.
    pub async fn resolve(&self, location: ImageLocation) -> ImageOutcome {
        match self.load(&location).await {
            Ok(data) => ImageOutcome::Ready(data),
            Err(err) => {
                tracing::warn!(?location, error = %err, "image unavailable, using placeholder");
                ImageOutcome::Placeholder
            }
        }
    }

    async fn load(&self, location: &ImageLocation) -> Result<ImageData> {
        let bytes = match location {
            ImageLocation::File(path) => tokio::fs::read(path).await?,
            ImageLocation::Remote(url) => self.download(url).await?,
        };
        tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .map_err(|e| Error::Image(e.to_string()))?
    }

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, ContentError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Display state of one image element.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Pending,
    Ready(ImageData),
    Placeholder,
}

impl ImageSlot {
    /// Records the outcome of the one load attempt.
    ///
    /// Returns `true` if the slot was still pending. A settled slot never
    /// changes again.
    pub fn settle(&mut self, outcome: ImageOutcome) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match outcome {
            ImageOutcome::Ready(data) => ImageSlot::Ready(data),
            ImageOutcome::Placeholder => ImageSlot::Placeholder,
        };
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, ImageSlot::Pending)
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSlot::Placeholder)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            ImageSlot::Ready(data) => Some(data),
            _ => None,
        }
    }
}
