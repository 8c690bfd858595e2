// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: photo records and where they come from.
//!
//! Photos are read from a headless content store with a single best-effort
//! query ([`client::SanityClient`]). When the query fails or returns nothing
//! the portfolio shows a fixed set of sample photos instead
//! ([`fallback::sample_photos`]); the two lists are never merged.

pub mod client;
pub mod fallback;
pub mod image_url;
pub mod loader;

use crate::error::ContentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::future::Future;

pub use client::SanityClient;
pub use image_url::ImageUrlBuilder;
pub use loader::{load_photos, Origin, PhotoList};

/// Exposure settings printed under a photo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub aperture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shutter: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iso: String,
    #[serde(deserialize_with = "null_as_default")]
    pub focal: String,
}

impl CaptureSettings {
    #[must_use]
    pub fn new(aperture: &str, shutter: &str, iso: &str, focal: &str) -> Self {
        Self {
            aperture: aperture.to_string(),
            shutter: shutter.to_string(),
            iso: iso.to_string(),
            focal: focal.to_string(),
        }
    }
}

/// Reference to an image asset held by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub asset: AssetRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    /// Asset id such as `image-<hash>-600x400-jpg`.
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// One portfolio photo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub settings: Option<CaptureSettings>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything able to produce the portfolio photo list.
pub trait ContentSource {
    /// Runs the photo query once. No retry, no timeout beyond the transport's.
    fn fetch_photos(&self) -> impl Future<Output = Result<Vec<Photo>, ContentError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_deserializes_from_store_json() {
        let json = r#"{
            "_id": "a1",
            "title": "Reef",
            "image": { "_type": "image", "asset": { "_ref": "image-abc123-600x400-jpg", "_type": "reference" } },
            "description": "Blue water",
            "location": "Maldives",
            "camera": "Canon EOS R5",
            "settings": { "aperture": "f/11", "shutter": "1/60s", "iso": "400", "focal": "16mm" },
            "tags": ["underwater"],
            "_createdAt": "2024-03-01T10:00:00Z"
        }"#;

        let photo: Photo = serde_json::from_str(json).expect("valid photo json");
        assert_eq!(photo.id, "a1");
        assert_eq!(
            photo.image.map(|i| i.asset.reference).as_deref(),
            Some("image-abc123-600x400-jpg")
        );
        assert_eq!(
            photo.settings,
            Some(CaptureSettings::new("f/11", "1/60s", "400", "16mm"))
        );
        assert!(photo.created_at.is_some());
    }

    #[test]
    fn null_and_missing_fields_fall_back_to_defaults() {
        let json = r#"{ "_id": "b2", "title": null, "image": null, "description": null, "tags": null }"#;

        let photo: Photo = serde_json::from_str(json).expect("sparse photo json");
        assert_eq!(photo.title, "");
        assert!(photo.image.is_none());
        assert!(photo.tags.is_empty());
        assert!(photo.location.is_none());
        assert!(photo.settings.is_none());
        assert!(photo.created_at.is_none());
    }

    #[test]
    fn missing_id_is_rejected() {
        let result: Result<Photo, _> = serde_json::from_str(r#"{ "title": "No id" }"#);
        assert!(result.is_err());
    }
}
