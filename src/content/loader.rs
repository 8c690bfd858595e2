// SPDX-License-Identifier: MPL-2.0
//! One-shot photo loading with a sample fallback.

use super::fallback::sample_photos;
use super::{ContentSource, Photo};
use crate::error::ContentError;
use std::collections::HashSet;

/// Runs the photo query once and swallows any failure.
///
/// Errors are logged and turned into an empty list; the caller decides what
/// to show instead.
pub async fn load_photos<S: ContentSource>(source: &S) -> Vec<Photo> {
    match source.fetch_photos().await {
        Ok(photos) => {
            tracing::info!(count = photos.len(), "loaded photos from content store");
            photos
        }
        Err(err @ ContentError::NotConfigured) => {
            tracing::debug!(
                reason = err.i18n_key(),
                "content store not configured, using sample photos"
            );
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(
                reason = err.i18n_key(),
                error = %err,
                "failed to fetch photos"
            );
            Vec::new()
        }
    }
}

/// Where the displayed photos came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

/// The list of photos the portfolio renders, one card each.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoList {
    photos: Vec<Photo>,
    origin: Origin,
}

impl PhotoList {
    /// Uses `fetched` when it has anything in it, the samples otherwise.
    ///
    /// Repeated ids in `fetched` keep their first occurrence only.
    #[must_use]
    pub fn select(fetched: Vec<Photo>) -> Self {
        if fetched.is_empty() {
            return Self {
                photos: sample_photos(),
                origin: Origin::Fallback,
            };
        }

        let mut seen = HashSet::with_capacity(fetched.len());
        let before = fetched.len();
        let photos: Vec<Photo> = fetched
            .into_iter()
            .filter(|photo| seen.insert(photo.id.clone()))
            .collect();
        if photos.len() < before {
            tracing::warn!(
                dropped = before - photos.len(),
                "dropped photos with duplicate ids"
            );
        }

        Self {
            photos,
            origin: Origin::Remote,
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource(Result<Vec<Photo>, ContentError>);

    impl ContentSource for StubSource {
        async fn fetch_photos(&self) -> Result<Vec<Photo>, ContentError> {
            self.0.clone()
        }
    }

    fn photo(id: &str, title: &str) -> Photo {
        Photo {
            id: id.to_string(),
            title: title.to_string(),
            image: None,
            description: String::new(),
            location: None,
            camera: None,
            settings: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn failures_become_an_empty_list() {
        for err in [
            ContentError::NotConfigured,
            ContentError::Http("connection reset".into()),
            ContentError::Status(500),
            ContentError::Decode("expected value".into()),
        ] {
            assert!(load_photos(&StubSource(Err(err))).await.is_empty());
        }
    }

    #[tokio::test]
    async fn successful_fetch_is_returned_verbatim() {
        let photos = vec![photo("a", "Reef"), photo("b", "Dunes")];
        let loaded = load_photos(&StubSource(Ok(photos.clone()))).await;
        assert_eq!(loaded, photos);
    }

    #[test]
    fn empty_fetch_selects_samples() {
        let list = PhotoList::select(Vec::new());
        assert_eq!(list.origin(), Origin::Fallback);
        assert_eq!(list.len(), 6);
        assert_eq!(list.photos()[0].title, "Sunset Over Mountains");
    }

    #[test]
    fn non_empty_fetch_is_never_merged_with_samples() {
        let list = PhotoList::select(vec![photo("a", "Reef")]);
        assert_eq!(list.origin(), Origin::Remote);
        assert_eq!(list.len(), 1);
        assert_eq!(list.photos()[0].title, "Reef");
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let list = PhotoList::select(vec![
            photo("a", "First"),
            photo("b", "Other"),
            photo("a", "Second"),
        ]);
        let titles: Vec<&str> = list.photos().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Other"]);
    }
}
