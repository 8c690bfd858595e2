// SPDX-License-Identifier: MPL-2.0
//! Image CDN URLs for content store assets.
//!
//! Asset references look like `image-<assetId>-<width>x<height>-<format>`.
//! The CDN serves them at
//! `https://cdn.sanity.io/images/<project>/<dataset>/<assetId>-<w>x<h>.<format>`
//! and crops to the requested size through query parameters.

use super::ImageRef;
use crate::config::{ContentConfig, CARD_IMAGE_HEIGHT, CARD_IMAGE_WIDTH};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Parsed form of an asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AssetId<'a> {
    id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

fn parse_reference(reference: &str) -> Option<AssetId<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;
    let (width, height) = dimensions.split_once('x')?;
    let width = width.parse().ok()?;
    let height = height.parse().ok()?;
    if id.is_empty() || format.is_empty() {
        return None;
    }
    Some(AssetId {
        id,
        width,
        height,
        format,
    })
}

/// Builds sized CDN URLs for one project and dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    #[must_use]
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Builder for the configured project, if there is one.
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Option<Self> {
        let project = config.project_id.as_deref()?.trim();
        if project.is_empty() {
            return None;
        }
        Some(Self::new(project, config.dataset.clone()))
    }

    /// URL of `image` cropped to `width` by `height`.
    ///
    /// Returns `None` for references that are not image assets.
    #[must_use]
    pub fn url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        let asset = parse_reference(&image.asset.reference)?;
        Some(format!(
            "{CDN_BASE}/{project}/{dataset}/{id}-{w}x{h}.{format}?w={width}&h={height}&fit=crop",
            project = self.project_id,
            dataset = self.dataset,
            id = asset.id,
            w = asset.width,
            h = asset.height,
            format = asset.format,
        ))
    }

    /// URL at the portfolio card size.
    #[must_use]
    pub fn card_url(&self, image: &ImageRef) -> Option<String> {
        self.url(image, CARD_IMAGE_WIDTH, CARD_IMAGE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AssetRef;

    fn image(reference: &str) -> ImageRef {
        ImageRef {
            asset: AssetRef {
                reference: reference.to_string(),
            },
        }
    }

    #[test]
    fn card_url_points_at_cdn_with_crop() {
        let builder = ImageUrlBuilder::new("abc123", "production");
        assert_eq!(
            builder
                .card_url(&image("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg"))
                .as_deref(),
            Some(
                "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=600&h=400&fit=crop"
            )
        );
    }

    #[test]
    fn malformed_references_yield_none() {
        let builder = ImageUrlBuilder::new("abc123", "production");
        for reference in [
            "",
            "file-abc-pdf",
            "image-abc-jpg",
            "image-abc-20x-jpg",
            "image--20x30-jpg",
            "image-abc-20x30-",
        ] {
            assert_eq!(builder.card_url(&image(reference)), None, "{reference}");
        }
    }

    #[test]
    fn from_config_needs_project_id() {
        assert!(ImageUrlBuilder::from_config(&ContentConfig::default()).is_none());

        let config = ContentConfig {
            project_id: Some("abc123".into()),
            dataset: "staging".into(),
            ..ContentConfig::default()
        };
        assert_eq!(
            ImageUrlBuilder::from_config(&config),
            Some(ImageUrlBuilder::new("abc123", "staging"))
        );
    }
}
