// SPDX-License-Identifier: MPL-2.0
//! Photo selection for the portfolio: remote list or samples, never both.

use adventures::content::{
    load_photos, ContentSource, ImageUrlBuilder, Origin, Photo, PhotoList,
};
use adventures::error::ContentError;

struct FixedSource(Result<Vec<Photo>, ContentError>);

impl ContentSource for FixedSource {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, ContentError> {
        self.0.clone()
    }
}

const STORE_RESPONSE: &str = r#"[
    {
        "_id": "p1",
        "_createdAt": "2024-03-01T10:00:00Z",
        "title": "Manta Ray Ballet",
        "image": { "asset": { "_ref": "image-f00dbabe-1600x1067-jpg" } },
        "description": "Mantas circling a cleaning station",
        "location": "Komodo, Indonesia",
        "camera": "Canon EOS R5",
        "settings": { "aperture": "f/8", "shutter": "1/200s", "iso": "640", "focal": "15mm" },
        "tags": ["underwater", "mantas"]
    },
    {
        "_id": "p2",
        "_createdAt": "2024-02-11T08:30:00Z",
        "title": "Glacier Tongue",
        "image": null,
        "description": null,
        "location": null,
        "camera": null,
        "settings": null,
        "tags": null
    }
]"#;

fn store_photos() -> Vec<Photo> {
    serde_json::from_str(STORE_RESPONSE).expect("valid store response")
}

#[tokio::test]
async fn store_photos_are_shown_as_returned() {
    let fetched = load_photos(&FixedSource(Ok(store_photos()))).await;
    let list = PhotoList::select(fetched);

    assert_eq!(list.origin(), Origin::Remote);
    let titles: Vec<_> = list.photos().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Manta Ray Ballet", "Glacier Tongue"]);
    assert!(list.photos().iter().all(|p| !p.title.starts_with("Sunset")));
}

#[tokio::test]
async fn every_failure_kind_falls_back_to_the_six_samples() {
    let failures = [
        ContentError::NotConfigured,
        ContentError::Http("connection reset".into()),
        ContentError::Status(503),
        ContentError::Decode("expected array".into()),
    ];

    for failure in failures {
        let fetched = load_photos(&FixedSource(Err(failure.clone()))).await;
        let list = PhotoList::select(fetched);

        assert_eq!(list.origin(), Origin::Fallback, "{failure}");
        assert_eq!(list.len(), 6);
        assert_eq!(list.photos()[0].title, "Sunset Over Mountains");
    }
}

#[tokio::test]
async fn empty_answer_falls_back_to_samples() {
    let fetched = load_photos(&FixedSource(Ok(Vec::new()))).await;
    assert_eq!(PhotoList::select(fetched).origin(), Origin::Fallback);
}

#[test]
fn null_fields_become_empty_values() {
    let photos = store_photos();
    let glacier = &photos[1];

    assert!(glacier.image.is_none());
    assert!(glacier.description.is_empty());
    assert!(glacier.settings.is_none());
    assert!(glacier.tags.is_empty());
    assert!(glacier.created_at.is_some());
}

#[test]
fn card_urls_point_at_the_cropped_cdn_image() {
    let photos = store_photos();
    let urls = ImageUrlBuilder::new("abc123", "production");
    let image = photos[0].image.as_ref().expect("image");

    assert_eq!(
        urls.card_url(image).as_deref(),
        Some("https://cdn.sanity.io/images/abc123/production/f00dbabe-1600x1067.jpg?w=600&h=400&fit=crop")
    );
}
