// SPDX-License-Identifier: MPL-2.0
//! Sample photos shown when the content store has nothing to offer.

use super::{CaptureSettings, Photo};

struct Sample {
    title: &'static str,
    description: &'static str,
    location: &'static str,
    camera: &'static str,
    settings: [&'static str; 4],
    tags: [&'static str; 3],
}

const SAMPLES: [Sample; 6] = [
    Sample {
        title: "Sunset Over Mountains",
        description: "A breathtaking sunset captured during my trek in the Himalayas",
        location: "Himalayas, Nepal",
        camera: "Sony A7R IV",
        settings: ["f/8", "1/125s", "100", "85mm"],
        tags: ["landscape", "mountains", "sunset"],
    },
    Sample {
        title: "Underwater Coral Garden",
        description: "Vibrant coral formations in the crystal clear waters of the Maldives",
        location: "Maldives",
        camera: "Canon EOS R5",
        settings: ["f/11", "1/60s", "400", "16mm"],
        tags: ["underwater", "coral", "diving"],
    },
    Sample {
        title: "Desert Dunes at Dawn",
        description: "The rolling sand dunes of Sahara painted in golden morning light",
        location: "Sahara Desert, Morocco",
        camera: "Sony A7R IV",
        settings: ["f/16", "1/250s", "64", "24mm"],
        tags: ["desert", "landscape", "dawn"],
    },
    Sample {
        title: "Tropical Fish Portrait",
        description: "A curious angelfish poses for the camera in the Red Sea",
        location: "Red Sea, Egypt",
        camera: "Canon EOS R5",
        settings: ["f/5.6", "1/125s", "800", "100mm"],
        tags: ["underwater", "fish", "portrait"],
    },
    Sample {
        title: "City Lights from Above",
        description: "The sprawling cityscape captured from a drone at twilight",
        location: "Dubai, UAE",
        camera: "DJI Mavic 3",
        settings: ["f/2.8", "1/60s", "200", "24mm"],
        tags: ["aerial", "city", "night"],
    },
    Sample {
        title: "Forest Waterfall",
        description: "A hidden waterfall deep in the rainforest of Costa Rica",
        location: "Costa Rica",
        camera: "Sony A7R IV",
        settings: ["f/22", "2s", "100", "35mm"],
        tags: ["waterfall", "forest", "nature"],
    },
];

/// The six built-in sample photos, ids `"1"` to `"6"`, none with an image.
#[must_use]
pub fn sample_photos() -> Vec<Photo> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let [aperture, shutter, iso, focal] = sample.settings;
            Photo {
                id: (i + 1).to_string(),
                title: sample.title.to_string(),
                image: None,
                description: sample.description.to_string(),
                location: Some(sample.location.to_string()),
                camera: Some(sample.camera.to_string()),
                settings: Some(CaptureSettings::new(aperture, shutter, iso, focal)),
                tags: sample.tags.iter().map(|t| (*t).to_string()).collect(),
                created_at: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_samples_starting_with_sunset() {
        let photos = sample_photos();
        assert_eq!(photos.len(), 6);
        assert_eq!(photos[0].title, "Sunset Over Mountains");
        assert_eq!(photos[5].title, "Forest Waterfall");
    }

    #[test]
    fn sample_ids_are_unique_and_sequential() {
        let photos = sample_photos();
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 6);
    }

    #[test]
    fn samples_have_no_image_but_full_settings() {
        for photo in sample_photos() {
            assert!(photo.image.is_none());
            assert!(photo.settings.is_some());
            assert_eq!(photo.tags.len(), 3);
        }
    }
}
