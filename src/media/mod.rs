// SPDX-License-Identifier: MPL-2.0
//! Image loading for slides, the hero and portfolio cards.

pub mod image;
pub mod source;

pub use image::{decode_image, ImageData};
pub use source::{ImageLocation, ImageOutcome, ImageSlot, ImageSource};
