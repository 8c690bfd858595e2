// SPDX-License-Identifier: MPL-2.0
//! `adventures` is a photography and adventure blog front end built with the
//! Iced GUI framework.
//!
//! It shows a parallax hero and an auto-advancing photo carousel on the home
//! screen, and a portfolio of photo cards read from a headless content store,
//! with sample photos when the store is unavailable.

#![doc(html_root_url = "https://docs.rs/adventures/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod telemetry;
pub mod ui;
