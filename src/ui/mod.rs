// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Parallax hero, photo carousel and footer
//! - [`portfolio`] - Photo cards from the content store and a call to action
//! - [`about`] - Application version and license
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Slide selection and scroll tracking, free of widgets
//! - [`navbar`] - Top navigation bar
//! - [`footer`] - Site footer
//! - [`placeholder`] - Inline SVG stand-ins for images that are loading or failed
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod about;
pub mod design_tokens;
pub mod footer;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod placeholder;
pub mod portfolio;
pub mod state;
pub mod styles;
pub mod theming;
