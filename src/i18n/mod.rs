// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translations embedded at build time, optionally overridden from a directory
//! - Runtime language switching
//! - Fallback to default locale when translations are missing
//!
//! Photo titles, descriptions and slide captions come from content and are
//! shown as-is; only interface text goes through here.

pub mod fluent;
