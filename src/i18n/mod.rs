// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. Every user-visible string — including the artwork
//! attributions referenced by the catalog — is a Fluent message, so records
//! carry keys rather than display text.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to the default locale when translations are missing

pub mod fluent;
