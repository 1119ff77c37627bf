// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small gallery viewer built with the Iced GUI framework.
//!
//! It displays a fixed wall of artworks with their attribution and lets the
//! user walk the wall in both directions, wrapping around at either end. The
//! navigation core (catalog plus cursor) is framework-agnostic and lives in
//! [`catalog`] and [`navigation`]; everything else is the Iced rendering
//! layer, internationalization with Fluent, and user preference handling.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod navigation;
pub mod ui;
