// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork images.
//!
//! The catalog references images by an opaque asset name; this module is the
//! rendering-layer side of that contract, resolving the name into an Iced
//! SVG handle. Images are embedded so packaging never has to locate assets
//! on disk.

use iced::widget::svg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct Artwork;

/// Resolves an artwork asset name into an SVG handle.
///
/// Returns `None` for names not present in the embedded set; callers render
/// a blank frame in that case rather than failing.
pub fn artwork_handle(name: &str) -> Option<svg::Handle> {
    Artwork::get(name).map(|file| svg::Handle::from_memory(file.data.into_owned()))
}
