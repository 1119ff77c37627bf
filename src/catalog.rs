// SPDX-License-Identifier: MPL-2.0
//! The gallery catalog: the fixed, ordered list of artworks on the wall.
//!
//! Records carry opaque handles only — Fluent message keys for the textual
//! attribution and an embedded-asset name for the image. Resolving those
//! handles into displayed content is the rendering layer's job; the catalog
//! and the navigator never interpret them.

use crate::error::{Error, Result};

/// One artwork on the wall: attribution keys plus an image handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    /// Fluent key for the artwork title.
    pub title_key: String,
    /// Fluent key for the artist name.
    pub artist_key: String,
    /// Fluent key for the creation year.
    pub year_key: String,
    /// Embedded-asset name of the artwork image (see [`crate::assets`]).
    pub image: String,
}

impl ArtworkRecord {
    pub fn new(
        title_key: impl Into<String>,
        artist_key: impl Into<String>,
        year_key: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title_key: title_key.into(),
            artist_key: artist_key.into(),
            year_key: year_key.into(),
            image: image.into(),
        }
    }
}

/// An ordered, immutable sequence of artworks.
///
/// The length is fixed at construction and is always at least one; an empty
/// catalog is rejected up front so the navigator never has to reason about
/// a wall with nothing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    /// Builds a catalog from the given records.
    ///
    /// Returns `Error::Catalog` if `records` is empty.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Catalog(
                "a catalog needs at least one artwork".into(),
            ));
        }
        Ok(Self { records })
    }

    /// Returns the record at `index`.
    ///
    /// Indices come from the navigator's cursor, which is always in range;
    /// an out-of-range index is a programming error and panics.
    pub fn get(&self, index: usize) -> &ArtworkRecord {
        &self.records[index]
    }

    /// Number of artworks in the catalog. Always at least one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The three artworks the gallery ships with.
    ///
    /// All attribution strings live in the Fluent translation files; the
    /// images are embedded SVG renditions under `assets/artworks/`.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                ArtworkRecord::new(
                    "artwork-river-landscape-title",
                    "artwork-river-landscape-artist",
                    "artwork-river-landscape-year",
                    "river_landscape.svg",
                ),
                ArtworkRecord::new(
                    "artwork-moonlit-landscape-title",
                    "artwork-moonlit-landscape-artist",
                    "artwork-moonlit-landscape-year",
                    "moonlit_landscape.svg",
                ),
                ArtworkRecord::new(
                    "artwork-ships-in-distress-title",
                    "artwork-ships-in-distress-artist",
                    "artwork-ships-in-distress-year",
                    "ships_in_distress.svg",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> ArtworkRecord {
        ArtworkRecord::new(
            format!("title-{n}"),
            format!("artist-{n}"),
            format!("year-{n}"),
            format!("image-{n}.svg"),
        )
    }

    #[test]
    fn new_rejects_empty_record_list() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn new_accepts_single_record() {
        let catalog = Catalog::new(vec![record(0)]).expect("single record is valid");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn get_returns_record_at_position() {
        let catalog = Catalog::new(vec![record(0), record(1), record(2)]).expect("valid catalog");
        assert_eq!(catalog.get(1).title_key, "title-1");
        assert_eq!(catalog.get(2).image, "image-2.svg");
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let catalog = Catalog::new(vec![record(0)]).expect("valid catalog");
        let _ = catalog.get(1);
    }

    #[test]
    fn builtin_has_three_artworks_in_wall_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).title_key, "artwork-river-landscape-title");
        assert_eq!(catalog.get(1).title_key, "artwork-moonlit-landscape-title");
        assert_eq!(catalog.get(2).title_key, "artwork-ships-in-distress-title");
    }

    #[test]
    fn builtin_records_reference_distinct_images() {
        let catalog = Catalog::builtin();
        let images: Vec<&str> = (0..catalog.len())
            .map(|i| catalog.get(i).image.as_str())
            .collect();
        let mut deduped = images.clone();
        deduped.dedup();
        assert_eq!(images, deduped);
    }
}
