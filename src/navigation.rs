// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation: a single cursor into the catalog with circular
//! wraparound.
//!
//! This component is the single source of truth for "which artwork is on
//! display". It owns the catalog (read-only) and a cursor that is always a
//! valid index into it; `next`/`previous` are closed over `[0, len)` by
//! construction, so `current()` can never dangle. It carries no Iced types
//! and is testable without any UI loaded.

use crate::catalog::{ArtworkRecord, Catalog};

/// Maintains the cursor into a [`Catalog`] and computes its transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    catalog: Catalog,
    /// Invariant: `cursor < catalog.len()`.
    cursor: usize,
}

impl GalleryNavigator {
    /// Creates a navigator positioned on the first artwork.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, cursor: 0 }
    }

    /// Advances to the next artwork, wrapping around to the first one
    /// when at the end of the wall.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.catalog.len();
    }

    /// Steps back to the previous artwork, wrapping around to the last one
    /// when at the start of the wall.
    pub fn previous(&mut self) {
        self.cursor = if self.cursor > 0 {
            self.cursor - 1
        } else {
            self.catalog.len() - 1
        };
    }

    /// The artwork currently on display.
    pub fn current(&self) -> &ArtworkRecord {
        self.catalog.get(self.cursor)
    }

    /// Zero-based position of the displayed artwork.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of artworks on the wall.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Checks if the displayed artwork is the first one (used for the
    /// position indicator).
    pub fn is_at_first(&self) -> bool {
        self.cursor == 0
    }

    /// Checks if the displayed artwork is the last one.
    pub fn is_at_last(&self) -> bool {
        self.cursor == self.catalog.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArtworkRecord;

    fn catalog_of(n: usize) -> Catalog {
        let records = (0..n)
            .map(|i| {
                ArtworkRecord::new(
                    format!("title-{i}"),
                    format!("artist-{i}"),
                    format!("year-{i}"),
                    format!("image-{i}.svg"),
                )
            })
            .collect();
        Catalog::new(records).expect("non-empty catalog")
    }

    #[test]
    fn new_navigator_starts_on_first_artwork() {
        let nav = GalleryNavigator::new(catalog_of(3));
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.current().title_key, "title-0");
        assert!(nav.is_at_first());
        assert!(!nav.is_at_last());
    }

    #[test]
    fn next_advances_cursor() {
        let mut nav = GalleryNavigator::new(catalog_of(3));
        nav.next();
        assert_eq!(nav.cursor(), 1);
        nav.next();
        assert_eq!(nav.cursor(), 2);
        assert!(nav.is_at_last());
    }

    #[test]
    fn next_wraps_around_to_first() {
        let mut nav = GalleryNavigator::new(catalog_of(3));
        nav.next();
        nav.next();
        assert_eq!(nav.cursor(), 2);
        nav.next();
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn previous_wraps_around_to_last() {
        let mut nav = GalleryNavigator::new(catalog_of(3));
        nav.previous();
        assert_eq!(nav.cursor(), 2);
        assert!(nav.is_at_last());
    }

    #[test]
    fn next_then_previous_restores_cursor() {
        for start in 0..3 {
            let mut nav = GalleryNavigator::new(catalog_of(3));
            for _ in 0..start {
                nav.next();
            }
            assert_eq!(nav.cursor(), start);

            nav.next();
            nav.previous();
            assert_eq!(nav.cursor(), start, "next/previous from {start}");

            nav.previous();
            nav.next();
            assert_eq!(nav.cursor(), start, "previous/next from {start}");
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in [1, 2, 3, 7] {
            let mut nav = GalleryNavigator::new(catalog_of(len));
            nav.next(); // arbitrary starting offset (wraps for len == 1)
            let start = nav.cursor();

            for _ in 0..len {
                nav.next();
            }
            assert_eq!(nav.cursor(), start, "{len} nexts");

            for _ in 0..len {
                nav.previous();
            }
            assert_eq!(nav.cursor(), start, "{len} previouses");
        }
    }

    #[test]
    fn single_artwork_navigation_is_a_no_op() {
        let mut nav = GalleryNavigator::new(catalog_of(1));
        for _ in 0..5 {
            nav.next();
            assert_eq!(nav.cursor(), 0);
            nav.previous();
            assert_eq!(nav.cursor(), 0);
        }
        assert!(nav.is_at_first());
        assert!(nav.is_at_last());
    }

    #[test]
    fn cursor_stays_in_range_under_arbitrary_sequences() {
        for len in [1, 2, 3, 5] {
            let mut nav = GalleryNavigator::new(catalog_of(len));
            // Deterministic mixed walk, long enough to wrap several times.
            for step in 0..100 {
                if step % 3 == 0 {
                    nav.previous();
                } else {
                    nav.next();
                }
                assert!(nav.cursor() < len, "cursor out of range for len {len}");
            }
        }
    }

    #[test]
    fn current_matches_catalog_at_cursor() {
        let catalog = catalog_of(3);
        let mut nav = GalleryNavigator::new(catalog.clone());
        for _ in 0..7 {
            nav.next();
            assert_eq!(nav.current(), catalog.get(nav.cursor()));
            nav.previous();
            nav.previous();
            assert_eq!(nav.current(), catalog.get(nav.cursor()));
        }
    }

    #[test]
    fn builtin_catalog_wraps_both_directions() {
        let mut nav = GalleryNavigator::new(Catalog::builtin());
        assert_eq!(nav.len(), 3);

        nav.previous();
        assert_eq!(nav.cursor(), 2); // backward wraparound from 0
        nav.next();
        assert_eq!(nav.cursor(), 0); // forward wraparound from 2
    }
}
