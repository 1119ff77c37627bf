// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens (palette, spacing, typography, shadows).
//!
//! A trimmed token set sized for a single-screen gallery: base colors, the
//! 8px spacing grid, a small type scale, and the shadow used to lift the
//! artwork off the wall.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Muted backdrop behind the attribution panel, light mode.
    pub const ATTRIBUTION_LIGHT: Color = Color::from_rgb(0.92, 0.91, 0.88);
    /// Muted backdrop behind the attribution panel, dark mode.
    pub const ATTRIBUTION_DARK: Color = Color::from_rgb(0.17, 0.17, 0.19);
}

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod typography {
    /// Artwork title on the attribution panel.
    pub const TITLE_LG: f32 = 30.0;

    /// Artist name and year.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - buttons, labels.
    pub const BODY: f32 = 14.0;

    /// Position indicator.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Lifts the framed artwork off the wall.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}
