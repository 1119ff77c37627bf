// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the gallery screen.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Primary action button (the navigation pair).
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_600, shadow::SM),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// The frame around the displayed artwork: a white mat lifted off the wall.
pub fn artwork_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Muted backdrop behind the title/artist/year block.
///
/// Derived from the theme mode rather than the Iced `Theme` palette so the
/// panel keeps its gallery-plaque look in both modes.
pub fn attribution_panel(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if is_dark {
            palette::ATTRIBUTION_DARK
        } else {
            palette::ATTRIBUTION_LIGHT
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_darkens_when_pressed() {
        let theme = Theme::Light;
        let active = primary_button(&theme, button::Status::Active);
        let pressed = primary_button(&theme, button::Status::Pressed);
        assert_ne!(active.background, pressed.background);
    }

    #[test]
    fn attribution_panel_backdrop_follows_theme_mode() {
        let theme = Theme::Light;
        let light = attribution_panel(false)(&theme);
        let dark = attribution_panel(true)(&theme);
        assert_ne!(light.background, dark.background);
    }
}
