// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: framed artwork, attribution plaque, and navigation.
//!
//! Reads the displayed record from the navigator and resolves its opaque
//! handles: attribution keys through Fluent, the image name through the
//! embedded asset set. Never mutates navigation state — button presses
//! bubble up as [`Message`] for the application update loop.

use crate::assets;
use crate::i18n::fluent::I18n;
use crate::navigation::GalleryNavigator;
use crate::ui::controls;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{svg, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a GalleryNavigator,
    pub is_dark_theme: bool,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
}

/// Render the gallery screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let artwork = ctx.navigator.current();

    let wall = Container::new(view_framed_artwork(&artwork.image))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG);

    let attribution = view_attribution(&ctx);

    let position = Text::new(format!(
        "{} / {}",
        ctx.navigator.cursor() + 1,
        ctx.navigator.len()
    ))
    .size(typography::CAPTION);

    let buttons = controls::view(controls::ViewContext { i18n: ctx.i18n }).map(Message::Controls);

    Column::new()
        .push(wall)
        .push(attribution)
        .push(
            Container::new(position)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(buttons)
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The artwork image inside its white mat.
fn view_framed_artwork(image: &str) -> Element<'_, Message> {
    let content: Element<'_, Message> = match assets::artwork_handle(image) {
        Some(handle) => svg::Svg::new(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Unknown asset name: keep the frame, leave the mat blank.
        None => Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    Container::new(content)
        .style(styles::artwork_frame)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Title on one line, artist and year on the next, as on a gallery plaque.
fn view_attribution<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let artwork = ctx.navigator.current();

    let title = Text::new(ctx.i18n.tr(&artwork.title_key)).size(typography::TITLE_LG);

    let artist = Text::new(ctx.i18n.tr(&artwork.artist_key))
        .size(typography::BODY_LG)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::default()
        });
    let year = Text::new(format!(" ({})", ctx.i18n.tr(&artwork.year_key))).size(typography::BODY_LG);

    let byline = Row::new().push(artist).push(year);

    let block = Column::new().push(title).push(byline).spacing(spacing::XS);

    Container::new(block)
        .style(styles::attribution_panel(ctx.is_dark_theme))
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}
