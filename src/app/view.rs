// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::navigation::GalleryNavigator;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a GalleryNavigator,
    pub is_dark_theme: bool,
}

/// Renders the single gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        navigator: ctx.navigator,
        is_dark_theme: ctx.is_dark_theme,
    })
    .map(Message::Gallery);

    Container::new(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
