// SPDX-License-Identifier: MPL-2.0
//! Gallery controls: the previous/next button pair.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Row, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigatePrevious,
    NavigateNext,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let previous_button = button(
        Text::new(ctx.i18n.tr("gallery-previous-button"))
            .size(typography::BODY)
            .center(),
    )
    .on_press(Message::NavigatePrevious)
    .style(styles::primary_button)
    .padding([10, 12])
    .width(Length::FillPortion(1));

    let next_button = button(
        Text::new(ctx.i18n.tr("gallery-next-button"))
            .size(typography::BODY)
            .center(),
    )
    .on_press(Message::NavigateNext)
    .style(styles::primary_button)
    .padding([10, 12])
    .width(Length::FillPortion(1));

    Row::new()
        .push(previous_button)
        .push(next_button)
        .spacing(spacing::XL)
        .width(Length::Fill)
        .into()
}
