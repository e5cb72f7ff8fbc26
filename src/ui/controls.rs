// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar: Previous / Next buttons and the page indicator.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Row, Text},
    Color, Element, Length,
};

/// Contextual data needed to render the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_page: usize,
    pub page_count: usize,
    pub text_color: Color,
}

/// Messages emitted by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoToPage(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = button(
        Text::new(format!("‹ {}", ctx.i18n.tr("nav-previous")))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Previous)
    .width(Length::Fixed(sizing::BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let next = button(
        Text::new(format!("{} ›", ctx.i18n.tr("nav-next")))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Next)
    .width(Length::Fixed(sizing::BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let buttons = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(next);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(buttons)
        .push(page_indicator(&ctx))
        .into()
}

fn page_indicator<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let dots = (0..ctx.page_count).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, page| {
            let current = page == ctx.current_page;
            let width = if current {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            row.push(
                button(Text::new(""))
                    .on_press(Message::GoToPage(page))
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0)
                    .style(styles::button::dot(current)),
            )
        },
    );

    let label = Text::new(indicator_label(
        ctx.i18n,
        ctx.current_page,
        ctx.page_count,
    ))
    .size(typography::CAPTION)
    .color(ctx.text_color);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(dots)
        .push(label)
        .into()
}

/// "current / total" with a 1-based current page.
pub fn indicator_label(i18n: &I18n, current_page: usize, page_count: usize) -> String {
    i18n.tr_with_args(
        "page-indicator",
        &[
            ("current", (current_page + 1).into()),
            ("total", page_count.into()),
        ],
    )
}
