// SPDX-License-Identifier: MPL-2.0
//! Cover page: round photo, headline and the rotating word.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub title: &'a str,
    pub greeting: &'a str,
    pub word: Option<&'a str>,
    pub photo: Option<&'a Handle>,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let photo: Element<'a, Message> = match ctx.photo {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::COVER_PHOTO))
            .height(Length::Fixed(sizing::COVER_PHOTO))
            .into(),
        None => Text::new(ctx.i18n.tr("cover-photo-missing"))
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary)
            .width(Length::Fixed(sizing::COVER_PHOTO))
            .align_x(Horizontal::Center)
            .into(),
    };
    let photo = Container::new(photo)
        .width(Length::Fixed(sizing::COVER_PHOTO))
        .height(Length::Fixed(sizing::COVER_PHOTO))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::photo_frame(true));

    let headline = Text::new(ctx.title.to_string())
        .size(typography::DISPLAY)
        .color(ctx.colors.title_pink);

    let mut greeting = Row::new().spacing(spacing::XS).align_y(Vertical::Bottom).push(
        Text::new(ctx.greeting.to_string())
            .size(typography::TITLE_MD)
            .color(ctx.colors.accent),
    );
    if let Some(word) = ctx.word {
        greeting = greeting.push(
            Text::new(word.to_string())
                .size(typography::TITLE_MD)
                .color(ctx.colors.title_pink),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(photo)
        .push(headline)
        .push(greeting)
        .into()
}
