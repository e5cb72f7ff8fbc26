// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current page over its background, the navigation controls
//! below it and, when startup produced one, a warning line at the bottom.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::presentation::Session;
use crate::story::{PageKind, Story};
use crate::ui::controls::{self, ViewContext as ControlsViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::pages::{cover, gallery, journey, time_together};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::image::Handle;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub story: &'a Story,
    pub session: &'a Session,
    pub images: &'a [gallery::GalleryImage],
    pub cover_photo: Option<&'a Handle>,
    pub now: DateTime<Utc>,
    /// i18n key of a startup warning (config or story fallback).
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kind = ctx.session.current_kind();
    let cursor = ctx.session.cursor();

    let page = Container::new(view_page(&ctx, kind))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let controls = controls::view(ControlsViewContext {
        i18n: ctx.i18n,
        current_page: cursor.current_page(),
        page_count: cursor.page_count(),
        text_color: ctx.colors.text_secondary,
    })
    .map(Message::Controls);

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(page)
        .push(controls);

    if let Some(key) = ctx.warning {
        column = column.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .color(ctx.colors.warning),
        );
    }

    Container::new(column.padding([spacing::MD, spacing::MD]))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors.page_background(kind)))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, kind: PageKind) -> Element<'a, Message> {
    let title = ctx
        .story
        .page(ctx.session.cursor().current_page())
        .map_or("", |page| page.title.as_str());

    match kind {
        PageKind::Cover => cover::view(cover::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            title,
            greeting: &ctx.story.cover.greeting,
            word: ctx.session.word(),
            photo: ctx.cover_photo,
        }),
        PageKind::Journey => journey::view(journey::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            title,
            timeline: &ctx.story.timeline,
        }),
        PageKind::TimeTogether => time_together::view(time_together::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            title,
            counters: &ctx.story.counters,
            now: ctx.now,
        }),
        PageKind::Gallery => {
            let cursor = ctx.session.cursor();
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                colors: ctx.colors,
                title,
                image: ctx.images.get(cursor.selected_image()),
                moment: cursor.moment_number(),
            })
        }
    }
}
