// SPDX-License-Identifier: MPL-2.0
//! Journey page: the timeline of milestones as a scrollable list of cards.

use crate::i18n::fluent::I18n;
use crate::story::Milestone;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{scrollable, Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub title: &'a str,
    pub timeline: &'a [Milestone],
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = super::title(ctx.title, ctx.colors.title_blue);

    let body: Element<'a, Message> = if ctx.timeline.is_empty() {
        Text::new(ctx.i18n.tr("journey-empty"))
            .size(typography::BODY_LG)
            .color(ctx.colors.text_secondary)
            .into()
    } else {
        let entries = ctx
            .timeline
            .iter()
            .fold(Column::new().spacing(spacing::MD), |column, milestone| {
                column.push(entry(milestone, ctx.colors))
            });
        scrollable(entries).height(Length::Fill).into()
    };

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .push(heading)
        .push(body)
        .into()
}

fn entry<'a, Message: 'a>(milestone: &'a Milestone, colors: &ColorScheme) -> Element<'a, Message> {
    let text = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(milestone.event.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_primary),
        )
        .push(
            Text::new(milestone.date.as_str())
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(milestone.emoji.as_str()).size(typography::EMOJI))
        .push(text);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;

    #[test]
    fn journey_renders_built_in_timeline() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let story = Story::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            title: "Our Journey",
            timeline: &story.timeline,
        });
    }

    #[test]
    fn journey_renders_empty_timeline() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            title: "Our Journey",
            timeline: &[],
        });
    }
}
