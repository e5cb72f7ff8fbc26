// SPDX-License-Identifier: MPL-2.0
//! "Our Time Together" page: one running duration counter per start date.

use crate::i18n::fluent::I18n;
use crate::presentation::Elapsed;
use crate::story::Counter;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub title: &'a str,
    pub counters: &'a [Counter],
    pub now: DateTime<Utc>,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = super::title(ctx.title, ctx.colors.title_blue);

    ctx.counters
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::XL)
                .align_x(Horizontal::Center)
                .width(Length::Fixed(sizing::CONTENT_WIDTH))
                .push(heading),
            |column, counter| column.push(counter_card(&ctx, counter)),
        )
        .into()
}

fn counter_card<'a, Message: 'a>(ctx: &ViewContext<'a>, counter: &'a Counter) -> Element<'a, Message> {
    let elapsed = Elapsed::since(counter.since, ctx.now);

    let units = [
        (elapsed.days, "time-together-units-days"),
        (u64::from(elapsed.hours), "time-together-units-hours"),
        (u64::from(elapsed.minutes), "time-together-units-minutes"),
        (u64::from(elapsed.seconds), "time-together-units-seconds"),
    ];
    let values = units.iter().fold(
        Row::new().spacing(spacing::LG),
        |row, (value, key)| {
            row.push(
                Column::new()
                    .align_x(Horizontal::Center)
                    .width(Length::Fill)
                    .push(
                        Text::new(value.to_string())
                            .size(typography::TITLE_MD)
                            .color(ctx.colors.title_pink),
                    )
                    .push(
                        Text::new(ctx.i18n.tr(key))
                            .size(typography::CAPTION)
                            .color(ctx.colors.text_secondary),
                    ),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(counter.label.as_str())
                .size(typography::TITLE_SM)
                .color(ctx.colors.accent),
        )
        .push(values);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;
    use chrono::TimeZone;

    #[test]
    fn counters_render_for_built_in_story() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let story = Story::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            title: "Our Time Together",
            counters: &story.counters,
            now,
        });
    }
}
