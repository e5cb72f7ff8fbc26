// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

/// Full-window page background: a diagonal gradient between two tints.
pub fn page(colors: (Color, Color)) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (start, end) = colors;
        let gradient = Linear::new(Degrees(135.0))
            .add_stop(0.0, start)
            .add_stop(1.0, end);

        container::Style {
            background: Some(Background::Gradient(gradient.into())),
            ..Default::default()
        }
    }
}

/// Rounded card laid over the page background (timeline entries, counters).
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Frame around the gallery image and the cover photo.
pub fn photo_frame(round: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            radius: if round { radius::FULL } else { radius::XL }.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
