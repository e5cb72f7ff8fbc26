// SPDX-License-Identifier: MPL-2.0
//! One view per page kind.
//!
//! Pages are display-only: they take their data through a `ViewContext` and
//! emit no messages of their own, so they are generic over the caller's
//! message type.

pub mod cover;
pub mod gallery;
pub mod journey;
pub mod time_together;

use crate::ui::design_tokens::typography;
use iced::widget::Text;
use iced::Color;

/// Page heading shared by all pages.
fn title<'a>(label: &str, color: Color) -> Text<'a> {
    Text::new(label.to_string())
        .size(typography::TITLE_LG)
        .color(color)
}
