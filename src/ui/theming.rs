// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::story::PageKind;
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Card surfaces laid over the page background
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Headings
    pub title_pink: Color,
    pub title_blue: Color,
    pub accent: Color,

    pub warning: Color,

    // Page backgrounds, as a gradient from `start` to `end`
    pub cover: (Color, Color),
    pub journey: (Color, Color),
    pub time_together: (Color, Color),
    pub gallery: (Color, Color),
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,

            title_pink: palette::PINK_600,
            title_blue: palette::PRIMARY_600,
            accent: palette::PURPLE_700,

            warning: palette::WARNING_500,

            cover: (palette::ROSE_200, palette::PURPLE_200),
            journey: (palette::BLUE_200, palette::PURPLE_200),
            time_together: (palette::PINK_200, palette::PURPLE_200),
            gallery: (palette::YELLOW_200, palette::PINK_200),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            title_pink: palette::PINK_400,
            title_blue: palette::PRIMARY_400,
            accent: palette::PURPLE_300,

            warning: palette::WARNING_500,

            cover: (palette::ROSE_950, palette::PURPLE_950),
            journey: (palette::BLUE_950, palette::PURPLE_950),
            time_together: (palette::ROSE_950, palette::PURPLE_950),
            gallery: (palette::AMBER_950, palette::ROSE_950),
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Background gradient of a page.
    #[must_use]
    pub fn page_background(&self, kind: PageKind) -> (Color, Color) {
        match kind {
            PageKind::Cover => self.cover,
            PageKind::Journey => self.journey,
            PageKind::TimeTogether => self.time_together,
            PageKind::Gallery => self.gallery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light pages suit the content best, so detection errors fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_backgrounds() {
        let scheme = ColorScheme::light();
        let (start, end) = scheme.page_background(PageKind::Cover);
        assert!(start.r > 0.8 && end.r > 0.8);
    }

    #[test]
    fn dark_theme_has_dark_backgrounds() {
        let scheme = ColorScheme::dark();
        for kind in [
            PageKind::Cover,
            PageKind::Journey,
            PageKind::TimeTogether,
            PageKind::Gallery,
        ] {
            let (start, _) = scheme.page_background(kind);
            assert!(start.r < 0.35 && start.g < 0.35);
        }
    }

    #[test]
    fn every_page_has_its_own_tint_in_light_mode() {
        let scheme = ColorScheme::light();
        assert_ne!(
            scheme.page_background(PageKind::Cover),
            scheme.page_background(PageKind::Gallery)
        );
        assert_ne!(
            scheme.page_background(PageKind::Journey),
            scheme.page_background(PageKind::TimeTogether)
        );
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), iced::Theme::Dark);
    }
}
