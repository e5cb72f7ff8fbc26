// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for colors, spacing, sizes and shadows used by every page.

## Organization

- **Palette**: Base colors and the per-page background tints
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use story_deck::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.1, 0.14);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.28, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.58);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);

    // Brand colors (blue scale, navigation buttons and counter headings)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.51, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);

    // Accent colors (pink and purple, titles and cover text)
    pub const PINK_600: Color = Color::from_rgb(0.859, 0.153, 0.467);
    pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714);
    pub const PURPLE_700: Color = Color::from_rgb(0.494, 0.133, 0.808);
    pub const PURPLE_300: Color = Color::from_rgb(0.847, 0.706, 0.996);

    // Page backgrounds, light variants
    pub const ROSE_200: Color = Color::from_rgb(0.996, 0.804, 0.827);
    pub const PINK_200: Color = Color::from_rgb(0.984, 0.812, 0.91);
    pub const PURPLE_200: Color = Color::from_rgb(0.914, 0.835, 1.0);
    pub const BLUE_200: Color = Color::from_rgb(0.749, 0.859, 0.996);
    pub const YELLOW_200: Color = Color::from_rgb(0.996, 0.941, 0.541);

    // Page backgrounds, dark variants
    pub const ROSE_950: Color = Color::from_rgb(0.298, 0.02, 0.098);
    pub const PURPLE_950: Color = Color::from_rgb(0.231, 0.027, 0.392);
    pub const BLUE_950: Color = Color::from_rgb(0.09, 0.145, 0.329);
    pub const AMBER_950: Color = Color::from_rgb(0.271, 0.102, 0.012);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Cards laid over the page background.
    pub const SURFACE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const BUTTON_WIDTH: f32 = 132.0;

    /// Page indicator dot.
    pub const DOT: f32 = 14.0;
    pub const DOT_ACTIVE: f32 = 28.0;

    /// Round cover photo.
    pub const COVER_PHOTO: f32 = 176.0;

    pub const CONTENT_WIDTH: f32 = 480.0;
    pub const GALLERY_WIDTH: f32 = 400.0;
    pub const GALLERY_HEIGHT: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale, from the cover headline down to captions.

    /// Cover headline.
    pub const DISPLAY: f32 = 44.0;

    /// Page titles.
    pub const TITLE_LG: f32 = 32.0;

    /// Cover greeting and counter values.
    pub const TITLE_MD: f32 = 26.0;

    /// Counter labels.
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Timeline emoji.
    pub const EMOJI: f32 = 28.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::DOT_ACTIVE > sizing::DOT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
