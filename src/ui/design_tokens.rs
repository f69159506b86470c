// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the single source of truth for colors, spacing, sizes and
//! type scale.
//!
//! ```
//! use clara_ai::ui::design_tokens::{palette, spacing};
//!
//! let accent = palette::BRAND_RED;
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6b7280
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #d1d5db
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // #f9fafb

    // Brand colors
    pub const BRAND_RED: Color = Color::from_rgb(0.839, 0.0, 0.110); // #d6001c
    pub const BRAND_RED_DARK: Color = Color::from_rgb(0.690, 0.0, 0.086); // #b00016
    pub const BRAND_YELLOW: Color = Color::from_rgb(1.0, 0.804, 0.0); // #ffcd00

    // Explanation card (yellow-50 / yellow-200 / yellow-900)
    pub const NOTE_BACKGROUND: Color = Color::from_rgb(0.996, 0.988, 0.910);
    pub const NOTE_BORDER: Color = Color::from_rgb(0.996, 0.941, 0.541);
    pub const NOTE_TEXT: Color = Color::from_rgb(0.443, 0.247, 0.071);

    // Semantic colors
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149); // #dc2626
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SPINNER_TRACK: f32 = 0.25;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
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
    pub const ICON_SM: f32 = 20.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 36.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const TOPIC_INPUT_HEIGHT: f32 = 192.0;

    /// Width of the control panel column.
    pub const PANEL_WIDTH: f32 = 360.0;
    /// Widest the image and explanation are allowed to grow.
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
    /// Error card width.
    pub const MESSAGE_MAX_WIDTH: f32 = 500.0;
    /// Empty-state blurb width.
    pub const BLURB_MAX_WIDTH: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name and empty-state heading
    pub const TITLE_LG: f32 = 24.0;

    /// Header name, error heading
    pub const TITLE_MD: f32 = 20.0;

    /// Explanation title, loading title
    pub const TITLE_SM: f32 = 18.0;

    /// Section labels
    pub const BODY_LG: f32 = 16.0;

    /// Inputs, bullet points
    pub const BODY: f32 = 14.0;

    /// Hints and tagline
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.08);

    pub const NONE: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
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
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SPINNER_TRACK > 0.0 && opacity::SPINNER_TRACK < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn text_blocks_fit_inside_content_column() {
        assert!(sizing::MESSAGE_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
        assert!(sizing::BLURB_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn brand_red_is_mostly_red() {
        assert!(palette::BRAND_RED.r > palette::BRAND_RED.g);
        assert!(palette::BRAND_RED.r > palette::BRAND_RED.b);
    }
}
