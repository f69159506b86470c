// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every panel.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top bar with the brand red underline.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_panel)),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: 0.0.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card surface used by the control panel and the canvas.
///
/// Slightly translucent so the page tint shows at the edges in both modes.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_panel
        })),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Yellow card holding the explanation.
pub fn note(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NOTE_BACKGROUND)),
        text_color: Some(palette::NOTE_TEXT),
        border: Border {
            color: palette::NOTE_BORDER,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Frame around the generated image.
pub fn image_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_uses_yellow_surface() {
        let style = note(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::NOTE_BACKGROUND))
        );
    }

    #[test]
    fn panel_is_slightly_translucent() {
        let Some(Background::Color(color)) = panel(&Theme::Light).background else {
            panic!("Expected background color");
        };
        assert!((color.a - opacity::SURFACE).abs() < f32::EPSILON);
    }
}
