// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_panel: Color,
    pub surface_input: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_accent: Color,

    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_50,
            surface_panel: palette::WHITE,
            surface_input: palette::WHITE,
            border: palette::GRAY_300,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_500,

            brand_primary: palette::BRAND_RED,
            brand_accent: palette::BRAND_YELLOW,

            error: palette::ERROR_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_panel: palette::GRAY_800,
            surface_input: palette::GRAY_700,
            border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_muted: palette::GRAY_400,

            brand_primary: palette::BRAND_RED,
            brand_accent: palette::BRAND_YELLOW,

            error: palette::ERROR_600,
        }
    }

    /// Picks the scheme for an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
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
            // Light is the fallback when detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Next mode in the header toggle cycle: System, Light, Dark.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// Fluent key naming this mode.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Resolves the mode to a concrete theme. `System` queries the OS, so
    /// callers keep the result instead of resolving on every frame.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_panel.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_page.r < 0.2);
    }

    #[test]
    fn both_themes_share_brand_colors() {
        assert_eq!(
            ColorScheme::light().brand_primary,
            ColorScheme::dark().brand_primary
        );
    }

    #[test]
    fn theme_mode_maps_to_iced_theme() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System depends on the host; only check it does not panic.
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn next_cycles_through_every_mode() {
        let mut mode = ThemeMode::System;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark]);
        assert_eq!(mode.next(), ThemeMode::System);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
    }
}
