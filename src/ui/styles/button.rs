// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (generate, apply edit).
///
/// A button without an `on_press` handler is reported as
/// [`button::Status::Disabled`] and rendered grayed out.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_RED)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_RED_DARK,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_RED_DARK)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_RED_DARK,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::LG,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Secondary action button (apply edit), dark gray in both modes.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active | button::Status::Pressed => palette::GRAY_800,
        button::Status::Hovered => palette::GRAY_900,
        button::Status::Disabled => return disabled(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::GRAY_900,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Borderless button for header controls.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(extended.background.weak.color))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive button.
pub fn disabled(theme: &Theme) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_300
        })),
        text_color: palette::GRAY_500,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
