// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files embedded at compile time via `include_bytes!` and
//! their handles are cached in a `OnceLock`, so each file is parsed once.
//! Line icons are drawn in black and recolored through [`tinted`].
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let label = row![icons::tinted(icons::sparkles(), palette::WHITE), text("Go")];
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function returning an [`Svg`] backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    sparkles,
    "sparkles.svg",
    "Two four-pointed stars: starts a generation."
);
define_icon!(pencil, "pencil.svg", "Pencil: applies an edit.");
define_icon!(
    warning,
    "warning.svg",
    "Triangle with exclamation mark: error state."
);
define_icon!(
    key,
    "key.svg",
    "Key: marks the explanation of the mnemonic."
);
define_icon!(photo, "photo.svg", "Framed landscape: empty canvas.");
define_icon!(logo, "logo.svg", "Application logo, already colored.");

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors a line icon.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
