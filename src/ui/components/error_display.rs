// SPDX-License-Identifier: MPL-2.0
//! Error card with consistent styling.
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title(i18n.tr("canvas-error-title"))
//!     .message(error.message())
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

const ACCENT: Color = palette::ERROR_600;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorDisplay {
    title: Option<String>,
    message: Option<String>,
}

impl ErrorDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading shown in the error color.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body text, shown verbatim.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent = ACCENT;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(icons::tinted(
                icons::sized(icons::warning(), sizing::ICON_XL),
                accent,
            ));

        if let Some(title) = self.title {
            content = content.push(
                Text::new(title)
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::MESSAGE_MAX_WIDTH)
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
                let extended = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(extended.background.weak.color)),
                    border: iced::Border {
                        color: Color { a: 0.5, ..accent },
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_fields() {
        let display = ErrorDisplay::new()
            .title("An Error Occurred")
            .message("quota exceeded");

        assert_eq!(display.title.as_deref(), Some("An Error Occurred"));
        assert_eq!(display.message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn view_builds_without_title() {
        let _element: Element<'_, ()> = ErrorDisplay::new().message("boom").view();
    }
}
