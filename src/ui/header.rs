// SPDX-License-Identifier: MPL-2.0
//! Top bar with the brand mark and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, current: ThemeMode) -> Event {
    match message {
        Message::CycleTheme => Event::ThemeModeChanged(current.next()),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Column::new()
        .push(
            Text::new(ctx.i18n.tr("header-title"))
                .size(typography::TITLE_MD)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::DEFAULT
                }),
        )
        .push(
            Text::new(ctx.i18n.tr("header-tagline"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                }),
        );

    let toggle = tooltip(
        button(Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY))
            .on_press(Message::CycleTheme)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost),
        Text::new(ctx.i18n.tr("theme-toggle-tooltip")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::logo(), sizing::ICON_LG))
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XL])
        .style(styles::container::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::Light,
        };
        let _element = view(ctx);
    }

    #[test]
    fn cycle_theme_emits_next_mode() {
        assert_eq!(
            update(Message::CycleTheme, ThemeMode::Dark),
            Event::ThemeModeChanged(ThemeMode::System)
        );
    }
}
