// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: header on top, then the control panel beside the image canvas.

use super::Message;
use crate::domain::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{control_panel, header, image_canvas};
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub control_panel: &'a control_panel::State,
    pub canvas: &'a image_canvas::State,
    pub theme_mode: ThemeMode,
    /// Fluent key of a startup warning to show under the header.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let panel = control_panel::view(control_panel::ViewContext {
        i18n: ctx.i18n,
        session: ctx.session,
        state: ctx.control_panel,
    })
    .map(Message::ControlPanel);

    let canvas = image_canvas::view(image_canvas::ViewContext {
        i18n: ctx.i18n,
        session: ctx.session,
        state: ctx.canvas,
    })
    .map(Message::Canvas);

    let body = Row::new()
        .spacing(spacing::XL)
        .push(panel)
        .push(canvas)
        .height(Length::Fill);

    let mut column = Column::new().push(header);
    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).error),
                    }),
            )
            .padding([spacing::XS, spacing::XL]),
        );
    }
    column = column.push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
