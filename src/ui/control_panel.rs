// SPDX-License-Identifier: MPL-2.0
//! Input column: the topic to illustrate and, once an image exists, an edit
//! instruction.
//!
//! The panel never changes the session. It reports what the user typed and
//! which action they asked for, and the application decides.

use crate::domain::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, rule, text, text_editor, text_input, Column, Container, Row, Text,
};
use iced::{alignment::Vertical, Element, Font, Length, Theme};

/// Editor buffer for the multi-line topic input.
#[derive(Debug, Default)]
pub struct State {
    topic: text_editor::Content,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub state: &'a State,
}

/// Messages emitted by the panel widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TopicAction(text_editor::Action),
    EditChanged(String),
    Generate,
    Edit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    TopicChanged(String),
    EditChanged(String),
    GenerateRequested,
    EditRequested,
}

/// Process a panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TopicAction(action) => {
            let is_edit = action.is_edit();
            state.topic.perform(action);
            if is_edit {
                Event::TopicChanged(state.topic.text())
            } else {
                Event::None
            }
        }
        Message::EditChanged(value) => Event::EditChanged(value),
        Message::Generate => Event::GenerateRequested,
        Message::Edit => Event::EditRequested,
    }
}

/// Label key of the generate button.
#[must_use]
pub fn generate_label_key(session: &Session) -> &'static str {
    if session.is_loading() && !session.has_image() {
        "panel-generating-button"
    } else if session.has_image() {
        "panel-regenerate-button"
    } else {
        "panel-generate-button"
    }
}

/// Label key of the edit button.
#[must_use]
pub fn edit_label_key(session: &Session) -> &'static str {
    if session.is_loading() {
        "panel-editing-button"
    } else {
        "panel-edit-button"
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let session = ctx.session;
    let loading = session.is_loading();

    let mut topic = text_editor(&ctx.state.topic)
        .placeholder(ctx.i18n.tr("panel-topic-placeholder"))
        .height(Length::Fixed(sizing::TOPIC_INPUT_HEIGHT))
        .padding(spacing::SM)
        .size(typography::BODY);
    if !loading {
        topic = topic.on_action(Message::TopicAction);
    }

    let generate = action_button(
        icons::sparkles(),
        ctx.i18n.tr(generate_label_key(session)),
        session.can_generate().then_some(Message::Generate),
        styles::button::primary,
    );

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(section_label(ctx.i18n.tr("panel-topic-label")))
        .push(topic)
        .push(generate);

    if session.has_image() {
        let mut instruction =
            text_input(&ctx.i18n.tr("panel-edit-placeholder"), session.edit_text())
                .padding(spacing::SM)
                .size(typography::BODY);
        if !loading {
            instruction = instruction.on_input(Message::EditChanged);
            if session.can_edit() {
                instruction = instruction.on_submit(Message::Edit);
            }
        }

        let edit = action_button(
            icons::pencil(),
            ctx.i18n.tr(edit_label_key(session)),
            session.can_edit().then_some(Message::Edit),
            styles::button::secondary,
        );

        column = column
            .push(rule::horizontal(1))
            .push(section_label(ctx.i18n.tr("panel-edit-label")))
            .push(
                Text::new(ctx.i18n.tr("panel-edit-hint"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).text_muted),
                    }),
            )
            .push(instruction)
            .push(edit);
    }

    Container::new(column)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn section_label<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::BODY_LG).font(Font {
        weight: iced::font::Weight::Semibold,
        ..Font::DEFAULT
    })
}

/// Full-width button with a leading icon. Without a message it is disabled.
fn action_button<'a>(
    icon: iced::widget::Svg<'a>,
    label: String,
    on_press: Option<Message>,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(
            icons::sized(icon, sizing::ICON_SM),
            palette::WHITE,
        ))
        .push(Text::new(label).size(typography::BODY).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }));

    button(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press_maybe(on_press)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Generation, ImageResult};

    fn session_with_image() -> Session {
        let mut session = Session::new();
        session.set_topic_text("Staphylococcus aureus");
        session.begin_generate();
        session.complete(Ok(Generation::new(
            ImageResult::new("image/png", vec![1]),
            None,
        )));
        session
    }

    #[test]
    fn generate_label_follows_session() {
        let mut session = Session::new();
        assert_eq!(generate_label_key(&session), "panel-generate-button");

        session.set_topic_text("topic");
        session.begin_generate();
        assert_eq!(generate_label_key(&session), "panel-generating-button");

        let mut session = session_with_image();
        assert_eq!(generate_label_key(&session), "panel-regenerate-button");

        session.begin_generate();
        assert_eq!(generate_label_key(&session), "panel-regenerate-button");
    }

    #[test]
    fn edit_label_follows_loading() {
        let mut session = session_with_image();
        assert_eq!(edit_label_key(&session), "panel-edit-button");

        session.set_edit_text("add a crown");
        session.begin_edit();
        assert_eq!(edit_label_key(&session), "panel-editing-button");
    }

    #[test]
    fn buttons_map_to_request_events() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::Generate), Event::GenerateRequested);
        assert_eq!(update(&mut state, Message::Edit), Event::EditRequested);
        assert_eq!(
            update(&mut state, Message::EditChanged("crown".into())),
            Event::EditChanged("crown".into())
        );
    }

    #[test]
    fn typing_in_topic_reports_text() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::TopicAction(text_editor::Action::Edit(text_editor::Edit::Insert('a'))),
        );
        assert!(matches!(event, Event::TopicChanged(ref text) if text.starts_with('a')));
        assert!(state.topic.text().starts_with('a'));
    }

    #[test]
    fn cursor_moves_do_not_report() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::TopicAction(text_editor::Action::Move(text_editor::Motion::Right)),
        );
        assert_eq!(event, Event::None);
    }

    #[test]
    fn view_renders_in_every_phase() {
        let i18n = I18n::default();
        let state = State::new();

        let idle = Session::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            session: &idle,
            state: &state,
        });

        let mut editing = session_with_image();
        editing.set_edit_text("crown");
        editing.begin_edit();
        let _ = view(ViewContext {
            i18n: &i18n,
            session: &editing,
            state: &state,
        });
    }
}
