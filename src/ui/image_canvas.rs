// SPDX-License-Identifier: MPL-2.0
//! Result area: shows exactly one of loading, error, result or empty.
//!
//! The canvas owns the cosmetic loading state (rotating message and spinner
//! angle). [`State::sync`] creates it when the session starts loading and
//! drops it when loading ends, and [`State::subscription`] only yields
//! timers while it exists.

use crate::app::config::defaults::{SPINNER_FRAME_MS, SPINNER_STEP_RADIANS};
use crate::domain::explanation::{self, Explanation};
use crate::domain::{ImageResult, Session, SessionError};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::ErrorDisplay;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{Epoch, LoadingTicker, LOADING_MESSAGE_KEYS};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::Loader;
use iced::widget::image::{self, Handle};
use iced::widget::{scrollable, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Font, Length, Subscription, Theme};
use std::time::Duration;

/// Messages produced by the canvas timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Advance the rotating message of the given loading phase.
    Tick(Epoch),
    /// Advance the spinner of the given loading phase.
    SpinnerFrame(Epoch),
}

/// Decoded display data for the current image, keyed by session revision.
#[derive(Debug, Clone)]
struct ImageCache {
    revision: u64,
    handle: Option<Handle>,
    explanation: Option<Explanation>,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    ticker: Option<LoadingTicker>,
    next_epoch: Epoch,
    spinner_angle: f32,
    cache: Option<ImageCache>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligns the cosmetic state with the session.
    ///
    /// Must be called after every session transition.
    pub fn sync(&mut self, session: &Session) {
        match (session.is_loading(), self.ticker.is_some()) {
            (true, false) => {
                let epoch = self.next_epoch;
                self.next_epoch = self.next_epoch.wrapping_add(1);
                self.ticker = Some(LoadingTicker::with_default_messages(epoch));
                self.spinner_angle = 0.0;
                tracing::debug!(epoch, "loading ticker started");
            }
            (false, true) => {
                self.ticker = None;
                tracing::debug!("loading ticker stopped");
            }
            _ => {}
        }

        let revision = session.image_revision();
        let stale = self
            .cache
            .as_ref()
            .is_none_or(|cache| cache.revision != revision);
        if stale {
            self.cache = session.image().map(|image| ImageCache {
                revision,
                handle: decode_handle(image),
                explanation: explanation::render(session.explanation()),
            });
        }
    }

    #[must_use]
    pub fn ticker(&self) -> Option<&LoadingTicker> {
        self.ticker.as_ref()
    }

    #[must_use]
    pub fn spinner_angle(&self) -> f32 {
        self.spinner_angle
    }

    /// Timers for the current loading phase, or none.
    pub fn subscription(&self, ticker_period: Duration) -> Subscription<Message> {
        let Some(ticker) = &self.ticker else {
            return Subscription::none();
        };
        let epoch = ticker.epoch();

        Subscription::batch([
            iced::time::every(ticker_period)
                .with(epoch)
                .map(|(epoch, _)| Message::Tick(epoch)),
            iced::time::every(Duration::from_millis(SPINNER_FRAME_MS))
                .with(epoch)
                .map(|(epoch, _)| Message::SpinnerFrame(epoch)),
        ])
    }
}

fn decode_handle(image: &ImageResult) -> Option<Handle> {
    (!image.is_empty()).then(|| Handle::from_bytes(image.bytes().to_vec()))
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Tick(epoch) => {
            let advanced = state
                .ticker
                .as_mut()
                .is_some_and(|ticker| ticker.tick(epoch));
            if !advanced {
                tracing::trace!(epoch, "ignoring stale loading tick");
            }
        }
        Message::SpinnerFrame(epoch) => {
            if state.ticker.is_some_and(|ticker| ticker.epoch() == epoch) {
                state.spinner_angle =
                    (state.spinner_angle + SPINNER_STEP_RADIANS) % std::f32::consts::TAU;
            }
        }
    }
}

/// The single branch the canvas renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasView<'a> {
    Loading {
        message_key: &'static str,
        spinner_angle: f32,
    },
    Error(&'a SessionError),
    Result {
        handle: Option<&'a Handle>,
        explanation: Option<&'a Explanation>,
    },
    Empty,
}

impl<'a> CanvasView<'a> {
    /// Derives the branch to render. Loading wins over everything, then a
    /// failure, then an image.
    #[must_use]
    pub fn from_state(session: &'a Session, state: &'a State) -> Self {
        if session.is_loading() {
            return CanvasView::Loading {
                message_key: state
                    .ticker
                    .map_or(LOADING_MESSAGE_KEYS[0], |ticker| ticker.message_key()),
                spinner_angle: state.spinner_angle,
            };
        }
        if let Some(error) = session.error() {
            return CanvasView::Error(error);
        }
        if session.has_image() {
            let cache = state
                .cache
                .as_ref()
                .filter(|cache| cache.revision == session.image_revision());
            return CanvasView::Result {
                handle: cache.and_then(|cache| cache.handle.as_ref()),
                explanation: cache.and_then(|cache| cache.explanation.as_ref()),
            };
        }
        CanvasView::Empty
    }
}

/// Contextual data needed to render the canvas.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match CanvasView::from_state(ctx.session, ctx.state) {
        CanvasView::Loading {
            message_key,
            spinner_angle,
        } => view_loading(ctx.i18n, message_key, spinner_angle),
        CanvasView::Error(error) => ErrorDisplay::new()
            .title(ctx.i18n.tr("canvas-error-title"))
            .message(error.message())
            .view(),
        CanvasView::Result {
            handle,
            explanation,
        } => view_result(ctx.i18n, handle, explanation),
        CanvasView::Empty => view_empty(ctx.i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn view_loading<'a>(i18n: &I18n, message_key: &str, angle: f32) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Loader::new(palette::BRAND_RED, angle).into_element())
        .push(
            Text::new(i18n.tr("canvas-loading-title"))
                .size(typography::TITLE_SM)
                .font(bold()),
        )
        .push(
            Text::new(i18n.tr(message_key))
                .size(typography::BODY)
                .style(muted),
        )
        .into()
}

fn view_result<'a>(
    i18n: &I18n,
    handle: Option<&'a Handle>,
    explanation: Option<&'a Explanation>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => Container::new(
            image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill),
        )
        .style(styles::container::image_frame)
        .into(),
        None => Text::new(i18n.tr("canvas-image-unavailable"))
            .size(typography::BODY)
            .style(muted)
            .into(),
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(picture);

    if let Some(explanation) = explanation {
        column = column.push(view_explanation(explanation));
    }

    scrollable(column).height(Length::Fill).into()
}

/// Yellow card with the explanation title and its bullet points.
pub fn view_explanation<'a, M: 'a>(explanation: &'a Explanation) -> Element<'a, M> {
    let points = explanation.points.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, point| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Text::new("\u{2022}").size(typography::BODY))
                    .push(Text::new(point.as_str()).size(typography::BODY)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(explanation.title.as_str())
                .size(typography::TITLE_SM)
                .font(bold()),
        )
        .push(points);

    let card = Row::new()
        .spacing(spacing::SM)
        .push(icons::tinted(
            icons::sized(icons::key(), sizing::ICON_MD),
            palette::BRAND_YELLOW,
        ))
        .push(body);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::note)
        .into()
}

fn view_empty<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::BLURB_MAX_WIDTH)
        .push(icons::tinted(
            icons::sized(icons::photo(), sizing::ICON_XL),
            palette::GRAY_400,
        ))
        .push(
            Text::new(i18n.tr("canvas-empty-title"))
                .size(typography::TITLE_LG)
                .font(bold()),
        )
        .push(
            Text::new(i18n.tr("canvas-empty-body"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .style(muted),
        )
        .into()
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Generation;

    fn generation(explanation: Option<&str>) -> Generation {
        Generation::new(
            ImageResult::new("image/png", vec![1, 2, 3]),
            explanation.map(str::to_string),
        )
    }

    fn start_generate(session: &mut Session, state: &mut State) {
        session.set_topic_text("Kawasaki disease");
        assert!(session.begin_generate().is_some());
        state.sync(session);
    }

    /// Identity hashes of the timers the runtime would keep alive.
    fn timer_ids(state: &State) -> Vec<u64> {
        use iced::advanced::subscription::{into_recipes, Hasher, Recipe};
        use std::hash::Hasher as _;

        into_recipes(state.subscription(Duration::from_millis(2500)))
            .iter()
            .map(|recipe| {
                let mut hasher = Hasher::default();
                Recipe::hash(recipe.as_ref(), &mut hasher);
                hasher.finish()
            })
            .collect()
    }

    #[test]
    fn timers_exist_only_while_loading() {
        let mut session = Session::new();
        let mut state = State::new();
        assert!(timer_ids(&state).is_empty());

        start_generate(&mut session, &mut state);
        let first = timer_ids(&state);
        assert_eq!(first.len(), 2);

        session.complete(Ok(generation(None)));
        state.sync(&session);
        assert!(timer_ids(&state).is_empty());

        // A later request runs under new timer identities.
        start_generate(&mut session, &mut state);
        let second = timer_ids(&state);
        assert_eq!(second.len(), 2);
        assert!(second.iter().all(|id| !first.contains(id)));
    }

    #[test]
    fn idle_session_is_empty() {
        let session = Session::new();
        let state = State::new();
        assert_eq!(CanvasView::from_state(&session, &state), CanvasView::Empty);
    }

    #[test]
    fn loading_starts_ticker_at_first_message() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);

        assert!(state.ticker().is_some());
        assert_eq!(
            CanvasView::from_state(&session, &state),
            CanvasView::Loading {
                message_key: LOADING_MESSAGE_KEYS[0],
                spinner_angle: 0.0,
            }
        );
    }

    #[test]
    fn ticks_rotate_messages_and_stop_after_completion() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        let epoch = state.ticker().map(LoadingTicker::epoch).unwrap_or_default();

        for _ in 0..7 {
            update(&mut state, Message::Tick(epoch));
        }
        assert_eq!(state.ticker().map(LoadingTicker::message_index), Some(7 % 5));

        session.complete(Ok(generation(None)));
        state.sync(&session);
        assert!(state.ticker().is_none());

        // A late tick has nothing to advance.
        update(&mut state, Message::Tick(epoch));
        assert!(state.ticker().is_none());
    }

    #[test]
    fn new_phase_gets_fresh_ticker_and_ignores_old_epoch() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        let first = state.ticker().map(LoadingTicker::epoch).unwrap_or_default();
        update(&mut state, Message::Tick(first));

        session.complete(Ok(generation(None)));
        state.sync(&session);
        start_generate(&mut session, &mut state);
        let second = state.ticker().map(LoadingTicker::epoch).unwrap_or_default();

        assert_ne!(first, second);
        assert_eq!(state.ticker().map(LoadingTicker::message_index), Some(0));

        update(&mut state, Message::Tick(first));
        assert_eq!(state.ticker().map(LoadingTicker::message_index), Some(0));
    }

    #[test]
    fn spinner_advances_only_for_current_epoch() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        let epoch = state.ticker().map(LoadingTicker::epoch).unwrap_or_default();

        update(&mut state, Message::SpinnerFrame(epoch + 1));
        assert_eq!(state.spinner_angle(), 0.0);

        update(&mut state, Message::SpinnerFrame(epoch));
        assert!(state.spinner_angle() > 0.0);
    }

    #[test]
    fn failure_shows_error_message() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        session.complete(Err(SessionError::GenerationFailed("quota".into())));
        state.sync(&session);

        match CanvasView::from_state(&session, &state) {
            CanvasView::Error(error) => assert_eq!(error.message(), "quota"),
            other => panic!("expected error view, got {other:?}"),
        }
    }

    #[test]
    fn success_shows_image_and_parsed_explanation() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        session.complete(Ok(generation(Some("Title\n* a\n* b"))));
        state.sync(&session);

        match CanvasView::from_state(&session, &state) {
            CanvasView::Result {
                handle,
                explanation,
            } => {
                assert!(handle.is_some());
                let explanation = explanation.expect("explanation");
                assert_eq!(explanation.title, "Title");
                assert_eq!(explanation.points, vec!["a", "b"]);
            }
            other => panic!("expected result view, got {other:?}"),
        }
    }

    #[test]
    fn edit_refreshes_cached_explanation() {
        let mut session = Session::new();
        let mut state = State::new();
        start_generate(&mut session, &mut state);
        session.complete(Ok(generation(Some("First"))));
        state.sync(&session);

        session.set_edit_text("add a crown");
        assert!(session.begin_edit().is_some());
        state.sync(&session);
        session.complete(Ok(generation(Some("Second\n* crown"))));
        state.sync(&session);

        let CanvasView::Result { explanation, .. } = CanvasView::from_state(&session, &state)
        else {
            panic!("expected result view");
        };
        assert_eq!(explanation.map(|e| e.title.as_str()), Some("Second"));
    }

    #[test]
    fn view_builds_for_each_branch() {
        let i18n = I18n::default();
        let mut session = Session::new();
        let mut state = State::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            session: &session,
            state: &state,
        });

        start_generate(&mut session, &mut state);
        let _ = view(ViewContext {
            i18n: &i18n,
            session: &session,
            state: &state,
        });

        session.complete(Ok(generation(Some("Title\n* point"))));
        state.sync(&session);
        let _ = view(ViewContext {
            i18n: &i18n,
            session: &session,
            state: &state,
        });
    }
}
