// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Every session transition happens here, followed by a canvas sync so the
//! loading ticker follows the phase.

use super::config::Config;
use super::persistence;
use super::Message;
use crate::application::port::{ImageGenerator, ServiceError};
use crate::domain::{Completion, Generation, RequestKind, Session, SessionError};
use crate::ui::theming::ThemeMode;
use crate::ui::{control_panel, header, image_canvas};
use iced::{Task, Theme};
use std::sync::Arc;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub control_panel: &'a mut control_panel::State,
    pub canvas: &'a mut image_canvas::State,
    pub generator: &'a Arc<dyn ImageGenerator>,
    pub theme_mode: &'a mut ThemeMode,
    pub theme: &'a mut Theme,
    pub config: &'a mut Config,
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, *ctx.theme_mode) {
        header::Event::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            *ctx.theme = mode.iced_theme();
            persistence::persist_theme_mode(ctx.config, mode);
            Task::none()
        }
    }
}

pub fn handle_control_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: control_panel::Message,
) -> Task<Message> {
    match control_panel::update(ctx.control_panel, message) {
        control_panel::Event::None => Task::none(),
        control_panel::Event::TopicChanged(text) => {
            ctx.session.set_topic_text(text);
            Task::none()
        }
        control_panel::Event::EditChanged(text) => {
            ctx.session.set_edit_text(text);
            Task::none()
        }
        control_panel::Event::GenerateRequested => start_generate(ctx),
        control_panel::Event::EditRequested => start_edit(ctx),
    }
}

pub fn handle_canvas_message(
    ctx: &mut UpdateContext<'_>,
    message: image_canvas::Message,
) -> Task<Message> {
    image_canvas::update(ctx.canvas, message);
    Task::none()
}

fn start_generate(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(request) = ctx.session.begin_generate() else {
        tracing::debug!("generate request rejected");
        return Task::none();
    };
    ctx.canvas.sync(ctx.session);
    tracing::info!(
        service = ctx.generator.name(),
        topic_chars = request.topic.chars().count(),
        "generation started"
    );

    let future = ctx.generator.generate(request.topic);
    Task::perform(future, |result| Message::RequestFinished {
        kind: RequestKind::Generate,
        result,
    })
}

fn start_edit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(request) = ctx.session.begin_edit() else {
        tracing::debug!("edit request rejected");
        return Task::none();
    };
    ctx.canvas.sync(ctx.session);
    tracing::info!(
        service = ctx.generator.name(),
        image_bytes = request.image.len(),
        "edit started"
    );

    let future = ctx.generator.edit(request.image, request.instruction);
    Task::perform(future, |result| Message::RequestFinished {
        kind: RequestKind::Edit,
        result,
    })
}

/// Maps a port error to the session failure of the matching request kind.
#[must_use]
pub fn session_error(kind: RequestKind, error: &ServiceError) -> SessionError {
    match kind {
        RequestKind::Generate => SessionError::GenerationFailed(error.to_string()),
        RequestKind::Edit => SessionError::EditFailed(error.to_string()),
    }
}

pub fn handle_request_finished(
    ctx: &mut UpdateContext<'_>,
    kind: RequestKind,
    result: Result<Generation, ServiceError>,
) -> Task<Message> {
    let result = match result {
        Ok(generation) => {
            tracing::info!(
                ?kind,
                image_bytes = generation.image.len(),
                has_explanation = generation.explanation.is_some(),
                "request succeeded"
            );
            Ok(generation)
        }
        Err(error) => {
            tracing::warn!(?kind, %error, "request failed");
            Err(session_error(kind, &error))
        }
    };

    if ctx.session.complete(result) == Completion::Ignored {
        tracing::warn!(?kind, "ignoring completion without an outstanding request");
    }
    ctx.canvas.sync(ctx.session);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_matches_request_kind() {
        let error = ServiceError::NoImage;
        assert_eq!(
            session_error(RequestKind::Generate, &error),
            SessionError::GenerationFailed("the service did not return an image".into())
        );
        assert_eq!(
            session_error(RequestKind::Edit, &error),
            SessionError::EditFailed("the service did not return an image".into())
        );
    }
}
