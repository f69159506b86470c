// SPDX-License-Identifier: MPL-2.0
//! Request lifecycle for generating and editing mnemonic images.
//!
//! [`Session`] is the single writer of the lifecycle state. Display
//! components only read it; they ask for transitions through events that the
//! application turns into calls on this type.
//!
//! ```text
//! Idle ──generate──▶ Generating ──ok──▶ Ready ──edit──▶ Editing ──ok──▶ Ready
//!                        │                ▲  │              │
//!                        └──err──▶ Failed ┘  └──generate◀───┘ (err ▶ Failed)
//! ```
//!
//! At most one request is outstanding. While it is, `begin_generate` and
//! `begin_edit` return `None` and leave the session untouched.

use super::image::{Generation, ImageResult};
use std::fmt;

/// Failure reported by the generation service, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    GenerationFailed(String),
    EditFailed(String),
}

impl SessionError {
    /// The human-readable message, surfaced verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            SessionError::GenerationFailed(msg) | SessionError::EditFailed(msg) => msg,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SessionError {}

/// Lifecycle phase. Exactly one holds at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Editing,
    Ready,
    Failed(SessionError),
}

impl Phase {
    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Generating | Phase::Editing)
    }
}

/// Which kind of request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Generate,
    Edit,
}

/// A generate request accepted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Topic text, trimmed.
    pub topic: String,
}

/// An edit request accepted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub image: ImageResult,
    /// Edit instruction, trimmed.
    pub instruction: String,
}

/// What [`Session::complete`] did with a service result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result resolved the outstanding request of this kind.
    Applied(RequestKind),
    /// No request was outstanding; the result was dropped.
    Ignored,
}

/// Returns the trimmed text if it can trigger a request.
///
/// Whitespace-only text counts as empty.
#[must_use]
pub fn actionable_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Authoritative state of one generation session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    topic_text: String,
    edit_text: String,
    image: Option<ImageResult>,
    explanation: Option<String>,
    phase: Phase,
    /// Bumped every time `image` is replaced, so views can cache decoded
    /// handles.
    image_revision: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic_text(&self) -> &str {
        &self.topic_text
    }

    #[must_use]
    pub fn edit_text(&self) -> &str {
        &self.edit_text
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageResult> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The current error, present only in [`Phase::Failed`].
    #[must_use]
    pub fn error(&self) -> Option<&SessionError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Inputs are read-only while a request is outstanding.
    pub fn set_topic_text(&mut self, text: impl Into<String>) {
        if !self.is_loading() {
            self.topic_text = text.into();
        }
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if !self.is_loading() {
            self.edit_text = text.into();
        }
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.is_loading() && actionable_text(&self.topic_text).is_some()
    }

    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.is_loading() && self.has_image() && actionable_text(&self.edit_text).is_some()
    }

    /// Starts a generate request if allowed, moving to [`Phase::Generating`].
    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        if !self.can_generate() {
            return None;
        }
        let topic = actionable_text(&self.topic_text)?.to_string();
        self.phase = Phase::Generating;
        Some(GenerateRequest { topic })
    }

    /// Starts an edit of the current image if allowed, moving to
    /// [`Phase::Editing`].
    pub fn begin_edit(&mut self) -> Option<EditRequest> {
        if !self.can_edit() {
            return None;
        }
        let image = self.image.clone()?;
        let instruction = actionable_text(&self.edit_text)?.to_string();
        self.phase = Phase::Editing;
        Some(EditRequest { image, instruction })
    }

    /// Resolves the outstanding request with the service's result.
    ///
    /// Success replaces the image and explanation. Failure keeps both, so an
    /// edit that fails leaves the previous picture in place.
    pub fn complete(&mut self, result: Result<Generation, SessionError>) -> Completion {
        let kind = match self.phase {
            Phase::Generating => RequestKind::Generate,
            Phase::Editing => RequestKind::Edit,
            Phase::Idle | Phase::Ready | Phase::Failed(_) => return Completion::Ignored,
        };

        match result {
            Ok(generation) => {
                self.image = Some(generation.image);
                self.explanation = generation.explanation;
                self.image_revision = self.image_revision.wrapping_add(1);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.phase = Phase::Failed(err);
            }
        }

        Completion::Applied(kind)
    }
}
