// SPDX-License-Identifier: MPL-2.0
//! Rotating progress messages shown while a request is outstanding.
//!
//! A [`LoadingTicker`] lives only as long as one loading phase. The canvas
//! creates it when the phase starts and drops it when the phase ends. Its
//! timer is a subscription keyed by the ticker's epoch, so the runtime stops
//! the timer together with the ticker, and a tick produced for an older
//! epoch never moves a newer ticker.

/// Fluent keys of the rotating messages, in display order.
pub const LOADING_MESSAGE_KEYS: [&str; 5] = [
    "canvas-loading-message-1",
    "canvas-loading-message-2",
    "canvas-loading-message-3",
    "canvas-loading-message-4",
    "canvas-loading-message-5",
];

/// Identifies one loading phase.
pub type Epoch = u64;

/// Cosmetic message index for one loading phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTicker {
    epoch: Epoch,
    message_index: usize,
    message_count: usize,
}

impl LoadingTicker {
    /// Starts a ticker at index 0 for the given epoch.
    ///
    /// `message_count` is clamped to at least 1.
    #[must_use]
    pub fn start(epoch: Epoch, message_count: usize) -> Self {
        Self {
            epoch,
            message_index: 0,
            message_count: message_count.max(1),
        }
    }

    /// Starts a ticker over [`LOADING_MESSAGE_KEYS`].
    #[must_use]
    pub fn with_default_messages(epoch: Epoch) -> Self {
        Self::start(epoch, LOADING_MESSAGE_KEYS.len())
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn message_index(&self) -> usize {
        self.message_index
    }

    /// Advances to the next message if the tick belongs to this ticker.
    ///
    /// Returns `false` for ticks of another epoch.
    pub fn tick(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.message_index = (self.message_index + 1) % self.message_count;
        true
    }

    /// Key of the message currently shown, when using the default messages.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        LOADING_MESSAGE_KEYS[self.message_index % LOADING_MESSAGE_KEYS.len()]
    }
}
