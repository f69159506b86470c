// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! The only timers are the canvas loading timers. They exist while a request
//! is outstanding and are dropped by the runtime as soon as it resolves.

use super::Message;
use crate::ui::image_canvas;
use iced::Subscription;
use std::time::Duration;

/// Creates the loading timers, or none when idle.
pub fn create_loading_subscription(
    canvas: &image_canvas::State,
    ticker_period: Duration,
) -> Subscription<Message> {
    canvas.subscription(ticker_period).map(Message::Canvas)
}
