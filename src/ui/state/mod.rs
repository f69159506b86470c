// SPDX-License-Identifier: MPL-2.0
//! UI-only state that is not part of the session.

pub mod loading_ticker;

pub use loading_ticker::{Epoch, LoadingTicker, LOADING_MESSAGE_KEYS};
