// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error card with a warning icon, a heading and the
//!   failure message

pub mod error_display;
