// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external services and HTTP I/O.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Image generation and editing over the Gemini REST API
//!   (implements [`ImageGenerator`])
//!
//! [`ImageGenerator`]: crate::application::port::ImageGenerator

pub mod gemini;

pub use gemini::GeminiGenerator;
