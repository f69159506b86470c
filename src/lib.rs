// SPDX-License-Identifier: MPL-2.0
//! `clara_ai` turns a medical topic into an illustrated mnemonic scene.
//!
//! The user types a topic, an external image service draws a scene and
//! explains it, and the user can refine the picture with follow-up edit
//! instructions. The GUI is built with Iced.
//!
//! # Layers
//!
//! - [`domain`] - Session lifecycle, image payload, explanation parsing
//! - [`application`] - Port to the image generation service
//! - [`infrastructure`] - Gemini REST adapter
//! - [`app`] - Iced application root, config and paths
//! - [`ui`] - Components, widgets, styles
//! - [`i18n`] - Fluent translations

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
