// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext`, emits its own `Message`, and its `update`
//! returns an `Event` for the application to act on.
//!
//! # Components
//!
//! - [`header`] - Brand mark and theme toggle
//! - [`control_panel`] - Topic and edit inputs with their action buttons
//! - [`image_canvas`] - Loading, error, result or empty state
//!
//! # Shared Infrastructure
//!
//! - [`state`] - UI-only state (loading ticker)
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (loader)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod components;
pub mod control_panel;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod image_canvas;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
