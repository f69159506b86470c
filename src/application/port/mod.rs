// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`generation`]: Image generation and editing from text
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so they can be shared across tasks
//! - Asynchronous methods return boxed `'static` futures that callers wrap in
//!   an Iced `Task`

pub mod generation;

pub use generation::{ImageGenerator, ServiceError};
