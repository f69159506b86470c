// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`session`]: Request lifecycle ([`Session`](session::Session),
//!   [`Phase`](session::Phase), [`SessionError`](session::SessionError))
//! - [`image`]: Service payloads ([`ImageResult`](image::ImageResult),
//!   [`Generation`](image::Generation))
//! - [`explanation`]: Explanation text parsing ([`render`](explanation::render))

pub mod explanation;
pub mod image;
pub mod session;

pub use explanation::Explanation;
pub use image::{Generation, ImageResult};
pub use session::{
    Completion, EditRequest, GenerateRequest, Phase, RequestKind, Session, SessionError,
};
