// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod loader;

pub use loader::Loader;
