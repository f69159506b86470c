// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Service**: Generation service endpoint, model and timeouts
//! - **Ticker**: Rotating loading message period

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Base URL of the Gemini REST API.
pub const DEFAULT_SERVICE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image-capable model used for both generation and editing.
pub const DEFAULT_SERVICE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Environment variable read for the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default HTTP timeout for a single generate or edit call (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Loading Ticker Defaults
// ==========================================================================

/// Default period between loading message changes (in milliseconds).
pub const DEFAULT_TICKER_PERIOD_MS: u64 = 2500;

/// Minimum ticker period (in milliseconds).
pub const MIN_TICKER_PERIOD_MS: u64 = 500;

/// Maximum ticker period (in milliseconds).
pub const MAX_TICKER_PERIOD_MS: u64 = 10_000;

// ==========================================================================
// Spinner Animation
// ==========================================================================

/// Interval between spinner animation frames (in milliseconds).
pub const SPINNER_FRAME_MS: u64 = 50;

/// Rotation added to the spinner on each frame (in radians).
pub const SPINNER_STEP_RADIANS: f32 = 0.2;

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(MIN_TICKER_PERIOD_MS <= DEFAULT_TICKER_PERIOD_MS);
    assert!(DEFAULT_TICKER_PERIOD_MS <= MAX_TICKER_PERIOD_MS);
    assert!(SPINNER_FRAME_MS < MIN_TICKER_PERIOD_MS);
};
