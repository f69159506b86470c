// SPDX-License-Identifier: MPL-2.0
//! Image generation port definition.
//!
//! This module defines the [`ImageGenerator`] trait through which the
//! application asks an external service to create or edit a mnemonic image.
//!
//! # Design Notes
//!
//! - Calls are single-shot: each future resolves exactly once, to success or
//!   failure
//! - Futures are `'static` so callers can hand them to `iced::Task::perform`
//! - There is no cancellation; an outstanding request always runs to the end
//! - The trait is `Send + Sync` so it can be shared as `Arc<dyn ImageGenerator>`

use crate::domain::{Generation, ImageResult};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// ServiceError
// =============================================================================

/// Errors reported by a generation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No API key was found in the configured environment variable.
    #[error("API key is not set (expected in ${0})")]
    MissingApiKey(String),

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body could not be understood.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response contained no image.
    #[error("the service did not return an image")]
    NoImage,

    /// The returned image data could not be decoded.
    #[error("invalid image data: {0}")]
    Decode(String),
}

// =============================================================================
// ImageGenerator Trait
// =============================================================================

/// Port for creating and editing images from text.
///
/// # Example
///
/// ```ignore
/// use clara_ai::application::port::ImageGenerator;
///
/// async fn illustrate(generator: &dyn ImageGenerator) {
///     match generator.generate("Causes of pancreatitis".into()).await {
///         Ok(generation) => println!("{} bytes", generation.image.len()),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
pub trait ImageGenerator: Send + Sync {
    /// Creates a new image (and optional explanation) for a topic.
    fn generate(&self, topic: String) -> BoxFuture<'static, Result<Generation, ServiceError>>;

    /// Applies an instruction to an existing image.
    fn edit(
        &self,
        image: ImageResult,
        instruction: String,
    ) -> BoxFuture<'static, Result<Generation, ServiceError>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn service_error_display() {
        let err = ServiceError::MissingApiKey("GEMINI_API_KEY".to_string());
        assert_eq!(
            format!("{err}"),
            "API key is not set (expected in $GEMINI_API_KEY)"
        );

        let err = ServiceError::Status {
            code: 429,
            body: "quota".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("429"));
        assert!(display.contains("quota"));
    }

    // Mock implementation for testing
    struct CountingGenerator {
        calls: Arc<AtomicUsize>,
    }

    impl ImageGenerator for CountingGenerator {
        fn generate(&self, topic: String) -> BoxFuture<'static, Result<Generation, ServiceError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if topic.is_empty() {
                    return Err(ServiceError::NoImage);
                }
                Ok(Generation::new(
                    ImageResult::new("image/png", topic.into_bytes()),
                    None,
                ))
            }
            .boxed()
        }

        fn edit(
            &self,
            image: ImageResult,
            instruction: String,
        ) -> BoxFuture<'static, Result<Generation, ServiceError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                let mut bytes = image.bytes().to_vec();
                bytes.extend(instruction.into_bytes());
                Ok(Generation::new(ImageResult::new("image/png", bytes), None))
            }
            .boxed()
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn mock_generator_resolves_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator: Arc<dyn ImageGenerator> = Arc::new(CountingGenerator {
            calls: Arc::clone(&calls),
        });

        let generated = generator.generate("ab".into()).await.expect("generated");
        let edited = generator
            .edit(generated.image, "c".into())
            .await
            .expect("edited");

        assert_eq!(edited.image.bytes(), b"abc");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn mock_generator_reports_failure() {
        let generator = CountingGenerator {
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let result = generator.generate(String::new()).await;
        assert_eq!(result, Err(ServiceError::NoImage));
    }
}
