// SPDX-License-Identifier: MPL-2.0
//! Gemini REST adapter implementing the [`ImageGenerator`] trait.
//!
//! Both operations go through the `generateContent` endpoint. An edit sends
//! the current image back as inline base64 data together with the
//! instruction. The first inline image of the answer becomes the result and
//! the text parts, joined, become the explanation.
//!
//! [`ImageGenerator`]: crate::application::port::ImageGenerator

use crate::app::config::ServiceConfig;
use crate::application::port::{ImageGenerator, ServiceError};
use crate::domain::{Generation, ImageResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest error body kept in a [`ServiceError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

// =============================================================================
// Prompts
// =============================================================================

/// Builds the prompt sent for a new topic.
#[must_use]
pub fn generation_prompt(topic: &str) -> String {
    format!(
        "Create a single memorable illustrated scene that works as a visual mnemonic \
         for a medical student preparing for the MCCQE. Topic:\n{topic}\n\n\
         Every key fact must be represented by a distinct visual element. \
         After the image, write an explanation: the first line is a short title, \
         then one line per visual element starting with \"* \" that maps the element \
         to the fact it encodes."
    )
}

/// Builds the prompt sent with the current image for an edit.
#[must_use]
pub fn edit_prompt(instruction: &str) -> String {
    format!(
        "Edit this medical mnemonic illustration as follows:\n{instruction}\n\n\
         Keep the existing style and all elements not affected by the change. \
         After the image, write the updated explanation in the same format: \
         a short title line, then one \"* \" line per visual element."
    )
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 2],
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

fn request_body(prompt: String, image: Option<&ImageResult>) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = image {
        parts.push(Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type().to_string(),
                data: image.to_base64(),
            }),
        });
    }
    parts.push(Part {
        text: Some(prompt),
        inline_data: None,
    });

    GenerateContentRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_modalities: ["TEXT", "IMAGE"],
        },
    }
}

/// Extracts the image and explanation from a `generateContent` answer.
pub fn parse_response(body: &str) -> Result<Generation, ServiceError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| ServiceError::MalformedResponse(err.to_string()))?;

    let mut image = None;
    let mut texts = Vec::new();

    for part in response
        .candidates
        .into_iter()
        .flat_map(|candidate| candidate.content.parts)
    {
        if let Some(text) = part.text {
            if !text.trim().is_empty() {
                texts.push(text);
            }
        }
        if image.is_some() {
            continue;
        }
        if let Some(inline) = part.inline_data {
            let bytes = BASE64
                .decode(inline.data.as_bytes())
                .map_err(|err| ServiceError::Decode(err.to_string()))?;
            if bytes.is_empty() {
                return Err(ServiceError::Decode("empty image payload".to_string()));
            }
            image = Some(ImageResult::new(inline.mime_type, bytes));
        }
    }

    let image = image.ok_or(ServiceError::NoImage)?;
    let explanation = (!texts.is_empty()).then(|| texts.join("\n"));
    Ok(Generation::new(image, explanation))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

// =============================================================================
// GeminiGenerator
// =============================================================================

/// Generation service backed by the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl GeminiGenerator {
    /// Creates a generator from the `[service]` config section, reading the
    /// API key from the configured environment variable.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(config, api_key)
    }

    /// Creates a generator with an explicit API key.
    #[must_use]
    pub fn new(config: &ServiceConfig, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("ClaraAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Name of the environment variable the key is read from.
    #[must_use]
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Full URL of the `generateContent` call.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn send(
        &self,
        body: GenerateContentRequest,
    ) -> BoxFuture<'static, Result<Generation, ServiceError>> {
        let client = self.client.clone();
        let url = self.url();
        let api_key = self.api_key.clone();
        let api_key_env = self.api_key_env.clone();

        async move {
            let api_key = api_key.ok_or(ServiceError::MissingApiKey(api_key_env))?;

            let response = client
                .post(&url)
                .header(API_KEY_HEADER, api_key)
                .json(&body)
                .send()
                .await
                .map_err(|err| ServiceError::Http(err.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|err| ServiceError::Http(err.to_string()))?;

            if !status.is_success() {
                return Err(ServiceError::Status {
                    code: status.as_u16(),
                    body: truncate_body(&text),
                });
            }

            parse_response(&text)
        }
        .boxed()
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(&self, topic: String) -> BoxFuture<'static, Result<Generation, ServiceError>> {
        self.send(request_body(generation_prompt(&topic), None))
    }

    fn edit(
        &self,
        image: ImageResult,
        instruction: String,
    ) -> BoxFuture<'static, Result<Generation, ServiceError>> {
        self.send(request_body(edit_prompt(&instruction), Some(&image)))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_joins_endpoint_and_model() {
        let config = ServiceConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            model: "image-model".to_string(),
            ..ServiceConfig::default()
        };
        let generator = GeminiGenerator::new(&config, None);
        assert_eq!(
            generator.url(),
            "https://example.test/v1beta/models/image-model:generateContent"
        );
    }

    #[test]
    fn generate_body_contains_prompt_only() {
        let body = serde_json::to_value(request_body(generation_prompt("Sepsis"), None))
            .expect("serializable");
        let parts = body["contents"][0]["parts"].as_array().expect("parts");
        assert_eq!(parts.len(), 1);
        assert!(parts[0]["text"].as_str().expect("text").contains("Sepsis"));
        assert!(parts[0].get("inlineData").is_none());
        assert_eq!(
            body["generationConfig"]["responseModalities"],
            serde_json::json!(["TEXT", "IMAGE"])
        );
    }

    #[test]
    fn edit_body_carries_current_image() {
        let image = ImageResult::new("image/png", vec![1, 2, 3]);
        let body = serde_json::to_value(request_body(edit_prompt("add a crown"), Some(&image)))
            .expect("serializable");
        let parts = body["contents"][0]["parts"].as_array().expect("parts");

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], BASE64.encode([1u8, 2, 3]));
        assert!(parts[1]["text"].as_str().expect("text").contains("add a crown"));
    }

    #[test]
    fn parse_response_extracts_image_and_text() {
        let data = BASE64.encode([7u8, 8, 9]);
        let body = format!(
            r#"{{"candidates":[{{"content":{{"parts":[
                {{"text":"Title\n* one"}},
                {{"inlineData":{{"mimeType":"image/png","data":"{data}"}}}},
                {{"text":"* two"}}
            ]}}}}]}}"#
        );

        let generation = parse_response(&body).expect("parsed");
        assert_eq!(generation.image.bytes(), &[7, 8, 9]);
        assert_eq!(generation.image.mime_type(), "image/png");
        assert_eq!(generation.explanation.as_deref(), Some("Title\n* one\n* two"));
    }

    #[test]
    fn parse_response_without_text_has_no_explanation() {
        let data = BASE64.encode([1u8]);
        let body = format!(
            r#"{{"candidates":[{{"content":{{"parts":[{{"inlineData":{{"mimeType":"image/jpeg","data":"{data}"}}}}]}}}}]}}"#
        );
        let generation = parse_response(&body).expect("parsed");
        assert_eq!(generation.explanation, None);
    }

    #[test]
    fn parse_response_without_image_fails() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"I cannot draw that."}]}}]}"#;
        assert_eq!(parse_response(body), Err(ServiceError::NoImage));
    }

    #[test]
    fn parse_response_with_no_candidates_fails() {
        assert_eq!(parse_response("{}"), Err(ServiceError::NoImage));
    }

    #[test]
    fn parse_response_rejects_bad_base64() {
        let body = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"@@@"}}]}}]}"#;
        assert!(matches!(parse_response(body), Err(ServiceError::Decode(_))));
    }

    #[test]
    fn parse_response_rejects_non_json() {
        assert!(matches!(
            parse_response("<html>bad gateway</html>"),
            Err(ServiceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY_CHARS);
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let config = ServiceConfig {
            api_key_env: "CLARA_AI_TEST_UNSET_KEY".to_string(),
            ..ServiceConfig::default()
        };
        let generator = GeminiGenerator::new(&config, None);
        let result = generator.generate("topic".to_string()).await;
        assert_eq!(
            result,
            Err(ServiceError::MissingApiKey("CLARA_AI_TEST_UNSET_KEY".to_string()))
        );
    }
}
