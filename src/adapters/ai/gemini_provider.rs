//! Gemini Provider - Google's Generative Language API.
//!
//! One credential drives both backends the story needs:
//!
//! - `models/{text_model}:generateContent` with the `google_search` tool for
//!   grounded text ([`GroundedTextGenerator`])
//! - `models/{image_model}:predict` for Imagen illustrations ([`ImageGenerator`])
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_text_model("gemini-2.5-flash")
//!     .with_image_model("imagen-4.0-generate-001");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! Requests are sent once; failures are mapped to [`AIError`] and returned
//! to the caller without retrying.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::news::{GroundingChunk, WebReference};
use crate::ports::{
    AIError, GeneratedImage, GroundedTextGenerator, GroundedTextRequest, GroundedTextResponse,
    ImageGenerator, ImageRequest, ImageResponse, ProviderInfo,
};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model for grounded text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default model for illustrations.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model used for grounded text generation.
    pub text_model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Sets the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini + Imagen API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::invalid_request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.text_model
        )
    }

    fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.config.base_url, self.config.image_model)
    }

    fn to_generate_content_request(request: &GroundedTextRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            tools: if request.search_grounding {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            } else {
                Vec::new()
            },
        }
    }

    fn to_predict_request(request: &ImageRequest) -> PredictRequest {
        PredictRequest {
            instances: vec![PredictInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: request.count,
                aspect_ratio: request.aspect_ratio.as_str().to_string(),
                output_options: OutputOptions {
                    mime_type: request.format.mime_type().to_string(),
                },
            },
        }
    }

    /// Posts a JSON body and checks the response status.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: String,
        body: &B,
    ) -> Result<Response, AIError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })?;

        Self::handle_response_status(response).await
    }

    /// Maps non-success statuses to errors.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = Self::error_message(&error_body);

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(message)),
            400 => Err(AIError::invalid_request(message)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, message
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, message
            ))),
        }
    }

    /// Pulls `error.message` out of a Google API error body.
    fn error_message(error_body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(error_body)
            .ok()
            .and_then(|body| body.error)
            .and_then(|detail| detail.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| error_body.trim().to_string())
    }

    /// Converts a generateContent response to the port's shape.
    fn from_generate_content_response(
        response: GenerateContentResponse,
    ) -> Result<GroundedTextResponse, AIError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(AIError::content_filtered(reason));
            }
            return Ok(GroundedTextResponse::default());
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let grounding_chunks = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .map(|chunk| GroundingChunk {
                        web: chunk.web.map(|web| WebReference {
                            uri: web.uri,
                            title: web.title,
                        }),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(GroundedTextResponse {
            text,
            grounding_chunks,
        })
    }

    /// Decodes the base64 payloads of a predict response.
    ///
    /// A payload that does not decode is skipped, so a response made only of
    /// bad payloads degrades to the placeholder instead of failing the story.
    fn from_predict_response(response: PredictResponse) -> ImageResponse {
        let images = response
            .predictions
            .into_iter()
            .filter_map(|prediction| prediction.bytes_base64_encoded)
            .filter(|encoded| !encoded.is_empty())
            .filter_map(|encoded| match STANDARD.decode(encoded.as_bytes()) {
                Ok(bytes) => Some(GeneratedImage { bytes }),
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable image payload");
                    None
                }
            })
            .collect();

        ImageResponse { images }
    }
}

#[async_trait]
impl GroundedTextGenerator for GeminiProvider {
    async fn generate_grounded(
        &self,
        request: GroundedTextRequest,
    ) -> Result<GroundedTextResponse, AIError> {
        debug!(model = %self.config.text_model, grounding = request.search_grounding, "Sending generateContent request");

        let body = Self::to_generate_content_request(&request);
        let response = self.post_json(self.generate_content_url(), &body).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::from_generate_content_response(parsed)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.text_model).with_grounding(true)
    }
}

#[async_trait]
impl ImageGenerator for GeminiProvider {
    async fn generate_images(&self, request: ImageRequest) -> Result<ImageResponse, AIError> {
        debug!(model = %self.config.image_model, count = request.count, "Sending predict request");

        let body = Self::to_predict_request(&request);
        let response = self.post_json(self.predict_url(), &body).await?;

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(Self::from_predict_response(parsed))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("imagen", &self.config.image_model)
    }
}

// ----- Generative Language API Types -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<WireGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct WireGroundingChunk {
    web: Option<WireWeb>,
}

#[derive(Debug, Deserialize)]
struct WireWeb {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u8,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_text_model("gemini-2.0-flash")
            .with_image_model("imagen-3.0-generate-002")
            .with_base_url("https://proxy.example/v1beta/")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.text_model, "gemini-2.0-flash");
        assert_eq!(config.image_model, "imagen-3.0-generate-002");
        assert_eq!(config.base_url, "https://proxy.example/v1beta");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_debug_hides_api_key() {
        let config = GeminiConfig::new("super-secret-key");
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }

    #[test]
    fn endpoint_urls_use_models() {
        let provider = GeminiProvider::new(GeminiConfig::new("k")).unwrap();

        assert_eq!(
            provider.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            provider.predict_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/imagen-4.0-generate-001:predict"
        );
    }

    #[test]
    fn generate_content_request_enables_google_search() {
        let body = GeminiProvider::to_generate_content_request(&GroundedTextRequest::new("Hi"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Hi"}]}],
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn generate_content_request_omits_tools_without_grounding() {
        let request = GroundedTextRequest::new("Hi").with_search_grounding(false);
        let value = serde_json::to_value(GeminiProvider::to_generate_content_request(&request)).unwrap();

        assert!(value.get("tools").is_none());
    }

    #[test]
    fn predict_request_carries_image_parameters() {
        let value =
            serde_json::to_value(GeminiProvider::to_predict_request(&ImageRequest::new("A harbour")))
                .unwrap();

        assert_eq!(
            value,
            json!({
                "instances": [{"prompt": "A harbour"}],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "16:9",
                    "outputOptions": {"mimeType": "image/jpeg"}
                }
            })
        );
    }

    #[test]
    fn parses_text_and_grounding_chunks() {
        let raw = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "HEADLINE: Quake hits Tokyo\n"},
                    {"text": "SUMMARY: A moderate earthquake..."}
                ]},
                "finishReason": "STOP",
                "groundingMetadata": {
                    "webSearchQueries": ["japan news"],
                    "groundingChunks": [
                        {"web": {"uri": "https://news.example/1", "title": "Example News"}},
                        {"retrievedContext": {"uri": "gs://bucket/doc"}},
                        {"web": {"uri": "https://news.example/2"}}
                    ]
                }
            }]
        });
        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();

        let response = GeminiProvider::from_generate_content_response(parsed).unwrap();

        assert_eq!(
            response.text,
            "HEADLINE: Quake hits Tokyo\nSUMMARY: A moderate earthquake..."
        );
        assert_eq!(response.grounding_chunks.len(), 3);
        assert_eq!(
            response.grounding_chunks[0],
            GroundingChunk::web("https://news.example/1", "Example News")
        );
        assert!(response.grounding_chunks[1].web.is_none());
        assert_eq!(
            response.grounding_chunks[2].web.as_ref().unwrap().title,
            None
        );
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        let response = GeminiProvider::from_generate_content_response(parsed).unwrap();

        assert_eq!(response.text, "");
        assert!(response.grounding_chunks.is_empty());
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();

        let err = GeminiProvider::from_generate_content_response(parsed).unwrap_err();
        assert_eq!(err, AIError::content_filtered("SAFETY"));
    }

    #[test]
    fn decodes_predictions() {
        let parsed: PredictResponse = serde_json::from_value(json!({
            "predictions": [{"bytesBase64Encoded": "/9j/", "mimeType": "image/jpeg"}]
        }))
        .unwrap();

        let response = GeminiProvider::from_predict_response(parsed);
        assert_eq!(response.first_bytes(), Some(&[0xFF, 0xD8, 0xFF][..]));
    }

    #[test]
    fn empty_predictions_yield_no_images() {
        let parsed: PredictResponse = serde_json::from_value(json!({})).unwrap();
        let response = GeminiProvider::from_predict_response(parsed);

        assert!(response.images.is_empty());
    }

    #[test]
    fn invalid_base64_payload_is_skipped() {
        let parsed: PredictResponse = serde_json::from_value(json!({
            "predictions": [{"bytesBase64Encoded": "not base64!!"}]
        }))
        .unwrap();

        let response = GeminiProvider::from_predict_response(parsed);
        assert!(response.images.is_empty());
        assert_eq!(response.first_bytes(), None);
    }

    #[test]
    fn invalid_payload_does_not_hide_valid_one() {
        let parsed: PredictResponse = serde_json::from_value(json!({
            "predictions": [
                {"bytesBase64Encoded": "%%%"},
                {"bytesBase64Encoded": "/9j/"}
            ]
        }))
        .unwrap();

        let response = GeminiProvider::from_predict_response(parsed);
        assert_eq!(response.first_bytes(), Some(&[0xFF, 0xD8, 0xFF][..]));
    }

    #[test]
    fn error_message_prefers_api_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded for quota metric","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            GeminiProvider::error_message(body),
            "Quota exceeded for quota metric"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(GeminiProvider::error_message(" upstream timeout "), "upstream timeout");
    }

    #[test]
    fn provider_info_reports_models() {
        let provider = GeminiProvider::new(GeminiConfig::new("k")).unwrap();

        let text = GroundedTextGenerator::provider_info(&provider);
        assert_eq!(text.model, "gemini-2.5-flash");
        assert!(text.supports_grounding);

        let image = ImageGenerator::provider_info(&provider);
        assert_eq!(image.model, "imagen-4.0-generate-001");
    }
}
