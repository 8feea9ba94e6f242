use super::client::GeminiHttpClient;
use super::types::{GenerateContentResponse, ImageEditRequest, InlineData};
use crate::ai::ImageGenerationService;
use crate::config::ApiKey;
use crate::Result;
use async_trait::async_trait;

/// Image-capable Gemini model used for every edit.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: ApiKey, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, IMAGE_MODEL.to_string(), client),
        }
    }

    /// Point the client at a different API host (test servers, proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate(&self, image: &InlineData, prompt: &str) -> Result<GenerateContentResponse> {
        tracing::debug!(
            "Sending {} image ({} base64 chars) to {} with {} char prompt",
            image.mime_type,
            image.data.len(),
            self.http.model(),
            prompt.len()
        );

        let request = ImageEditRequest::new(image, prompt);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        tracing::debug!(
            "Gemini returned {} candidate(s), finish reason: {:?}",
            response.candidates.len(),
            response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
        );

        Ok(response)
    }
}
