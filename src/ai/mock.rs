use super::gemini::types::{Candidate, Content, GenerateContentResponse, InlineData, Part};
use super::ImageGenerationService;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory generation backend that replays canned responses.
#[derive(Clone)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    images: Arc<Mutex<Vec<InlineData>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            images: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queue a response carrying a single inline image part.
    pub fn with_image_response(self, mime_type: &str, data: &str) -> Self {
        self.with_response(image_response(mime_type, data))
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Image parts received so far, in call order.
    pub fn images(&self) -> Vec<InlineData> {
        self.images.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

fn image_response(mime_type: &str, data: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: data.to_string(),
                    },
                }],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        prompt_feedback: None,
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate(&self, image: &InlineData, prompt: &str) -> Result<GenerateContentResponse> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.prompts.lock().unwrap().push(prompt.to_string());
        self.images.lock().unwrap().push(image.clone());

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Echo the source image back as the "edited" result
            Ok(image_response(&image.mime_type, &image.data))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
