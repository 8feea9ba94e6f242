//! Generative image service integration
//!
//! Provides the seam between the editor and the remote image model: one
//! multimodal `generateContent` round trip per edit.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiImageClient;
pub use mock::MockImageGenerationClient;

use crate::ai::gemini::types::{GenerateContentResponse, InlineData};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Send the source image and prompt once and return the raw response.
    async fn generate(&self, image: &InlineData, prompt: &str) -> Result<GenerateContentResponse>;
}
