//! Response triage for image generation calls
//!
//! `classify` applies a fixed order: prompt block, then image, then abnormal
//! finish, then the text-only fallback. The first match wins.

use crate::ai::gemini::types::{GenerateContentResponse, InlineData, FINISH_REASON_STOP};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Image(InlineData),
    Blocked {
        reason: String,
        message: Option<String>,
    },
    AbnormalFinish {
        reason: String,
    },
    NoImage {
        text: Option<String>,
    },
}

pub fn classify(response: &GenerateContentResponse) -> GenerationOutcome {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return GenerationOutcome::Blocked {
                reason: reason.clone(),
                message: feedback.block_reason_message.clone(),
            };
        }
    }

    let candidate = response.candidates.first();

    if let Some(image) = candidate.and_then(|c| c.inline_image()) {
        return GenerationOutcome::Image(image.clone());
    }

    if let Some(reason) = candidate.and_then(|c| c.finish_reason.as_deref()) {
        if reason != FINISH_REASON_STOP {
            return GenerationOutcome::AbnormalFinish {
                reason: reason.to_string(),
            };
        }
    }

    let text = response
        .text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    GenerationOutcome::NoImage { text }
}

/// Turn a response into a data URL, or the error describing why there is none.
pub fn interpret(response: &GenerateContentResponse, context: &str) -> Result<String> {
    match classify(response) {
        GenerationOutcome::Image(image) => {
            tracing::info!("Received {} image for {}", image.mime_type, context);
            Ok(image.to_data_url())
        }
        GenerationOutcome::Blocked { reason, message } => {
            tracing::error!(
                "Request for {} was blocked: {} {:?}",
                context,
                reason,
                message
            );
            Err(Error::Blocked { reason, message })
        }
        GenerationOutcome::AbnormalFinish { reason } => {
            tracing::error!("Generation for {} finished with {}", context, reason);
            Err(Error::AbnormalFinish {
                context: context.to_string(),
                reason,
            })
        }
        GenerationOutcome::NoImage { text } => {
            tracing::error!("Model returned no image for {}: {:?}", context, text);
            Err(Error::NoImageReturned {
                context: context.to_string(),
                text,
            })
        }
    }
}
