//! Error handling and custom error types
//!
//! Provides unified error handling across the editor using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not found. Please enter your Gemini API key (GEMINI_API_KEY) and try again.")]
    MissingCredential,

    #[error("Image encoding error: {0}")]
    Encoding(String),

    #[error("{}", blocked_message(.reason, .message.as_deref()))]
    Blocked {
        reason: String,
        message: Option<String>,
    },

    #[error("Image generation for {context} stopped unexpectedly. Reason: {reason}. This often relates to safety settings.")]
    AbnormalFinish { context: String, reason: String },

    #[error("{}", no_image_message(.context, .text.as_deref()))]
    NoImageReturned {
        context: String,
        text: Option<String>,
    },

    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn blocked_message(reason: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Request was blocked. Reason: {}. {}", reason, message),
        None => format!("Request was blocked. Reason: {}.", reason),
    }
}

fn no_image_message(context: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!(
            "The AI model did not return an image for the {}. The model responded with text: \"{}\"",
            context, text
        ),
        None => format!(
            "The AI model did not return an image for the {}. This can happen due to safety filters or if the request is too complex. Please try rephrasing your prompt to be more direct.",
            context
        ),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
