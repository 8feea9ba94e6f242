//! Shared wiremock helpers for Gemini client tests.

use crate::config::{ApiKey, Session};
use wiremock::matchers::{method, path_regex};
use wiremock::MockBuilder;

pub const GENERATE_CONTENT_PATH_REGEX: &str = r"^/v1beta/models/[^/:]+:generateContent$";

pub fn post_path_regex(regex: &str) -> MockBuilder {
    wiremock::Mock::given(method("POST")).and(path_regex(regex))
}

pub fn api_key(key: &str) -> ApiKey {
    Session::with_api_key(key)
        .api_key()
        .cloned()
        .expect("non-empty test key")
}

/// `generateContent` body holding a single inline image part.
pub fn image_response(mime_type: &str, data: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "inlineData": { "mimeType": mime_type, "data": data }
                }]
            },
            "finishReason": "STOP"
        }]
    })
}
