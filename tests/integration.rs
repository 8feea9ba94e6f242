use ai_photo_editor::ai::{GeminiImageClient, ImageGenerationService};
use ai_photo_editor::config::ApiKey;
use ai_photo_editor::{EditMode, Error, Hotspot, ImageFile, PhotoEditor, Session};
use wiremock::matchers::{body_string_contains, header, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_CONTENT_PATH: &str = r"^/v1beta/models/[^/:]+:generateContent$";
const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

fn gemini_editor(session: Session, server: &MockServer) -> PhotoEditor {
    let base_url = server.uri();
    PhotoEditor::with_connector(
        session,
        Box::new(move |api_key: &ApiKey| {
            Box::new(GeminiImageClient::new(api_key.clone()).with_base_url(base_url.clone()))
                as Box<dyn ImageGenerationService>
        }),
    )
}

async fn jpeg_on_disk(dir: &tempfile::TempDir) -> ImageFile {
    let path = dir.path().join("portrait.jpg");
    std::fs::write(&path, JPEG_BYTES).unwrap();
    ImageFile::from_path(&path).await.unwrap()
}

#[tokio::test]
async fn test_remove_at_hotspot_returns_png_data_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .and(header("x-goog-api-key", "session-key"))
        .and(body_string_contains("(x: 120, y: 340)"))
        .and(body_string_contains("\"mimeType\":\"image/jpeg\""))
        .and(body_string_contains("\"responseModalities\":[\"IMAGE\"]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" }
                    }]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::with_api_key("session-key"), &server);

    let result = editor
        .generate_edited_image(&file, "the coffee cup", Hotspot::new(120, 340), EditMode::Remove)
        .await
        .unwrap();

    assert!(result.starts_with("data:image/png;base64,"));

    // The result can be fed straight back in for a follow-up edit.
    let chained = ImageFile::from_data_url(&result, "edited.png").unwrap();
    assert_eq!(chained.mime_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_missing_credential_never_reaches_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::new(None), &server);

    let edit = editor
        .generate_edited_image(&file, "hat", Hotspot::new(1, 1), EditMode::Add)
        .await;
    let background = editor.generate_replaced_background_image(&file, "beach").await;
    let filter = editor.generate_filtered_image(&file, "anime").await;
    let adjust = editor.generate_adjusted_image(&file, "brighter").await;

    for result in [edit, background, filter, adjust] {
        assert!(matches!(result, Err(Error::MissingCredential)));
    }
}

#[tokio::test]
async fn test_prompt_block_surfaces_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {
                "blockReason": "PROHIBITED_CONTENT",
                "blockReasonMessage": "The prompt violates policy"
            }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::with_api_key("k"), &server);

    let err = editor
        .generate_filtered_image(&file, "something unsafe")
        .await
        .unwrap_err();

    match err {
        Error::Blocked { reason, message } => {
            assert_eq!(reason, "PROHIBITED_CONTENT");
            assert_eq!(message.as_deref(), Some("The prompt violates policy"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_safety_finish_without_image_is_abnormal_finish() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::with_api_key("k"), &server);

    let err = editor
        .generate_adjusted_image(&file, "darker")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AbnormalFinish { ref reason, .. } if reason == "SAFETY"));
    assert!(err.to_string().contains("adjustment"));
}

#[tokio::test]
async fn test_http_error_status_is_not_normalized_into_model_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::with_api_key("bad"), &server);

    let err = editor
        .generate_replaced_background_image(&file, "mountains")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 403, .. }));
}

#[tokio::test]
async fn test_concurrent_edits_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .and(body_string_contains("synthwave"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
            ]}}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT_PATH))
        .and(body_string_contains("warmer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/jpeg", "data": "BBBB" } }
            ]}}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = jpeg_on_disk(&dir).await;
    let editor = gemini_editor(Session::with_api_key("k"), &server);

    let (filtered, adjusted) = tokio::join!(
        editor.generate_filtered_image(&file, "synthwave"),
        editor.generate_adjusted_image(&file, "warmer"),
    );

    assert_eq!(filtered.unwrap(), "data:image/png;base64,AAAA");
    assert_eq!(adjusted.unwrap(), "data:image/jpeg;base64,BBBB");
}
