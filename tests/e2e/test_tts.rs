use crate::helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_list_voices() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/v1/tts/voices").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let voices = body["voices"].as_array().unwrap();

    assert_eq!(body["total_count"], voices.len());
    assert!(body["timestamp"].is_string());

    assert!(voices
        .iter()
        .any(|v| v["id"] == "Joanna" && v["locale"] == "en-US"));
}

#[tokio::test]
async fn it_should_search_voices_by_language() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/v1/tts/voices/search",
            &json!({ "language": "en", "limit": 5 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let voices = body["voices"].as_array().unwrap();

    assert!(!voices.is_empty());
    assert!(voices.len() <= 5);
    for voice in voices {
        assert!(voice["locale"].as_str().unwrap().starts_with("en"));
    }

    assert_eq!(body["filtered_count"], voices.len());
    assert_eq!(body["filters_applied"]["language"], "en");
}

#[tokio::test]
async fn it_should_search_voices_by_gender() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/v1/tts/voices/search", &json!({ "gender": "Male" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let voices = response.body.as_ref().unwrap()["voices"]
        .as_array()
        .unwrap()
        .clone();
    assert!(!voices.is_empty());
    for voice in &voices {
        assert_eq!(voice["gender"], "Male");
    }
}

#[tokio::test]
async fn it_should_validate_search_limit() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/v1/tts/voices/search", &json!({ "limit": 0 }))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .post("/api/v1/tts/voices/search", &json!({ "limit": 200 }))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_synthesize_with_known_voice() {
    let ctx = TestContext::new().await.unwrap();

    let text = "Hello, this is a test message for text to speech.";
    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": text, "voice": "Joanna" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["voice_used"], "Joanna");
    assert!(body["audio_size"].as_u64().unwrap() > 0);
    assert_eq!(
        body["parameters"]["text_length"].as_u64().unwrap() as usize,
        text.chars().count()
    );
}

#[tokio::test]
async fn it_should_reject_unknown_voice() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": "Hello, world!", "voice": "invalid-voice-name" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("not found");
}

#[tokio::test]
async fn it_should_enforce_text_length_limits() {
    let ctx = TestContext::new().await.unwrap();

    // Empty text
    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": "", "voice": "Joanna" }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    // Text over the 10,000 character limit
    let long_text = "a".repeat(10001);
    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": long_text, "voice": "Joanna" }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn it_should_validate_speed_parameter() {
    let ctx = TestContext::new().await.unwrap();

    for speed in [0.4, 2.1, -1.0] {
        let response = ctx
            .client
            .post(
                "/api/v1/tts/synthesize",
                &json!({ "text": "Testing speed", "voice": "Joanna", "speed": speed }),
            )
            .await
            .unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": "Testing speed", "voice": "Joanna", "speed": 1.5 }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_stream_audio_with_headers() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize/stream",
            &json!({ "text": "Hello, this is a streaming test.", "voice": "Takumi" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type").unwrap(), "audio/mpeg");
    response
        .assert_header_exists("content-disposition")
        .assert_header_exists("x-character-count")
        .assert_header_exists("x-voice-used");

    assert!(!response.body_bytes.is_empty());
}

#[tokio::test]
async fn it_should_surface_provider_failures() {
    let ctx = TestContext::with_failing_tts().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/v1/tts/synthesize",
            &json!({ "text": "Hello, world!", "voice": "Joanna" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
