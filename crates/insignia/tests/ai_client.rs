use chrono::NaiveDate;
use insignia::ai::{AiServiceError, GeminiClient};
use insignia::config::AiConfig;
use insignia::generator::{generate_platform_data, GenerationOptions, Sampler};
use insignia::platform::PopulatedUnitDetail;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn sample_unit() -> PopulatedUnitDetail {
    let options = GenerationOptions {
        project_count: 1,
        reference_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    };
    let data = generate_platform_data(&options, &mut Sampler::seeded(30)).expect("dataset");
    let unit = data.units().next().cloned().expect("at least one unit");
    unit
}

fn client(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(&AiConfig {
        api_key: api_key.map(str::to_string),
        model: "gemini-test".to_string(),
        base_url: server.uri(),
    })
}

#[tokio::test]
async fn missing_key_fails_without_calling_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, None);
    let err = client
        .generate_property_description(&sample_unit())
        .await
        .expect_err("no key configured");
    assert_eq!(err, AiServiceError::MissingApiKey);
    assert_eq!(err.to_string(), "API_KEY for Gemini is not configured.");

    let err = client
        .analyze_contract("JVBERi0=", "application/pdf", "Who signs?")
        .await
        .expect_err("no key configured");
    assert_eq!(err, AiServiceError::MissingApiKey);
}

#[tokio::test]
async fn description_text_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Bright corner residence." }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server, Some("test-key"))
        .generate_property_description(&sample_unit())
        .await
        .expect("description");
    assert_eq!(text, "Bright corner residence.");
}

#[tokio::test]
async fn rejected_key_is_reported_as_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server, Some("wrong"))
        .analyze_contract("JVBERi0=", "application/pdf", "Who signs?")
        .await
        .expect_err("key rejected");
    assert_eq!(err, AiServiceError::InvalidApiKey);
}

#[tokio::test]
async fn other_failures_name_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let err = client(&server, Some("test-key"))
        .analyze_contract("JVBERi0=", "application/pdf", "Who signs?")
        .await
        .expect_err("server error");
    assert_eq!(
        err.to_string(),
        "Failed to analyze contract: backend unavailable"
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;
    let err = client(&server, Some("test-key"))
        .generate_property_description(&sample_unit())
        .await
        .expect_err("no text");
    assert_eq!(err, AiServiceError::EmptyResponse);
}
