//! Provider client tests against a local mock HTTP server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use analysis_service_lib::build_summarizer;
use analysis_service_lib::client::{OpenAiClient, TextAnalysisProvider};
use analysis_service_lib::config::OpenAiConfig;
use analysis_service_lib::service::SummaryService;
use common::AppError;

fn config(server: &MockServer) -> OpenAiConfig {
    OpenAiConfig {
        api_key: Some("test-key".to_string()),
        api_url: format!("{}/v1/chat/completions", server.uri()),
        model: "gpt-3.5-turbo".to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

#[tokio::test]
async fn test_complete_sends_bearer_key_and_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "gpt-3.5-turbo", "max_tokens": 500 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config(&server)).unwrap();
    let content = client.complete("hello").await.unwrap();

    assert_eq!(content, "{\"ok\":true}");
}

#[tokio::test]
async fn test_complete_non_success_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config(&server)).unwrap();
    let result = client.complete("hello").await;

    assert!(matches!(
        result,
        Err(AppError::Upstream(msg)) if msg == "Text-analysis provider returned status 429"
    ));
}

#[tokio::test]
async fn test_complete_without_choices_returns_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config(&server)).unwrap();
    assert_eq!(client.complete("hello").await.unwrap(), "");
}

#[tokio::test]
async fn test_summarizer_end_to_end() {
    let server = MockServer::start().await;
    let reply = "Here you go:\n{\n\"isHealthRelated\": true,\n\"hasEnoughInfo\": true,\n\"errorMessage\": null,\n\"analysis\": {\"background\": \"Runner\", \"concerns\": \"Knee pain\", \"keyQuestions\": \"How long?\",},\n}";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(reply)))
        .mount(&server)
        .await;

    let summarizer = build_summarizer(&config(&server)).unwrap();
    let analysis = summarizer.summarize("My knee hurts after running").await.unwrap();

    assert!(analysis.is_health_related);
    let details = analysis.analysis.unwrap();
    assert_eq!(details.concerns.as_deref(), Some("Knee pain"));
    assert_eq!(details.key_questions.as_deref(), Some("How long?"));
}
