mod common;

use hirelens_llm::azure::AzureOpenAiClient;
use hirelens_llm::traits::LlmClient;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETION_BODY: &str = r#"{
    "id": "chatcmpl-1",
    "model": "gpt-4o",
    "choices": [
        {
            "index": 0,
            "finish_reason": "stop",
            "message": { "role": "assistant", "content": "Acme is hiring in Austin." }
        }
    ],
    "usage": { "prompt_tokens": 120, "completion_tokens": 9, "total_tokens": 129 }
}"#;

#[tokio::test]
async fn azure_generate_hits_deployment_route() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/research-gpt/chat/completions"))
        .and(query_param("api-version", "2025-01-01-preview"))
        .and(header("api-key", "azure-secret"))
        .and(body_partial_json(serde_json::json!({
            "temperature": 0.4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(COMPLETION_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = AzureOpenAiClient::new(
        &server.uri(),
        "research-gpt".into(),
        "azure-secret".into(),
        None,
    )
    .unwrap();

    let resp = client
        .generate("Summarize this article", None, None, Some(0.4))
        .await
        .unwrap();

    assert_eq!(resp.text, "Acme is hiring in Austin.");
    assert_eq!(resp.model.as_deref(), Some("gpt-4o"));
    assert_eq!(resp.tokens_used, Some(129));
}

#[tokio::test]
async fn azure_summarize_article_carries_the_editorial_focus() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/research-gpt/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "temperature": 0.4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(COMPLETION_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = AzureOpenAiClient::new(
        &server.uri(),
        "research-gpt".into(),
        "azure-secret".into(),
        Some("2025-01-01-preview".into()),
    )
    .unwrap();

    let summary = client
        .summarize_article("Acme", "Acme opened a new office.", 4000)
        .await
        .unwrap();
    assert_eq!(summary, "Acme is hiring in Austin.");

    // The single recorded request must contain the fixed focus lines.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Workforce trends of Acme"));
    assert!(prompt.contains("hiring signals or relevance for staffing services"));
    assert!(body.get("model").is_none());
}

#[tokio::test]
async fn azure_api_error_surfaces_provider_message() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"error":{"message":"deployment not found"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = AzureOpenAiClient::new(
        &server.uri(),
        "missing-deployment".into(),
        "azure-secret".into(),
        None,
    )
    .unwrap();

    let err = client
        .generate("hello", None, None, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("deployment not found"));
}
