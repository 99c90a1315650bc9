//! Nutrition goals endpoint integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use fitgenius_relay::relay::schema::NutritionGoalsResponse;

use crate::common::{test_data, upstream_mocks, RelayTestHarness};

const ROUTE: &str = "/api/gerar-metas-nutricionais";

#[tokio::test]
async fn test_generates_nutrition_goals() {
    let harness = RelayTestHarness::new().await;
    upstream_mocks::mock_reply(&harness.upstream, test_data::NUTRITION_REPLY).await;

    let response = harness
        .server
        .post(ROUTE)
        .json(&json!({ "prompt": "Mulher, 28 anos, 62kg, ganho de massa" }))
        .await;

    response.assert_status_ok();
    let body: NutritionGoalsResponse = response.json();
    assert!(body.sucesso);
    assert_eq!(body.metas.calorias, 2400.0);
    assert_eq!(body.metas.proteinas, 160.0);
    assert_eq!(body.metas.explicacao, "Leve superávit para ganho de massa.");
}

#[tokio::test]
async fn test_token_budget_and_temperature() {
    let harness = RelayTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "temperature": 0.7, "max_tokens": 1000 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(upstream_mocks::completion_body(test_data::NUTRITION_REPLY)),
        )
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let response = harness
        .server
        .post(ROUTE)
        .json(&json!({ "prompt": "manutenção de peso" }))
        .await;

    response.assert_status_ok();
    let bodies = harness.upstream_bodies().await;
    assert!(bodies[0]["messages"][0]["content"]
        .as_str()
        .unwrap()
        .starts_with("Você é um nutricionista."));
}

#[tokio::test]
async fn test_missing_prompt_is_bad_request() {
    let harness = RelayTestHarness::new().await;
    upstream_mocks::expect_no_calls(&harness.upstream).await;

    let response = harness.server.post(ROUTE).json(&json!({ "prompt": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "sucesso": false, "error": "Prompt obrigatório para gerar metas." })
    );
}

#[tokio::test]
async fn test_non_string_prompt_is_bad_request() {
    let harness = RelayTestHarness::new().await;
    upstream_mocks::expect_no_calls(&harness.upstream).await;

    let response = harness.server.post(ROUTE).json(&json!({ "prompt": 42 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["sucesso"], false);
}

#[tokio::test]
async fn test_missing_credential_is_server_error() {
    let harness = RelayTestHarness::without_credential().await;

    let response = harness
        .server
        .post(ROUTE)
        .json(&json!({ "prompt": "emagrecimento" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["sucesso"], false);
    assert_eq!(body["error"], "Chave da OpenAI não configurada.");
}

#[tokio::test]
async fn test_non_json_reply_is_server_error() {
    let harness = RelayTestHarness::new().await;
    upstream_mocks::mock_reply(&harness.upstream, "calorias: 2000").await;

    let response = harness
        .server
        .post(ROUTE)
        .json(&json!({ "prompt": "emagrecimento" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Erro ao gerar metas.");
    assert!(body["detalhes"].as_str().unwrap().contains("not valid JSON"));
}

#[tokio::test]
async fn test_upstream_server_error_is_surfaced() {
    let harness = RelayTestHarness::new().await;
    upstream_mocks::mock_error(&harness.upstream, 503, "The server is overloaded").await;

    let response = harness
        .server
        .post(ROUTE)
        .json(&json!({ "prompt": "emagrecimento" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detalhes"].as_str().unwrap().contains("503"));
}
