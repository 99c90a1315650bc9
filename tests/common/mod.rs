//! Common test utilities for the FitGenius relay
//!
//! Provides a harness that runs the real router against a wiremock server
//! standing in for the chat-completion API, plus request builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use bytes::Bytes;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fitgenius_relay::{routes, AppState, Config};

/// Test configuration constants
pub mod constants {
    /// Default test API key for OpenAI
    pub const TEST_OPENAI_API_KEY: &str = "test-openai-api-key";
    /// Image ceiling used by the harness
    pub const TEST_MAX_IMAGE_BYTES: usize = 4 * 1024;
    /// Multipart boundary used by [`super::multipart_body`]
    pub const BOUNDARY: &str = "fitgenius-test-boundary";
}

/// Test harness for relay route tests
///
/// - Mock upstream API (wiremock)
/// - Real app router with all middleware
pub struct RelayTestHarness {
    pub server: TestServer,
    pub upstream: MockServer,
}

impl RelayTestHarness {
    /// Harness with an upstream credential configured
    pub async fn new() -> Self {
        Self::with_env(&[("OPENAI_API_KEY", constants::TEST_OPENAI_API_KEY)]).await
    }

    /// Harness with no upstream credential
    pub async fn without_credential() -> Self {
        Self::with_env(&[]).await
    }

    /// Harness with extra environment entries on top of the test defaults
    pub async fn with_env(extra: &[(&str, &str)]) -> Self {
        let upstream = MockServer::start().await;

        let mut vars: HashMap<String, String> = HashMap::new();
        vars.insert("OPENAI_API_URL".into(), upstream.uri());
        vars.insert(
            "MAX_IMAGE_BYTES".into(),
            constants::TEST_MAX_IMAGE_BYTES.to_string(),
        );
        for (key, value) in extra {
            vars.insert(key.to_string(), value.to_string());
        }

        let config = Config::from_lookup(|key| vars.get(key).cloned())
            .expect("Failed to build test config");
        let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, upstream }
    }

    /// Requests the mock upstream has received so far
    pub async fn upstream_requests(&self) -> Vec<wiremock::Request> {
        self.upstream.received_requests().await.unwrap_or_default()
    }

    /// JSON bodies the mock upstream has received so far
    pub async fn upstream_bodies(&self) -> Vec<Value> {
        self.upstream_requests()
            .await
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("upstream body is JSON"))
            .collect()
    }
}

/// Mock upstream responses
pub mod upstream_mocks {
    use super::*;

    /// Chat completion whose first choice carries `content`
    pub fn completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200 }
        })
    }

    /// Reply with `content` to every chat completion call
    pub async fn mock_reply(server: &MockServer, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
            .mount(server)
            .await;
    }

    /// Reply with an OpenAI-style error body
    pub async fn mock_error(server: &MockServer, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "message": message,
                    "type": "invalid_request_error",
                    "code": null
                }
            })))
            .mount(server)
            .await;
    }

    /// Reply only after `delay`
    pub async fn mock_slow_reply(server: &MockServer, content: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(content))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }

    /// Fail the test if the upstream is called at all
    pub async fn expect_no_calls(server: &MockServer) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }
}

/// One part of a hand-built multipart body
pub struct FormPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FormPart<'a> {
    /// An `image` file part
    pub fn image(data: &'a [u8], content_type: &'a str) -> Self {
        Self {
            name: "image",
            file_name: Some("refeicao.jpg"),
            content_type: Some(content_type),
            data,
        }
    }

    /// A plain text part
    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }
}

/// Encode parts as `multipart/form-data` using [`constants::BOUNDARY`]
pub fn multipart_body(parts: &[FormPart<'_>]) -> Bytes {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", constants::BOUNDARY).as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{}\"", file_name));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", constants::BOUNDARY).as_bytes());
    Bytes::from(body)
}

/// Content type header value matching [`multipart_body`]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", constants::BOUNDARY)
}

/// Sample payloads
pub mod test_data {
    /// Workout reply in the shape the system instruction asks for
    pub const WORKOUT_REPLY: &str = r#"[
        {
            "dia": "Segunda-feira",
            "gruposMusculares": ["Peito", "Tríceps"],
            "exercicios": [
                {"nome": "Supino reto", "series": 4, "repeticoes": "8-10", "descanso": "90s", "descricao": "Controle a descida"}
            ]
        },
        {
            "dia": "Quarta-feira",
            "gruposMusculares": ["Costas", "Bíceps"],
            "exercicios": [
                {"nome": "Remada curvada", "series": 4, "repeticoes": "10", "descanso": "90s", "descricao": "Coluna neutra"}
            ]
        }
    ]"#;

    /// Nutrition goals reply
    pub const NUTRITION_REPLY: &str = r#"{"calorias": 2400, "proteinas": 160, "carboidratos": 270, "gorduras": 70, "explicacao": "Leve superávit para ganho de massa."}"#;

    /// Food analysis reply
    pub const FOOD_REPLY: &str = r#"{"alimentos": [{"nome": "Arroz branco", "quantidade": 150, "calorias": 195, "proteinas": 4, "carboidratos": 42, "gorduras": 0.5}, {"nome": "Frango grelhado", "quantidade": 120, "calorias": 198, "proteinas": 37, "carboidratos": 0, "gorduras": 4.3}]}"#;

    /// A few bytes standing in for a JPEG
    pub const FAKE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
}
