//! Integration tests for the FitGenius relay
//!
//! Each test drives the real router through `axum-test` while a wiremock
//! server plays the chat-completion API.

mod nutrition;
