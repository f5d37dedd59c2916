//! Mock backend server for testing
//!
//! This module provides a mock HTTP server standing in for the events,
//! groups and recommendation backends. It uses wiremock to create
//! configurable mock responses.

use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use yallanow_client::config::Settings;

pub const EVENTS_PATH: &str = "/events";
pub const GROUPS_PATH: &str = "/groups";
pub const FEED_PATH: &str = "/recommendations";
pub const INTERACTIONS_PATH: &str = "/interactions";

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Option<Value>,
    pub raw_body: Option<String>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body: None,
            raw_body: None,
        }
    }
}

impl MockResponseConfig {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            raw_body: Some(body.to_string()),
            ..Self::default()
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    fn template(&self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);
        if let Some(body) = &self.body {
            response = response.set_body_json(body.clone());
        } else if let Some(raw) = &self.raw_body {
            response = response.set_body_string(raw.clone());
        }
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Settings whose base URLs all point at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        let uri = self.server.uri();
        settings.api.events_base_url = format!("{}{}", uri, EVENTS_PATH);
        settings.api.groups_base_url = format!("{}{}", uri, GROUPS_PATH);
        settings.api.feed_base_url = format!("{}{}", uri, FEED_PATH);
        settings.api.interactions_base_url = format!("{}{}", uri, INTERACTIONS_PATH);
        settings.api.timeout_seconds = Some(5);
        settings
    }

    /// Mount a response for `verb` on `route`, requiring the test token
    pub async fn mock_authenticated(&self, verb: &str, route: &str, config: MockResponseConfig) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("Authorization", super::TEST_TOKEN))
            .respond_with(config.template())
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount a response for `verb` on `route` without header requirements
    pub async fn mock_open(&self, verb: &str, route: &str, config: MockResponseConfig) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// All requests received so far
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// JSON body of the last request received on `route`
    pub async fn last_body(&self, route: &str) -> Option<Value> {
        self.received()
            .await
            .into_iter()
            .filter(|r| r.url.path() == route)
            .last()
            .and_then(|r| serde_json::from_slice(&r.body).ok())
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
