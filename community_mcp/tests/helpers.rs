//! Shared test helpers for community_mcp tests.

#![allow(dead_code)]

use std::sync::Mutex;

use community_core::{CommunityError, Config, Gateway, Request};
use community_mcp::tools::Scope;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Configuration with both identifier defaults set.
pub fn config_with_defaults() -> Config {
    Config::new(
        "test-token",
        Some("loc_default".to_string()),
        Some("grp_default".to_string()),
    )
    .expect("Failed to build config")
}

/// Configuration with no identifier defaults.
pub fn config_without_defaults() -> Config {
    Config::new("test-token", None, None).expect("Failed to build config")
}

/// Scope that relies entirely on the configured defaults.
pub fn default_scope() -> Scope {
    Scope::default()
}

/// Gateway that records every request instead of sending it.
pub struct StubGateway {
    requests: Mutex<Vec<Request>>,
    response: Value,
    failure: Option<(u16, String)>,
}

impl StubGateway {
    /// Answer every request with `{"ok": true}`.
    pub fn new() -> Self {
        Self::responding(json!({"ok": true}))
    }

    pub fn responding(response: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
            failure: None,
        }
    }

    /// Fail every request with the given status and raw body.
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Value::Null,
            failure: Some((status, body.to_string())),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The only request sent so far.
    pub fn single_request(&self) -> Request {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "Expected exactly one request");
        requests[0].clone()
    }
}

impl Gateway for StubGateway {
    async fn send(&self, request: Request) -> Result<Value, CommunityError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.failure {
            Some((status, body)) => Err(CommunityError::RemoteRequestFailed {
                method: request.method,
                path: request.path(),
                status: *status,
                body: body.clone(),
            }),
            None => Ok(self.response.clone()),
        }
    }
}
