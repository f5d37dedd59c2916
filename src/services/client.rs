//! Shared request path of the resource services
//!
//! Resolves the token, issues exactly one request with it in the
//! `Authorization` header and hands back the raw transport outcome or the
//! classified payload.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::services::auth::TokenProvider;
use crate::services::response::classify_outcome;
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport, TransportOutcome};
use crate::utils::errors::{ApiError, ApiResult};
use crate::utils::logging::log_api_failure;

#[derive(Clone)]
pub struct ResourceClient {
    service: &'static str,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl ResourceClient {
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            service,
            base_url,
            tokens,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the collection root, or of `segments` below it
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Authenticated call returning the unclassified outcome
    pub async fn execute(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
    ) -> ApiResult<TransportOutcome> {
        let token = self.tokens.current_token().await?;

        let mut request = HttpRequest::new(method, url).header("Authorization", token);
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(self.transport.execute(request).await)
    }

    /// Authenticated call passed through the classifier
    pub async fn send(
        &self,
        operation: &str,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let result = match self.execute(method, url, body).await {
            Ok(outcome) => classify_outcome(outcome),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log_api_failure(self.service, operation, e);
        }
        result
    }

    pub fn log_failure(&self, operation: &str, error: &ApiError) {
        log_api_failure(self.service, operation, error);
    }
}

/// Serialize a request payload
pub fn to_body<T: Serialize>(payload: &T) -> ApiResult<Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}
