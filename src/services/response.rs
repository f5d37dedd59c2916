//! Response classification
//!
//! Every backend result is turned into a payload or an [`ApiError`] here.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::services::transport::{HttpResponse, TransportOutcome};
use crate::utils::errors::{ApiError, ApiResult};

/// Classify a status code and body.
///
/// 204 yields `true`; 200/201 yield the body, or `null` when it is empty.
pub fn classify(status: u16, body: Option<Value>) -> ApiResult<Value> {
    match status {
        200 | 201 => Ok(body.unwrap_or(Value::Null)),
        204 => Ok(Value::Bool(true)),
        400 => Err(ApiError::BadRequest(body_message(body.as_ref(), "Bad request."))),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        404 => Err(ApiError::NotFound),
        409 => Err(ApiError::Conflict(body_message(body.as_ref(), "Conflict with current state."))),
        422 => Err(ApiError::Unprocessable(body_message(body.as_ref(), "Unprocessable entity."))),
        _ => Err(ApiError::Unknown("Error processing request.".to_string())),
    }
}

pub fn classify_outcome(outcome: TransportOutcome) -> ApiResult<Value> {
    match outcome {
        TransportOutcome::Response(HttpResponse { status, body }) => classify(status, body),
        TransportOutcome::NoResponse(reason) => Err(ApiError::NullResponse(reason)),
    }
}

/// Deserialize a classified payload into its wire type
pub fn decode<T: DeserializeOwned>(payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

fn body_message(body: Option<&Value>, fallback: &str) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
