//! Turn an HTTP status and body from the resolution API into a payload or a typed error.

use serde_json::Value;

use crate::error::ResolveError;

const DEFAULT_UPSTREAM_MESSAGE: &str = "upstream reported an error";
const DEFAULT_VALIDATION_MESSAGE: &str = "request validation failed";

/// Interprets one response. Only HTTP 200 with a JSON body and no `error`
/// field yields a payload.
pub fn interpret(status: u32, body: &[u8], endpoint: &str) -> Result<Value, ResolveError> {
    match status {
        200 => {
            let payload: Value = serde_json::from_slice(body)
                .map_err(|e| ResolveError::InvalidPayload(e.to_string()))?;
            match upstream_error(&payload) {
                Some(message) => Err(ResolveError::Upstream(message)),
                None => Ok(payload),
            }
        }
        404 => Err(ResolveError::EndpointNotFound(endpoint.to_string())),
        401 => Err(ResolveError::InvalidCredential),
        422 => {
            let detail = serde_json::from_slice::<Value>(body).ok();
            Err(ResolveError::Validation(validation_message(detail.as_ref())))
        }
        429 => Err(ResolveError::RateLimited),
        500..=u32::MAX => Err(ResolveError::UpstreamServer(status)),
        _ => Err(ResolveError::UnexpectedStatus(status)),
    }
}

/// Message for a truthy payload-level `error` field, if any.
fn upstream_error(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => Some(
            obj.get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_UPSTREAM_MESSAGE)
                .to_string(),
        ),
        _ => Some(DEFAULT_UPSTREAM_MESSAGE.to_string()),
    }
}

/// Joins the per-field complaints of a 422 body (FastAPI `detail` shape).
pub fn validation_message(body: Option<&Value>) -> String {
    match body.and_then(|b| b.get("detail")) {
        Some(Value::Array(items)) => items
            .iter()
            .map(detail_item_message)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => DEFAULT_VALIDATION_MESSAGE.to_string(),
    }
}

fn detail_item_message(item: &Value) -> String {
    let Value::Object(obj) = item else {
        return match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    };
    let loc = obj.get("loc").and_then(Value::as_array);
    if obj.get("type").and_then(Value::as_str) == Some("missing") {
        if let Some(loc) = loc {
            return format!("missing field: {}", join_loc(loc, "."));
        }
    }
    if let Some(msg) = obj.get("msg").and_then(Value::as_str).filter(|m| !m.is_empty()) {
        return msg.to_string();
    }
    match loc {
        Some(loc) => join_loc(loc, ","),
        None => item.to_string(),
    }
}

fn join_loc(loc: &[Value], sep: &str) -> String {
    loc.iter()
        .map(|part| match part {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
}
