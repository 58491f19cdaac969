use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::SummarizerError;
use crate::pipeline::body_as_text;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from a v2 (`requestContext.http.method`) or v1 (`httpMethod`) event.
#[must_use]
pub fn event_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

/// Request path from a v2 (`rawPath`) or v1 (`path`) event, without the
/// `/{stage}` prefix a named API Gateway stage adds.
#[must_use]
pub fn event_path(payload: &Value) -> &str {
    let path = v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/");

    let stage = v_str(payload, &["requestContext", "stage"]).filter(|s| *s != "$default");
    let Some(rest) = stage.and_then(|stage| path.strip_prefix('/')?.strip_prefix(stage)) else {
        return path;
    };

    if rest.is_empty() {
        "/"
    } else if rest.starts_with('/') {
        rest
    } else {
        path
    }
}

/// Request body as text, decoding base64 when the gateway flagged it.
///
/// # Errors
///
/// Returns `Validation` if a base64 body cannot be decoded to UTF-8 text.
pub fn event_body(payload: &Value) -> Result<String, SummarizerError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(String::new());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| SummarizerError::Validation(format!("Invalid base64 body: {e}")))?;
    body_as_text(&bytes).map(ToString::to_string)
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
