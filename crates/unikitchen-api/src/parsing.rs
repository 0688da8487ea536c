//! Response body decoding.
//!
//! Pure functions over raw bytes so they can be tested without a backend.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::ServerErrorBody;

/// Decode a JSON body into `T`.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a body without assuming its shape.
///
/// JSON bodies are returned as parsed, anything else as a JSON string of the
/// raw text, and an empty (or whitespace) body as `null`.
pub fn decode_verbatim(body: &[u8]) -> Value {
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.into_owned()))
}

/// Plain-text body, e.g. a confirmation message.
pub fn parse_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Pull a description out of an error response.
///
/// Prefers the service's error envelope and falls back to a short plain-text
/// body. HTML error pages and empty bodies yield `None`.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    if let Ok(envelope) = serde_json::from_slice::<ServerErrorBody>(body) {
        return envelope.summary();
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() || text.starts_with('<') || text.len() > 200 {
        return None;
    }
    Some(text.to_string())
}
