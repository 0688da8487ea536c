//! Internal wire types for the recipe service.
//!
//! These types are internal to `unikitchen-api` and are not exposed to
//! consumers. External consumers should use the DTOs in `unikitchen-core`.

use serde::Deserialize;

/// Error envelope the service sends with non-success statuses.
///
/// Every field is optional; Spring fills them in inconsistently.
#[allow(dead_code)] // status/timestamp are only surfaced through Debug
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub status: Option<u16>,
    pub timestamp: Option<String>,
}

impl ServerErrorBody {
    /// Best human-readable description: `message`, else `error`.
    pub fn summary(&self) -> Option<String> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope() {
        let body: ServerErrorBody = serde_json::from_str(
            r#"{"timestamp":"2024-05-01T10:00:00","status":400,"error":"Bad Request","message":"Name must not be empty"}"#,
        )
        .unwrap();
        assert_eq!(body.status, Some(400));
        assert_eq!(body.summary().as_deref(), Some("Name must not be empty"));
    }

    #[test]
    fn test_summary_falls_back_to_error() {
        let body: ServerErrorBody =
            serde_json::from_str(r#"{"error":"Forbidden","message":"  "}"#).unwrap();
        assert_eq!(body.summary().as_deref(), Some("Forbidden"));
    }

    #[test]
    fn test_empty_envelope_has_no_summary() {
        let body: ServerErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.summary().is_none());
    }
}
