//! Wire types for the contact backend.

use serde::{Deserialize, Serialize};

/// Error string the backend uses when the message was stored but no SMTP
/// transport is configured.
pub const SMTP_NOT_CONFIGURED: &str = "SMTP not configured";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message text.
    pub message: String,
}

impl ContactRequest {
    /// Creates a new contact request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Response of `POST /api/contact`.
///
/// Missing flags default to `false`, so a body like `{}` reads as a rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// The backend accepted and stored the message.
    #[serde(default)]
    pub ok: bool,
    /// The backend also emailed the message.
    #[serde(default)]
    pub email_dispatched: bool,
    /// Error detail, present on rejection or failed dispatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    /// Returns true if the backend reports the SMTP-unconfigured sentinel.
    #[must_use]
    pub fn is_smtp_unconfigured(&self) -> bool {
        self.error.as_deref() == Some(SMTP_NOT_CONFIGURED)
    }
}

/// Response of `GET /api/contact/health`.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether an SMTP transport is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_configured: Option<bool>,
    /// Address messages are delivered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_email: Option<String>,
    /// Address messages are sent from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Delivery mode reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Error detail reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request_serialization() {
        let request = ContactRequest::new("Ada", "ada@example.com", "Hi");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }

    #[test]
    fn test_contact_response_defaults() {
        let response: ContactResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.ok);
        assert!(!response.email_dispatched);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_smtp_sentinel() {
        let response: ContactResponse = serde_json::from_str(
            r#"{"ok": true, "email_dispatched": false, "error": "SMTP not configured"}"#,
        )
        .unwrap();
        assert!(response.is_smtp_unconfigured());

        let other = ContactResponse {
            error: Some("smtp not configured".to_string()),
            ..ContactResponse::default()
        };
        assert!(!other.is_smtp_unconfigured());
    }

    #[test]
    fn test_health_response_partial() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"smtp_configured": true, "mode": "smtp", "extra": 1}"#)
                .unwrap();
        assert_eq!(health.smtp_configured, Some(true));
        assert_eq!(health.mode.as_deref(), Some("smtp"));
        assert!(health.target_email.is_none());
        assert!(health.error.is_none());
    }
}
