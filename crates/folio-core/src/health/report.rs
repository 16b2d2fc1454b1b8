//! Display-safe health report.

use folio_backend::HealthResponse;
use serde::Serialize;

/// Error shown when the health endpoint cannot be reached or understood.
pub const HEALTH_UNREACHABLE: &str = "Unable to reach backend health endpoint.";

/// Advisory report on the backend's email setup.
///
/// Absent fields were not reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Whether an SMTP transport is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_configured: Option<bool>,
    /// Address messages are delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_email: Option<String>,
    /// Address messages are sent from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Delivery mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Error detail, from the backend or from the probe itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    /// Report for a probe that could not complete. Only `error` is set.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            error: Some(HEALTH_UNREACHABLE.to_string()),
            ..Self::default()
        }
    }

    /// Returns true if SMTP was reported as configured.
    #[must_use]
    pub fn smtp_configured(&self) -> bool {
        self.smtp_configured.unwrap_or(false)
    }

    /// Returns true if the report carries an error.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Renders the report as display lines.
    ///
    /// The SMTP line is always present; the rest only when reported.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("SMTP configured: {}", self.smtp_configured())];
        if let Some(target) = &self.target_email {
            lines.push(format!("Target: {target}"));
        }
        if let Some(from) = &self.from_email {
            lines.push(format!("From: {from}"));
        }
        if let Some(mode) = &self.mode {
            lines.push(format!("Mode: {mode}"));
        }
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }
        lines
    }
}

impl From<HealthResponse> for HealthReport {
    fn from(response: HealthResponse) -> Self {
        Self {
            smtp_configured: response.smtp_configured,
            target_email: response.target_email,
            from_email: response.from_email,
            mode: response.mode,
            error: response.error,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_only_sets_error() {
        let report = HealthReport::unreachable();
        assert_eq!(report.error.as_deref(), Some(HEALTH_UNREACHABLE));
        assert!(report.smtp_configured.is_none());
        assert!(report.target_email.is_none());
        assert!(report.from_email.is_none());
        assert!(report.mode.is_none());
    }

    #[test]
    fn test_lines_full_report() {
        let report = HealthReport {
            smtp_configured: Some(true),
            target_email: Some("me@example.com".to_string()),
            from_email: Some("bot@example.com".to_string()),
            mode: Some("smtp".to_string()),
            error: None,
        };
        assert_eq!(
            report.lines(),
            vec![
                "SMTP configured: true",
                "Target: me@example.com",
                "From: bot@example.com",
                "Mode: smtp",
            ]
        );
    }

    #[test]
    fn test_lines_unreachable() {
        assert_eq!(
            HealthReport::unreachable().lines(),
            vec!["SMTP configured: false", HEALTH_UNREACHABLE]
        );
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_value(HealthReport::unreachable()).unwrap();
        assert_eq!(json, serde_json::json!({"error": HEALTH_UNREACHABLE}));
    }
}
