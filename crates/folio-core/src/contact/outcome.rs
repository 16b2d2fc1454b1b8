//! Submission outcomes and the status line they produce.

use serde::Serialize;

use super::mailto::MailHandoff;

/// How a status line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Success.
    Ok,
    /// Anything the visitor should act on.
    Error,
}

/// The status line shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Styling.
    pub kind: StatusKind,
    /// Message text.
    pub message: String,
}

impl Status {
    /// Creates a success status.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Ok,
            message: message.into(),
        }
    }

    /// Creates an error status.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Returns true for an error-styled status.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Result of a submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Saved and emailed.
    Delivered,
    /// Saved, but the backend has no SMTP transport.
    SavedNoSmtp,
    /// Saved, but emailing failed for another reason.
    SavedDeliveryFailed {
        /// Error reported by the backend, if any.
        reason: Option<String>,
    },
    /// The backend path failed; the visitor's mail client takes over.
    TransportFailure {
        /// What went wrong.
        reason: String,
        /// Mail-client handoff carrying the draft.
        handoff: MailHandoff,
    },
}

impl SubmissionOutcome {
    /// Returns the message shown to the visitor.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Delivered => "Message sent! Check your inbox.",
            Self::SavedNoSmtp => {
                "Saved to inbox queue. Email not sent because SMTP is not configured."
            }
            Self::SavedDeliveryFailed { .. } => {
                "Saved, but email delivery failed. You can use the mail app fallback below."
            }
            Self::TransportFailure { .. } => "Direct send failed – opening your email client.",
        }
    }

    /// Returns the status line for this outcome.
    ///
    /// Only `Delivered` is ok-styled; a save without an email did not meet
    /// the visitor's expectation.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Delivered => Status::ok(self.message()),
            _ => Status::error(self.message()),
        }
    }

    /// Returns true if the form should be cleared.
    #[must_use]
    pub const fn clears_form(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns true if the backend stored the message.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        !matches!(self, Self::TransportFailure { .. })
    }

    /// Returns the mail-client handoff, if the backend path failed.
    #[must_use]
    pub const fn handoff(&self) -> Option<&MailHandoff> {
        match self {
            Self::TransportFailure { handoff, .. } => Some(handoff),
            _ => None,
        }
    }

    /// Returns a short machine-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::SavedNoSmtp => "saved_no_smtp",
            Self::SavedDeliveryFailed { .. } => "saved_delivery_failed",
            Self::TransportFailure { .. } => "transport_failure",
        }
    }
}
