//! Mail-client handoff for when the backend cannot take a message.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use super::draft::SubmissionDraft;

/// Characters left as-is in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URI component.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// A `mailto:` target for the visitor's own mail client.
///
/// Built, not opened: whoever owns the UI performs the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailHandoff {
    /// Full `mailto:` URI.
    pub uri: String,
    /// Unencoded subject line.
    pub subject: String,
    /// Unencoded body.
    pub body: String,
}

impl MailHandoff {
    /// Builds the handoff for a draft addressed to `recipient`.
    #[must_use]
    pub fn for_draft(recipient: &str, draft: &SubmissionDraft) -> Self {
        let subject = format!("Collaboration request from {}", draft.name);
        let body = [
            format!("Name: {}", draft.name),
            format!("Email: {}", draft.email),
            String::new(),
            "Message:".to_string(),
            draft.message.clone(),
        ]
        .join("\n");

        let uri = format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&subject),
            encode_component(&body)
        );

        Self { uri, subject, body }
    }
}
