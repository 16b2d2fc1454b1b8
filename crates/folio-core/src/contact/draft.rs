//! Submission drafts and their validation.

use std::fmt;

/// Status shown when any required field is blank.
pub const VALIDATION_MESSAGE: &str = "Please fill in your name, email, and message.";

/// A contact message as entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message text.
    pub message: String,
}

impl SubmissionDraft {
    /// Creates a new draft.
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

    /// Returns a copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    /// Validates the draft and returns its trimmed form.
    ///
    /// # Errors
    ///
    /// Returns every field that is empty after trimming.
    pub fn validate(&self) -> Result<Self, InvalidDraft> {
        let draft = self.trimmed();
        let mut errors = Vec::new();

        if draft.name.is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if draft.email.is_empty() {
            errors.push(ValidationError::EmptyEmail);
        }
        if draft.message.is_empty() {
            errors.push(ValidationError::EmptyMessage);
        }

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(InvalidDraft { errors })
        }
    }
}

/// A required draft field that was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty.
    EmptyName,
    /// Email address is empty.
    EmptyEmail,
    /// Message is empty.
    EmptyMessage,
}

impl ValidationError {
    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
            Self::EmptyMessage => "message",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.field())
    }
}

impl std::error::Error for ValidationError {}

/// A draft that failed validation. No request was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDraft {
    /// Blank fields, in form order.
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for InvalidDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALIDATION_MESSAGE)
    }
}

impl std::error::Error for InvalidDraft {}

/// The contact form fields owned by the surrounding UI.
///
/// The controller never touches these; the UI builds a draft from them and
/// applies the outcome afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Name field.
    pub name: String,
    /// Email field.
    pub email: String,
    /// Message field.
    pub message: String,
}

impl ContactForm {
    /// Creates a filled-in form.
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

    /// Snapshots the fields into a draft.
    #[must_use]
    pub fn draft(&self) -> SubmissionDraft {
        SubmissionDraft::new(&self.name, &self.email, &self.message)
    }

    /// Empties all three fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Returns true if every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Applies a submission outcome, clearing the form only when the
    /// message was delivered.
    pub fn apply(&mut self, outcome: &super::SubmissionOutcome) {
        if outcome.clears_form() {
            self.clear();
        }
    }
}
