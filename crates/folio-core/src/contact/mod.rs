//! Contact delivery.
//!
//! Validates a visitor's message, submits it to the backend, classifies
//! the response, and falls back to a mail-client handoff when the backend
//! path cannot complete.

mod controller;
mod draft;
mod mailto;
mod outcome;

pub use controller::{ContactController, SubmissionPhase};
pub use draft::{ContactForm, InvalidDraft, SubmissionDraft, VALIDATION_MESSAGE, ValidationError};
pub use mailto::{MailHandoff, encode_component};
pub use outcome::{Status, StatusKind, SubmissionOutcome};
