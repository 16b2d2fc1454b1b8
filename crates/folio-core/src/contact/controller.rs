//! Contact submission controller.

use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_backend::{BackendClient, ContactRequest, ContactResponse};
use tracing::{debug, info, warn};

use super::draft::{InvalidDraft, SubmissionDraft, VALIDATION_MESSAGE};
use super::mailto::MailHandoff;
use super::outcome::{Status, SubmissionOutcome};
use crate::config::FolioConfig;
use crate::flight::InFlight;

/// Where the controller is in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Checking the draft.
    Validating,
    /// Waiting on the backend.
    Submitting,
}

#[derive(Debug, Default)]
struct Session {
    phase: SubmissionPhase,
    status: Option<Status>,
}

/// Drives a contact submission from draft to outcome.
///
/// Assumes single-flight: the caller should not submit while
/// [`ContactController::is_loading`] is true. Nothing here rejects an
/// overlapping call; the last one to finish owns the status line.
#[derive(Debug)]
pub struct ContactController {
    client: BackendClient,
    contact_address: String,
    loading: InFlight,
    session: Mutex<Session>,
}

impl ContactController {
    /// Creates a controller that falls back to mailing `contact_address`.
    #[must_use]
    pub fn new(client: BackendClient, contact_address: impl Into<String>) -> Self {
        Self {
            client,
            contact_address: contact_address.into(),
            loading: InFlight::new(),
            session: Mutex::new(Session::default()),
        }
    }

    /// Creates a controller from application configuration.
    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(
            BackendClient::new(&config.backend_url),
            &config.contact_address,
        )
    }

    /// Returns true while a submission is waiting on the backend.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// Returns the current phase.
    ///
    /// `Submitting` while any submission is waiting on the backend, even if an
    /// overlapping one has already finished.
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        if self.is_loading() {
            SubmissionPhase::Submitting
        } else {
            self.session().phase
        }
    }

    /// Returns the status line of the last attempt.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.session().status.clone()
    }

    /// Submits a draft.
    ///
    /// Returns the outcome of a validated submission. The outcome also
    /// replaces the status line. On `TransportFailure` the returned handoff
    /// should be opened by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDraft`] if any field is blank after trimming. No
    /// request is made in that case.
    pub async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionOutcome, InvalidDraft> {
        let _phase = PhaseReset { session: &self.session };
        self.set_phase(SubmissionPhase::Validating);

        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(e) => {
                let fields: Vec<_> = e.errors.iter().map(|err| err.field()).collect();
                debug!(?fields, "Draft rejected");
                self.set_status(Some(Status::error(VALIDATION_MESSAGE)));
                return Err(e);
            }
        };

        let _loading = self.loading.enter();
        self.set_status(None);

        let request = ContactRequest::new(&draft.name, &draft.email, &draft.message);
        let outcome = match self.client.submit_contact(&request).await {
            Ok(response) if response.ok => classify(response),
            Ok(response) => {
                let reason = response
                    .error
                    .unwrap_or_else(|| "Failed to send".to_string());
                self.fall_back(&draft, reason)
            }
            Err(e) => self.fall_back(&draft, e.to_string()),
        };

        info!(outcome = outcome.label(), "Submission finished");
        self.set_status(Some(outcome.status()));
        Ok(outcome)
    }

    fn fall_back(&self, draft: &SubmissionDraft, reason: String) -> SubmissionOutcome {
        warn!(%reason, "Direct send failed, handing off to mail client");
        SubmissionOutcome::TransportFailure {
            reason,
            handoff: MailHandoff::for_draft(&self.contact_address, draft),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        self.session().phase = phase;
    }

    fn set_status(&self, status: Option<Status>) {
        self.session().status = status;
    }
}

/// Classifies a 2xx response the backend accepted.
fn classify(response: ContactResponse) -> SubmissionOutcome {
    if response.email_dispatched {
        SubmissionOutcome::Delivered
    } else if response.is_smtp_unconfigured() {
        SubmissionOutcome::SavedNoSmtp
    } else {
        SubmissionOutcome::SavedDeliveryFailed {
            reason: response.error,
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the controller to `Idle` however `submit` exits.
struct PhaseReset<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for PhaseReset<'_> {
    fn drop(&mut self) {
        lock(self.session).phase = SubmissionPhase::Idle;
    }
}
