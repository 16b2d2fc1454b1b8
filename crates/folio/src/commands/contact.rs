use std::process::ExitCode;

use folio_core::{
    ContactController, ContactForm, FolioConfig, HealthProbe, MailHandoff, Status,
    SubmissionOutcome,
};
use serde::Serialize;
use tracing::warn;

use crate::output::print_one;

#[derive(Serialize)]
struct SendOut<'a> {
    outcome: Option<&'static str>,
    status: Option<Status>,
    handoff: Option<&'a MailHandoff>,
    saved: bool,
    form_cleared: bool,
}

pub async fn send(
    config: &FolioConfig,
    mut form: ContactForm,
    open: bool,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let controller = ContactController::from_config(config);

    let outcome = controller.submit(&form.draft()).await.ok();
    if let Some(outcome) = &outcome {
        form.apply(outcome);
    }

    let handoff = outcome.as_ref().and_then(SubmissionOutcome::handoff);
    if let Some(handoff) = handoff.filter(|_| open) {
        if let Err(e) = opener::open(&handoff.uri) {
            warn!(%e, "Could not open mail client");
        }
    }

    let status = controller.status();
    let ok = status.as_ref().is_some_and(|s| !s.is_error());
    let out = SendOut {
        outcome: outcome.as_ref().map(SubmissionOutcome::label),
        status,
        handoff,
        saved: outcome.as_ref().is_some_and(SubmissionOutcome::is_saved),
        form_cleared: form.is_empty(),
    };

    print_one(json, ok, out, |out| {
        let mut lines: Vec<String> = out.status.iter().map(|s| s.message.clone()).collect();
        if let Some(handoff) = out.handoff {
            lines.push(format!("Mail client: {}", handoff.uri));
        }
        lines
    })?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

pub async fn health(config: &FolioConfig, json: bool) -> anyhow::Result<ExitCode> {
    let report = HealthProbe::from_config(config).check().await;
    let ok = !report.has_error();

    print_one(json, ok, report, folio_core::HealthReport::lines)?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
