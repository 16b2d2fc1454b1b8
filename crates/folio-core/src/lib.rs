//! # folio-core
//!
//! Core logic behind the Folio portfolio's contact section and 3D scene.
//!
//! This crate provides:
//! - **Contact delivery** - validation, submission, outcome classification,
//!   and the mail-client fallback
//! - **Health probe** - a never-failing diagnostic of the backend's email setup
//! - **Scene configuration** - persisted/environment/fallback resolution with
//!   override and toggle
//! - Configuration loading from the environment

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
mod error;
pub mod flight;
pub mod health;
pub mod scene;

pub use config::{FALLBACK_SCENE_URL, FolioConfig};
pub use contact::{
    ContactController, ContactForm, InvalidDraft, MailHandoff, Status, StatusKind,
    SubmissionDraft, SubmissionOutcome, SubmissionPhase,
};
pub use error::{Error, Result};
pub use health::{HealthProbe, HealthReport};
pub use scene::{ConfigStore, JsonFileStore, MemoryStore, SceneOrigin, SceneResolver, SceneSource};
