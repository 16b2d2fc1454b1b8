//! # folio-backend
//!
//! Typed client for the portfolio contact backend.
//!
//! The backend is an external collaborator. This crate only speaks its HTTP
//! contract:
//!
//! - `POST {base}/api/contact` stores a message and tries to email it
//! - `GET {base}/api/contact/health` reports how email dispatch is configured
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_backend::{BackendClient, ContactRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackendClient::new("https://api.example.com");
//!
//!     let request = ContactRequest::new("Ada", "ada@example.com", "Hello!");
//!     let response = client.submit_contact(&request).await?;
//!     println!("saved: {}, emailed: {}", response.ok, response.email_dispatched);
//!
//!     let health = client.fetch_health().await?;
//!     println!("SMTP configured: {:?}", health.smtp_configured);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod types;

pub use client::{BackendClient, CONTACT_PATH, HEALTH_PATH};
pub use error::{Error, Result};
pub use types::{ContactRequest, ContactResponse, HealthResponse, SMTP_NOT_CONFIGURED};
