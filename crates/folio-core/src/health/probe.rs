//! Health probe against the contact backend.

use folio_backend::BackendClient;
use tracing::{debug, warn};

use super::report::HealthReport;
use crate::config::FolioConfig;
use crate::flight::InFlight;

/// Runs the backend health check.
///
/// Calls may overlap. [`HealthProbe::is_checking`] lets the caller disable
/// its trigger while one is outstanding.
#[derive(Debug)]
pub struct HealthProbe {
    client: BackendClient,
    checking: InFlight,
}

impl HealthProbe {
    /// Creates a probe over a backend client.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            checking: InFlight::new(),
        }
    }

    /// Creates a probe from application configuration.
    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(BackendClient::new(&config.backend_url))
    }

    /// Returns true while a check is running.
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.checking.is_active()
    }

    /// Checks the backend's email setup.
    ///
    /// Never fails: any transport, status, or parse error becomes
    /// [`HealthReport::unreachable`].
    pub async fn check(&self) -> HealthReport {
        let _guard = self.checking.enter();

        match self.client.fetch_health().await {
            Ok(response) => {
                debug!(?response, "Health check succeeded");
                response.into()
            }
            Err(e) => {
                warn!(%e, "Health check failed");
                HealthReport::unreachable()
            }
        }
    }
}
