//! Runtime configuration.
//!
//! Values come from the environment and can be overridden by the caller
//! (the CLI applies its flags on top).

use std::path::PathBuf;

/// Environment variable holding the backend origin.
pub const ENV_BACKEND_URL: &str = "FOLIO_BACKEND_URL";

/// Environment variable holding the default scene URL.
pub const ENV_SCENE_URL: &str = "FOLIO_SCENE_URL";

/// Environment variable holding the mail handoff recipient.
pub const ENV_CONTACT_ADDRESS: &str = "FOLIO_CONTACT_ADDRESS";

/// Scene rendered when neither the persisted nor the environment layer has one.
pub const FALLBACK_SCENE_URL: &str = "https://prod.spline.design/41MGRk-UDPKO-l6W/scene.splinecode";

/// Recipient of the mail-client handoff.
pub const DEFAULT_CONTACT_ADDRESS: &str = "shreyash@certiswift.in";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Backend origin. Empty means same-origin.
    pub backend_url: String,
    /// Environment-supplied default scene URL.
    pub scene_default: Option<String>,
    /// Recipient of the mail-client handoff.
    pub contact_address: String,
    /// Directory holding persisted client state.
    pub state_dir: PathBuf,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            scene_default: None,
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            state_dir: default_state_dir(),
        }
    }
}

impl FolioConfig {
    /// Loads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = get(ENV_BACKEND_URL) {
            config.backend_url = url;
        }
        config.scene_default = get(ENV_SCENE_URL);
        if let Some(address) = get(ENV_CONTACT_ADDRESS) {
            config.contact_address = address;
        }
        config
    }

    /// Sets the backend origin.
    #[must_use]
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Sets the environment default scene.
    #[must_use]
    pub fn with_scene_default(mut self, scene: impl Into<String>) -> Self {
        self.scene_default = Some(scene.into());
        self
    }

    /// Sets the state directory.
    #[must_use]
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    /// Path of the persisted state file.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join("state.json")
    }
}

/// Default state directory (`<config dir>/folio`).
#[must_use]
pub fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}
