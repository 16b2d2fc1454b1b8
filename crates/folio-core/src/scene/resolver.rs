//! Active scene resolution over persisted, environment, and fallback layers.

use std::fmt;

use tracing::{debug, info, warn};

use super::store::ConfigStore;

/// Store key holding the active scene URL.
pub const SCENE_KEY: &str = "scene_url";

/// Where the active scene URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOrigin {
    /// Read from the persisted store.
    Persisted,
    /// Supplied by the environment.
    Environment,
    /// Hardcoded fallback.
    Fallback,
    /// Set explicitly by the user.
    Override,
}

impl SceneOrigin {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::Environment => "environment",
            Self::Fallback => "fallback",
            Self::Override => "override",
        }
    }
}

impl fmt::Display for SceneOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active scene URL and its origin. The URL is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSource {
    /// Scene URL.
    pub url: String,
    /// Layer the URL came from.
    pub origin: SceneOrigin,
}

/// Resolves and maintains the active scene URL.
///
/// Precedence is persisted → environment → fallback. Every non-fallback
/// value that becomes active is written back to the store.
#[derive(Debug)]
pub struct SceneResolver<S> {
    store: S,
    env_default: Option<String>,
    fallback: String,
    active: SceneSource,
}

impl<S: ConfigStore> SceneResolver<S> {
    /// Creates a resolver and performs the initial resolution.
    pub fn new(store: S, env_default: Option<String>, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let env_default = env_default.filter(|v| !v.trim().is_empty());
        let mut resolver = Self {
            store,
            env_default,
            active: SceneSource {
                url: fallback.clone(),
                origin: SceneOrigin::Fallback,
            },
            fallback,
        };
        resolver.resolve();
        resolver
    }

    /// Re-reads the layers and sets the active scene by precedence.
    pub fn resolve(&mut self) -> SceneSource {
        let (url, origin) = if let Some(url) = self.persisted() {
            (url, SceneOrigin::Persisted)
        } else if let Some(url) = self.env_default.clone() {
            (url, SceneOrigin::Environment)
        } else {
            (self.fallback.clone(), SceneOrigin::Fallback)
        };

        debug!(%url, %origin, "Resolved scene");
        self.activate(url, origin);
        self.active.clone()
    }

    /// Replaces the active scene with a user-supplied URL.
    ///
    /// Returns `false` (and changes nothing) if the input is blank.
    pub fn apply_override(&mut self, candidate: &str) -> bool {
        let url = candidate.trim();
        if url.is_empty() {
            return false;
        }

        info!(url, "Applying scene override");
        self.activate(url.to_string(), SceneOrigin::Override);
        true
    }

    /// Swaps between the fallback and the current alternate.
    ///
    /// On the fallback with an alternate available (persisted first, then
    /// environment), switch to it. Anywhere else, revert to the fallback.
    pub fn toggle(&mut self) -> SceneSource {
        let alternate = if self.active.url == self.fallback {
            self.alternate()
        } else {
            None
        };

        match alternate {
            Some((url, origin)) => self.activate(url, origin),
            None => self.activate(self.fallback.clone(), SceneOrigin::Fallback),
        }

        info!(url = %self.active.url, origin = %self.active.origin, "Toggled scene");
        self.active.clone()
    }

    /// Returns the active scene.
    #[must_use]
    pub const fn active(&self) -> &SceneSource {
        &self.active
    }

    /// Returns the hardcoded fallback.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persisted(&self) -> Option<String> {
        self.store.get(SCENE_KEY).filter(|v| !v.trim().is_empty())
    }

    fn alternate(&self) -> Option<(String, SceneOrigin)> {
        let is_alternate = |url: &String| *url != self.fallback;
        self.persisted()
            .filter(is_alternate)
            .map(|url| (url, SceneOrigin::Persisted))
            .or_else(|| {
                self.env_default
                    .clone()
                    .filter(is_alternate)
                    .map(|url| (url, SceneOrigin::Environment))
            })
    }

    fn activate(&mut self, url: String, origin: SceneOrigin) {
        if url != self.fallback {
            if let Err(e) = self.store.set(SCENE_KEY, &url) {
                warn!(?e, "Failed to persist scene");
            }
        }
        self.active = SceneSource { url, origin };
    }
}
