//! Scene configuration.
//!
//! Decides which 3D scene URL the portfolio renders, merging a persisted
//! value, an environment default, and a hardcoded fallback.

mod resolver;
mod store;

pub use resolver::{SCENE_KEY, SceneOrigin, SceneResolver, SceneSource};
pub use store::{ConfigStore, JsonFileStore, MemoryStore};
