use folio_core::{FALLBACK_SCENE_URL, FolioConfig, JsonFileStore, SceneResolver, SceneSource};
use serde::Serialize;

use crate::cli::SceneCommands;
use crate::output::print_one;

#[derive(Serialize)]
struct SceneOut {
    url: String,
    origin: &'static str,
}

impl From<SceneSource> for SceneOut {
    fn from(source: SceneSource) -> Self {
        Self {
            url: source.url,
            origin: source.origin.as_str(),
        }
    }
}

pub fn scene(config: &FolioConfig, command: &SceneCommands, json: bool) -> anyhow::Result<()> {
    let store = JsonFileStore::open(config.state_file());
    let mut resolver = SceneResolver::new(store, config.scene_default.clone(), FALLBACK_SCENE_URL);

    let active = match command {
        SceneCommands::Show => resolver.active().clone(),
        SceneCommands::Set { url } => {
            if !resolver.apply_override(url) {
                tracing::info!("Empty scene URL ignored");
            }
            resolver.active().clone()
        }
        SceneCommands::Toggle => resolver.toggle(),
    };

    print_one(json, true, SceneOut::from(active), |out| {
        vec![format!("{} ({})", out.url, out.origin)]
    })
}
