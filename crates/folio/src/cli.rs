use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Folio portfolio contact and scene tools")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Backend origin (overrides FOLIO_BACKEND_URL)"
    )]
    pub backend: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Default scene URL (overrides FOLIO_SCENE_URL)"
    )]
    pub scene_default: Option<String>,
    #[arg(long, global = true, help = "Directory holding persisted state")]
    pub state_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a contact message
    Send {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, help = "Print the mail-client link instead of opening it")]
        no_open: bool,
    },
    /// Check the backend's email setup
    Health,
    /// Show or change the active 3D scene
    Scene {
        #[command(subcommand)]
        command: SceneCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SceneCommands {
    /// Print the active scene
    Show,
    /// Use a custom scene URL
    Set { url: String },
    /// Swap between the fallback scene and the alternate
    Toggle,
}

impl Cli {
    /// Environment configuration with flag overrides applied.
    pub fn config(&self) -> FolioConfig {
        let mut config = FolioConfig::from_env();
        if let Some(backend) = &self.backend {
            config = config.with_backend_url(backend.trim());
        }
        if let Some(scene) = self.scene_default.as_deref().map(str::trim) {
            config.scene_default = Some(scene.to_string()).filter(|s| !s.is_empty());
        }
        if let Some(dir) = &self.state_dir {
            config = config.with_state_dir(dir);
        }
        config
    }
}
