use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::flock::swarm::FlockParams;
use crate::music::sequencer::HarmonyParams;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub flock: FlockParams,
    #[serde(default)]
    pub harmony: HarmonyParams,
}

impl AppConfig {
    /// Clamp every parameter into its documented range.
    pub fn sanitize(&mut self) {
        self.flock.sanitize();
        self.harmony.sanitize();
    }

    /// Read the config file if it exists, otherwise write the defaults out
    /// and continue with them. Parse failures fall back to defaults with a
    /// warning; they never abort the run.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str::<Self>(&contents) {
                    Ok(mut cfg) => {
                        cfg.sanitize();
                        return cfg;
                    }
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
