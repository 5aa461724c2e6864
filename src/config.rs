use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_sidecar_name")]
    pub sidecar_name: String,
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
    /// Default pivot for entries without one: frame center when set,
    /// top-left otherwise.
    #[serde(default = "default_false")]
    pub centered_origin: bool,
    #[serde(default)]
    pub recent_folders: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

// Default value functions
fn default_sidecar_name() -> String {
    "data.json".to_string()
}

fn default_image_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
}

fn default_false() -> bool {
    false
}

fn default_zoom_step() -> f32 {
    1.25
}

fn default_marker_size() -> u32 {
    8
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sidecar_name: default_sidecar_name(),
            image_extensions: default_image_extensions(),
            centered_origin: false,
            recent_folders: Vec::new(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            marker_size: default_marker_size(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> PathBuf {
    let config_dir = directories::ProjectDirs::from("", "", "sprite-manager")
        .expect("Failed to determine config directory")
        .config_dir()
        .to_path_buf();
    config_dir.join("config.toml")
}

/// Load configuration from file, or return default if file doesn't exist
pub fn load_config() -> AppConfig {
    let path = config_path();
    if path.exists() {
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file: {e}. Using defaults.");
                    AppConfig::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {e}. Using defaults.");
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    }
}

/// Save configuration to file
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let toml = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&path, toml).map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

/// Add a folder path to the recent folders list
pub fn add_recent_folder(config: &mut AppConfig, path: String) {
    // Remove if already in list
    config.dataset.recent_folders.retain(|p| p != &path);

    // Add to front
    config.dataset.recent_folders.insert(0, path);

    // Keep only last 10
    config.dataset.recent_folders.truncate(10);
}
