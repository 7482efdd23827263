use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use visual_editor::{Container, ModelValue};

/// Application settings, stored as TOML in the user's config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_level: String,
    pub window: WindowSettings,
    /// Canvas size for a fresh model
    pub canvas: CanvasSettings,
    /// JSON model to open instead of an empty canvas
    pub initial_model: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowSettings::default(),
            canvas: CanvasSettings::default(),
            initial_model: None,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl AppSettings {
    /// Load settings from the given path. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        let settings = toml::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Settings from the default location.
    ///
    /// Runs before logging is initialized, so a problem is handed back to the
    /// caller alongside the defaults instead of being logged here.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::default_path() {
            Some(path) => Self::load_or_create(&path),
            None => (Self::default(), None),
        }
    }

    /// Settings from `path`, writing the defaults there when the file is missing.
    pub fn load_or_create(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load(path) {
            Ok(Some(settings)) => (settings, None),
            Ok(None) => {
                let settings = Self::default();
                let issue = settings.save(path).err();
                (settings, issue)
            }
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Save settings to the given path, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Get the default config file path in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "VisualEditor", "Visual_Editor")
            .map(|proj| proj.config_dir().join("settings.toml"))
    }

    /// The model the editor opens with.
    pub fn initial_model(&self) -> Result<ModelValue> {
        match &self.initial_model {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read model {}", path.display()))?;
                ModelValue::from_json(&json)
                    .with_context(|| format!("Failed to parse model {}", path.display()))
            }
            None => Ok(ModelValue::new(Container::new(
                self.canvas.width,
                self.canvas.height,
            ))),
        }
    }
}
