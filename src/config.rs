//! Dashboard configuration.
//!
//! Everything has a built-in default. An optional `dashboard.json` next to the
//! executable can override individual fields.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "dashboard.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset file, resolved against the program directory when relative.
    pub data_file: PathBuf,
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("df_day.csv"),
            title: "Bike Rental Analysis Dashboard".to_string(),
            window_width: 1400.0,
            window_height: 900.0,
            min_width: 1000.0,
            min_height: 700.0,
        }
    }
}

impl DashboardConfig {
    /// Parse a config file. Fields absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load `dashboard.json` from `dir`, falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}; using default configuration", e);
                Self::default()
            }
        }
    }

    /// Configuration next to the running executable.
    pub fn load() -> Self {
        Self::load_from_dir(&program_dir())
    }

    pub fn data_path_in(&self, dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            dir.join(&self.data_file)
        }
    }

    /// Fixed dataset location relative to the program.
    pub fn data_path(&self) -> PathBuf {
        self.data_path_in(&program_dir())
    }
}

/// Directory containing the running executable, or `.` if it cannot be found.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
