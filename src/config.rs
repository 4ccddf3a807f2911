// ==========================================
// Slangeprogram - configuration
// ==========================================
// Catalog file locations and order defaults, read from a
// JSON file. Missing or broken configuration falls back
// to the defaults so the operator can still start up with
// the workbooks in the working directory.
// ==========================================

use crate::domain::{Material, Warehouse};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("kunne ikke lese konfigurasjonen: {0}")]
    Io(#[from] std::io::Error),

    #[error("ugyldig konfigurasjon: {0}")]
    Parse(#[from] serde_json::Error),
}

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "Slanger_hylser" workbook: hose catalog + support sheets
    pub main_catalog: PathBuf,
    /// Coupling workbook, one sheet per size/variant
    pub coupling_catalog: PathBuf,
    /// Warehouse code written on new rows (3 = Lillestrøm)
    pub default_warehouse: i64,
    /// Material preference text, e.g. "stål" or "syrefast"
    pub default_material: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_catalog: PathBuf::from("Slanger_hylser.xlsx"),
            coupling_catalog: PathBuf::from("kuplinger_316.xlsx"),
            default_warehouse: Warehouse::Lillestrom.code(),
            default_material: "stål".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load, or fall back to defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "bruker standardkonfigurasjon");
                Self::default()
            }
        }
    }

    pub fn warehouse(&self) -> Warehouse {
        Warehouse::from_code(self.default_warehouse).unwrap_or(Warehouse::Lillestrom)
    }

    pub fn material(&self) -> Material {
        Material::from_preference(&self.default_material).unwrap_or(Material::Steel)
    }
}

/// Default configuration location, e.g.
/// `~/.config/slangeprogram/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slangeprogram")
        .join("config.json")
}
