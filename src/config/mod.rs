// SPDX-License-Identifier: MPL-2.0
//! Appearance preferences, persisted to a `behaviors.toml` file.
//!
//! Every field is optional; anything absent or out of range falls back to
//! the defaults in [`defaults`]. Pixel fields take either a number or a
//! CSS-style string (`"4px"`). Invalid TOML degrades silently to the
//! default configuration, the same "skip and continue" posture the
//! behaviors themselves take.

pub mod defaults;

use crate::error::{Error, Result};
use crate::geometry::parse_px;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "behaviors.toml";
const APP_NAME: &str = "IcedBehaviors";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Opacity of the tour mask panels (0.0 - 0.9).
    #[serde(default)]
    pub mask_opacity: Option<f32>,
    /// Thickness of the right/bottom resize rods in pixels.
    #[serde(default, deserialize_with = "px_value")]
    pub rod_thickness: Option<f32>,
    /// Gap between a highlighted element and its tooltip card in pixels.
    #[serde(default, deserialize_with = "px_value")]
    pub tooltip_gap: Option<f32>,
}

/// Pixel fields also accept CSS-style strings (`rod_thickness = "4px"`);
/// unparsable strings degrade to `0.0` instead of erroring.
fn px_value<'de, D>(deserializer: D) -> std::result::Result<Option<f32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f32),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(value) => value,
        Raw::Text(value) => parse_px(&value),
    }))
}

impl Config {
    /// Mask opacity with the default applied and the value clamped to the
    /// supported range.
    pub fn mask_opacity(&self) -> f32 {
        self.mask_opacity
            .unwrap_or(DEFAULT_MASK_OPACITY)
            .clamp(MIN_MASK_OPACITY, MAX_MASK_OPACITY)
    }

    pub fn rod_thickness(&self) -> f32 {
        self.rod_thickness.unwrap_or(DEFAULT_ROD_THICKNESS)
    }

    pub fn tooltip_gap(&self) -> f32 {
        self.tooltip_gap.unwrap_or(DEFAULT_TOOLTIP_GAP)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            mask_opacity: Some(0.5),
            rod_thickness: Some(6.0),
            tooltip_gap: Some(12.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("behaviors.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.mask_opacity, config.mask_opacity);
        assert_eq!(loaded.rod_thickness, config.rod_thickness);
        assert_eq!(loaded.tooltip_gap, config.tooltip_gap);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("behaviors.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.mask_opacity.is_none());
    }

    #[test]
    fn pixel_fields_accept_css_style_strings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("behaviors.toml");
        fs::write(&config_path, "rod_thickness = \"6px\"\ntooltip_gap = \"junk\"")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.rod_thickness(), 6.0);
        // Unparsable strings degrade to zero rather than erroring.
        assert_eq!(loaded.tooltip_gap(), 0.0);
    }

    #[test]
    fn accessors_apply_defaults_and_bounds() {
        let config = Config::default();
        assert_eq!(config.mask_opacity(), DEFAULT_MASK_OPACITY);
        assert_eq!(config.rod_thickness(), DEFAULT_ROD_THICKNESS);
        assert_eq!(config.tooltip_gap(), DEFAULT_TOOLTIP_GAP);

        let loud = Config {
            mask_opacity: Some(5.0),
            ..Config::default()
        };
        assert_eq!(loud.mask_opacity(), MAX_MASK_OPACITY);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("behaviors.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
