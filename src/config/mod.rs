use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::gradient::{ColorStyle, GradientType};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub input: InputConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GeneratorConfig {
    /// Gradient type shown on startup.
    pub gradient_type: GradientType,
    /// Color style shown on startup.
    pub color_style: ColorStyle,
    /// Fixed RNG seed; unset means a fresh seed every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal rows per gradient tile, border included.
    pub tile_height: u16,
    /// Rows from the bottom of the grid at which another page is appended.
    pub scroll_threshold: u16,
    /// How long the copy confirmation stays up.
    pub toast_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tile_height: defaults::TILE_HEIGHT,
            scroll_threshold: defaults::SCROLL_THRESHOLD_ROWS,
            toast_secs: defaults::TOAST_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "gradient-grid", "gradient-grid");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("gradient-grid"));
        Self { data_dir }
    }
}

impl UiConfig {
    /// Tiles need a border plus at least one painted row and the button row.
    pub fn effective_tile_height(&self) -> u16 {
        self.tile_height.max(defaults::MIN_TILE_HEIGHT)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "gradient-grid", "gradient-grid")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    override_path.map_or_else(default_config_path, |p| Ok(p.to_path_buf()))
}

/// Reads the config, writing the defaults out on first run.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve(override_path)?;
    if !path.exists() {
        let cfg = defaults::defaults();
        save(&cfg, Some(&path)).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str::<Config>(raw)?)
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve(override_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.generator.gradient_type, GradientType::Linear);
        assert_eq!(cfg.generator.color_style, ColorStyle::Pastel);
        assert_eq!(cfg.generator.seed, None);
        assert!(cfg.input.mouse);
        assert_eq!(cfg.ui.tile_height, defaults::TILE_HEIGHT);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse(
            r#"
[generator]
gradient_type = "conical"
color_style = "default"
seed = 42

[ui]
tile_height = 2
"#,
        )
        .unwrap();
        assert_eq!(cfg.generator.gradient_type, GradientType::Conical);
        assert_eq!(cfg.generator.color_style, ColorStyle::Fixed);
        assert_eq!(cfg.generator.seed, Some(42));
        assert_eq!(cfg.ui.scroll_threshold, defaults::SCROLL_THRESHOLD_ROWS);
        assert_eq!(cfg.ui.effective_tile_height(), defaults::MIN_TILE_HEIGHT);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(parse("[generator]\ncolor_style = \"neon\"\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut cfg = defaults::defaults();
        cfg.generator.gradient_type = GradientType::Radial;
        cfg.generator.seed = Some(7);
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back = parse(&raw).unwrap();
        assert_eq!(back.generator.gradient_type, GradientType::Radial);
        assert_eq!(back.generator.seed, Some(7));
        assert_eq!(back.paths.data_dir, cfg.paths.data_dir);
    }
}
