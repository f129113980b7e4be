//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet tessellation settings.
    pub planet: PlanetSection,
    /// Heightmap displacement settings.
    pub heightmap: HeightmapSection,
    /// Debug/development settings.
    pub debug: DebugSection,
}

/// Which sphere tessellation the generator runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum TessellationKind {
    /// Six warped grid faces.
    #[default]
    CubeSphere,
    /// Recursively subdivided icosahedron.
    Icosphere,
}

/// Planet tessellation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetSection {
    /// Tessellation algorithm.
    pub tessellation: TessellationKind,
    /// Cube-sphere grid density per face (minimum 2).
    pub resolution: u32,
    /// Icosphere subdivision depth.
    pub subdivisions: u32,
    /// Planet radius in world units.
    pub radius: f64,
    /// Flip the latitude sign of the spherical UV mapping.
    pub flip_latitude: bool,
}

impl Default for PlanetSection {
    fn default() -> Self {
        Self {
            tessellation: TessellationKind::CubeSphere,
            resolution: 10,
            subdivisions: 3,
            radius: 1.0,
            flip_latitude: false,
        }
    }
}

/// Heightmap displacement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeightmapSection {
    /// Path to the grayscale heightmap image; `None` disables displacement.
    pub image: Option<PathBuf>,
    /// Base world-space displacement scale.
    pub height_scale: f64,
    /// Height threshold separating outward from inward displacement.
    pub threshold: f64,
    /// Multiplier for outward displacement.
    pub exaggeration: f64,
}

impl Default for HeightmapSection {
    fn default() -> Self {
        Self {
            image: None,
            height_scale: 1.0,
            threshold: 0.5,
            exaggeration: 1.0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSection {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugSection {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config
    /// file there.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Default config directory: the platform config dir, or the working
    /// directory as a fallback.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("helios"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
