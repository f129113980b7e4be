//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, TessellationKind};

/// Helios planet generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "helios", about = "Procedural planet mesh generator")]
pub struct CliArgs {
    /// Tessellation algorithm.
    #[arg(long, value_enum)]
    pub tessellation: Option<TessellationKind>,

    /// Cube-sphere grid resolution per face.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Icosphere subdivision depth.
    #[arg(long)]
    pub subdivisions: Option<u32>,

    /// Planet radius in world units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Grayscale heightmap image to displace with.
    #[arg(long)]
    pub heightmap: Option<PathBuf>,

    /// Displacement height scale.
    #[arg(long)]
    pub height_scale: Option<f64>,

    /// Displacement threshold in [0, 1].
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Outward displacement exaggeration factor.
    #[arg(long)]
    pub exaggeration: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config directory (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(kind) = args.tessellation {
            self.planet.tessellation = kind;
        }
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(subdivisions) = args.subdivisions {
            self.planet.subdivisions = subdivisions;
        }
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(ref path) = args.heightmap {
            self.heightmap.image = Some(path.clone());
        }
        if let Some(scale) = args.height_scale {
            self.heightmap.height_scale = scale;
        }
        if let Some(threshold) = args.threshold {
            self.heightmap.threshold = threshold;
        }
        if let Some(exaggeration) = args.exaggeration {
            self.heightmap.exaggeration = exaggeration;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_config_values() {
        let args = CliArgs::parse_from([
            "helios",
            "--tessellation",
            "icosphere",
            "--subdivisions",
            "4",
            "--radius",
            "25.0",
            "--log-level",
            "debug",
        ]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);

        assert_eq!(config.planet.tessellation, TessellationKind::Icosphere);
        assert_eq!(config.planet.subdivisions, 4);
        assert_eq!(config.planet.radius, 25.0);
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_absent_flags_leave_config_untouched() {
        let args = CliArgs::parse_from(["helios"]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_heightmap_path_override() {
        let args = CliArgs::parse_from(["helios", "--heightmap", "terrain.png"]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.heightmap.image, Some(PathBuf::from("terrain.png")));
    }
}
