//! Demo binary that plays the role of the mesh host: it loads configuration,
//! requests a planet rebuild, and reports statistics about the result.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p helios-demo -- --tessellation icosphere
//! --subdivisions 4` to pick the tessellation, and `--heightmap <path>` to
//! displace with a grayscale image.

mod planet_demos;

use std::process::ExitCode;

use clap::Parser;
use helios_config::{CliArgs, Config, TessellationKind};
use helios_log::init_logging;
use helios_planet::{
    DisplacementParams, GridHeightField, LatitudeSign, PlanetGenConfig, Tessellation,
};
use tracing::{error, info};

use crate::planet_demos::{demonstrate_projection_accuracy, report_mesh_statistics};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("could not load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("planet generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let gen_config = planet_gen_config(config);

    demonstrate_projection_accuracy();

    let height_field = match &config.heightmap.image {
        Some(path) => {
            info!("loading heightmap from {}", path.display());
            let image = image::open(path)?;
            Some(GridHeightField::from_image(&image)?)
        }
        None => None,
    };

    let mesh = helios_planet::build_planet(
        &gen_config,
        height_field
            .as_ref()
            .map(|f| f as &dyn helios_planet::HeightField),
    )?;

    report_mesh_statistics(&mesh, gen_config.radius);
    Ok(())
}

/// Translate the persisted config into generation parameters.
fn planet_gen_config(config: &Config) -> PlanetGenConfig {
    let tessellation = match config.planet.tessellation {
        TessellationKind::CubeSphere => Tessellation::CubeSphere {
            resolution: config.planet.resolution,
        },
        TessellationKind::Icosphere => Tessellation::Icosphere {
            subdivisions: config.planet.subdivisions,
        },
    };

    PlanetGenConfig {
        tessellation,
        radius: config.planet.radius,
        latitude_sign: if config.planet.flip_latitude {
            LatitudeSign::South
        } else {
            LatitudeSign::North
        },
        displacement: DisplacementParams {
            height_scale: config.heightmap.height_scale,
            threshold: config.heightmap.threshold,
            exaggeration: config.heightmap.exaggeration,
        },
        ..Default::default()
    }
}
