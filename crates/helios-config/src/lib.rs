//! RON-persisted configuration and CLI overrides for the Helios planet
//! generator.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugSection, HeightmapSection, PlanetSection, TessellationKind};
pub use error::ConfigError;
