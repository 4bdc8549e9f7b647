//! Assign a point within Los Angeles to a neighborhood council.
//!
//! Example: `geocode-nc --lat 34.040871 --long -118.235202 --shp shp/`
//!
//! The single-dash spellings `-lat`, `-long` and `-shp` are also accepted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coord_binning::config::Config;
use coord_binning::{GeoPoint, PipService};

#[derive(Parser, Debug)]
#[command(name = "geocode-nc")]
#[command(about = "Assign a point within Los Angeles to a neighborhood council using a shapefile boundary")]
struct Args {
    /// Latitude coordinate value
    #[arg(long, visible_alias = "lat", allow_negative_numbers = true)]
    latitude: String,

    /// Longitude coordinate value
    #[arg(long, visible_alias = "long", allow_negative_numbers = true)]
    longitude: String,

    /// Path to shapefile, shapefile directory, or GeoJSON file
    #[arg(long, visible_alias = "shp")]
    shapefile: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Attribute holding the boundary name
    #[arg(long)]
    name_field: Option<String>,

    /// Text printed when the point is outside every boundary
    #[arg(long)]
    sentinel: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Single-dash long flags accepted for compatibility with existing scripts
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-lat", "--latitude"),
    ("-long", "--longitude"),
    ("-shp", "--shapefile"),
];

/// Rewrite legacy `-lat`/`-long`/`-shp` flags into forms clap understands
fn expand_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| *legacy == arg)
                .map(|(_, long)| long.to_string())
                .unwrap_or(arg)
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse_from(expand_legacy_flags(std::env::args()));

    // Results go to stdout, logs to stderr
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let point = GeoPoint::parse(&args.latitude, &args.longitude)
        .context("Invalid coordinate input")?;

    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        args.shapefile,
        args.name_field,
        args.sentinel,
    );
    let path = config.boundary_path()?;

    info!("Classifying ({}, {}) against {}", point.lat, point.lon, path.display());

    let service = PipService::open(path, &config.loader_options())
        .with_context(|| format!("Failed to load boundaries from {}", path.display()))?
        .with_sentinel(config.classification.sentinel.clone());

    println!("{}", service.label(point));

    Ok(())
}
