//! Batch neighborhood council assignment for a CSV of coordinates.
//!
//! Loads the boundaries once, classifies every row in parallel and writes
//! the input rows back out with one extra result column.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coord_binning::config::Config;
use coord_binning::{GeoPoint, InputError, PipService};

#[derive(Parser, Debug)]
#[command(name = "bin-coords")]
#[command(about = "Assign every coordinate in a CSV file to a neighborhood council")]
struct Args {
    /// Input CSV with a header row
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to shapefile, shapefile directory, or GeoJSON file
    #[arg(long, visible_alias = "shp")]
    shapefile: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Column holding latitude
    #[arg(long, default_value = "latitude")]
    lat_column: String,

    /// Column holding longitude
    #[arg(long, default_value = "longitude")]
    long_column: String,

    /// Name of the appended result column
    #[arg(long, default_value = "neighborhood_council")]
    result_column: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config =
        Config::load_or_default(args.config.as_deref())?.with_overrides(args.shapefile.clone(), None, None);
    let path = config.boundary_path()?;

    let service = PipService::open(path, &config.loader_options())
        .with_context(|| format!("Failed to load boundaries from {}", path.display()))?
        .with_sentinel(config.classification.sentinel.clone());

    info!(
        "Indexed {} of {} boundaries from {}",
        service.index().len(),
        service.boundaries().len(),
        path.display()
    );

    let mut reader = ReaderBuilder::new()
        .from_path(&args.input)
        .with_context(|| format!("Failed to open input CSV: {}", args.input.display()))?;
    let headers = reader.headers()?.clone();

    let lat_idx = column_index(&headers, &args.lat_column)?;
    let lon_idx = column_index(&headers, &args.long_column)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(result.context("Failed to read input CSV")?);
    }

    let points = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(row, i + 1, lat_idx, lon_idx))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Classifying {} points...", points.len());
    let pb = ProgressBar::new(points.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} points")?
            .progress_chars("#>-"),
    );
    let results = service.classify_many_with(&points, || pb.inc(1));
    pb.finish_and_clear();

    let sink: Box<dyn Write> = match &args.output {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("Failed to create {}", p.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = WriterBuilder::new().from_writer(sink);

    let mut out_headers = headers.clone();
    out_headers.push_field(&args.result_column);
    writer.write_record(&out_headers)?;

    let mut outside = 0usize;
    for (row, result) in rows.iter().zip(&results) {
        if result.is_outside() {
            outside += 1;
        }
        let mut out = row.clone();
        out.push_field(result.label(service.sentinel()));
        writer.write_record(&out)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} rows ({} inside a boundary, {} outside)",
        rows.len(),
        rows.len() - outside,
        outside
    );

    Ok(())
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::MissingColumn {
            column: column.to_string(),
        })
}

/// Parse one data row; `row` is 1-based, not counting the header
fn parse_row(
    record: &StringRecord,
    row: usize,
    lat_idx: usize,
    lon_idx: usize,
) -> Result<GeoPoint, InputError> {
    GeoPoint::parse(
        record.get(lat_idx).unwrap_or(""),
        record.get(lon_idx).unwrap_or(""),
    )
    .map_err(|e| InputError::Row {
        row,
        source: Box::new(e),
    })
}
