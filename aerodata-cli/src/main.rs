// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use aerodata::config::PipelineConfig;
use aerodata::geojson;
use aerodata::nd::AeronauticalData;
use aerodata::pipeline::{FileSource, JsonSupplements, Pipeline};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Merges AIXM 4.5 and SIA data into GeoJSON")]
struct Cli {
    /// Directory with the AIXM snapshot and the SIA export.
    #[arg(long, env = "AERODATA_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory the GeoJSON files are written to. Defaults to
    /// `<data-dir>/derived/geojson`.
    #[arg(long, env = "AERODATA_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// JSON file with supplementary aerodrome facts.
    #[arg(long, env = "AERODATA_SUPPLEMENTS")]
    supplements: Option<PathBuf>,

    /// Only keep aerodromes with a code starting with the prefix.
    #[arg(long, env = "AERODATA_PREFIX")]
    prefix: Option<String>,

    /// Radius in NM around aerodromes in which navaids are associated.
    #[arg(long, env = "AERODATA_RADIUS")]
    radius: Option<f64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PipelineConfig::from_dir(&cli.data_dir)
        .with_context(|| format!("failed to locate inputs in {}", cli.data_dir.display()))?;
    if let Some(prefix) = cli.prefix {
        config = config.with_prefix(prefix);
    }
    if let Some(radius) = cli.radius {
        config = config.with_radius(radius);
    }

    tracing::info!(aixm = %config.aixm, sia = ?config.sia, cycle = ?config.cycle, "inputs");

    let mut pipeline = Pipeline::new(config, FileSource);
    if let Some(path) = &cli.supplements {
        let supplements = JsonSupplements::open(path)
            .await
            .with_context(|| format!("failed to read supplements from {}", path.display()))?;
        pipeline = pipeline.with_supplements(supplements);
    }

    let data = pipeline
        .load_and_parse()
        .await
        .context("failed to merge aeronautical data")?;

    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| cli.data_dir.join("derived").join("geojson"));
    write_geojson(&data, &output_dir)?;

    print_counts(&data);
    println!("GeoJSON written to {}", output_dir.display());

    Ok(())
}

fn write_geojson(data: &AeronauticalData, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let collections = [
        ("aerodromes", geojson::aerodromes(data)),
        ("runways", geojson::runways(data)),
        ("navaids", geojson::navaids(data)),
        ("designated_points", geojson::designated_points(data)),
        ("airspaces", geojson::airspaces(data)),
        ("obstacles", geojson::obstacles(data)),
    ];

    for (name, collection) in collections {
        let path = dir.join(format!("{name}.geojson"));
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &collection)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!(path = %path.display(), features = collection.features.len(), "written");
    }

    Ok(())
}

fn print_counts(data: &AeronauticalData) {
    let runways: usize = data.aerodromes().iter().map(|ad| ad.runways.len()).sum();
    let frequencies: usize = data
        .aerodromes()
        .iter()
        .flat_map(|ad| ad.frequencies.values())
        .map(Vec::len)
        .sum();

    if let Some(cycle) = data.cycle() {
        println!("Cycle: {cycle}");
    }
    println!("Aerodromes: {}", data.aerodromes().len());
    println!("Runways: {runways}");
    println!("Frequencies: {frequencies}");
    println!("Navaids: {}", data.navaids().len());
    println!("Designated points: {}", data.designated_points().len());
    println!("Airspaces: {}", data.airspaces().len());
    println!("Obstacles: {}", data.obstacles().len());
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // log records of the libraries are forwarded as well
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
