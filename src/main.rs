#![warn(clippy::all)]

//! zonespec - generates a skeletal zone specification table from a zoning
//! shapefile.
//!
//! The tool reads a zipped shapefile, asks which attribute columns identify
//! a zone, optionally drops zones whose dissolved area falls under a
//! threshold, and writes a spec file enumerating every unique zone key with
//! blank zoning-variable cells for a human to fill in.

mod error;
mod filter;
mod geo;
mod ingest;
mod record;
mod select;
mod spec;
mod table;

use chrono::Local;
use clap::Parser;
use log::info;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use error::Result;
use filter::apply_min_area;
use geo::AlbersOps;
use ingest::{HookRegistry, Phase};
use record::RecordSet;
use select::{collect_interactive, flatten_projection_columns, validate, ColumnGroup};
use spec::SpecWriter;
use table::{UnitSystem, VariableRegistry, VariableSchema};

/// Prepopulate a zone spec lookup table from a zoning shapefile.
#[derive(Debug, Parser)]
#[command(name = "zonespec", version, about)]
struct Args {
    /// Slug for this dataset.
    slug: String,

    /// Outfile (overrides default specs/<slug>.csv).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory holding the <slug>.zip archives.
    #[arg(long, default_value = "data/zoning")]
    data_dir: PathBuf,

    /// Drop zones smaller than MIN_ZONE_SIZE square km.
    #[arg(long = "drop-small-zones", value_name = "MIN_ZONE_SIZE")]
    drop_small_zones: Option<f64>,

    /// Write specfile column names in imperial units.
    #[arg(long)]
    imperial: bool,

    /// Comma-separated column group to match on (repeatable). When given,
    /// the interactive prompt is skipped and unknown columns are fatal.
    #[arg(long = "columns", value_name = "COLS")]
    columns: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Reading data");
    let zip_path = args.data_dir.join(format!("{}.zip", args.slug));
    let set = ingest::load_dataset(&zip_path)?;

    // Per-dataset transforms get registered here as datasets need them.
    let hooks = HookRegistry::new();
    let set = hooks.run(&args.slug, Phase::Before, set);

    let colsets = gather_colsets(args, &set)?;
    let projection = flatten_projection_columns(&colsets);
    let set = set.normalized(&projection);

    let set = match args.drop_small_zones {
        Some(min_km2) => {
            info!("    Removing zones smaller than {min_km2} square km...");
            let min_sq_m = min_km2 * 1000.0 * 1000.0;
            apply_min_area(set, &colsets, min_sq_m, &AlbersOps::new())?
        }
        None => set,
    };
    info!("After filtering, {} areas remain", set.len());

    let schema = VariableSchema::from_registry(&VariableRegistry::builtin());
    let units = if args.imperial {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    };

    info!("Finding unique zone codes");
    let blocks: Vec<Vec<Vec<String>>> = colsets
        .iter()
        .map(|colset| table::build(&set, colset, &schema, units))
        .collect();

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from("specs").join(format!("{}.csv", args.slug)));
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string();
    SpecWriter::new(File::create(&out_path)?).write_spec(&timestamp, &projection, &blocks)?;
    info!("Wrote {}", out_path.display());
    Ok(())
}

/// Collects column groups from `--columns` flags, or interactively when
/// none were given.
fn gather_colsets(args: &Args, set: &RecordSet) -> Result<Vec<ColumnGroup>> {
    if args.columns.is_empty() {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        Ok(collect_interactive(set, &mut input, &mut output)?)
    } else {
        args.columns
            .iter()
            .map(|group| {
                let candidates: Vec<String> =
                    group.split(',').map(|c| c.trim().to_string()).collect();
                validate(set, &candidates)
            })
            .collect()
    }
}
