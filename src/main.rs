use std::path::{Path, PathBuf};

use agrovolt::io::{Scenario, read_scenario, to_estimate_string, to_scenario_string, write_estimate};
use agrovolt::{CropCatalog, EstimatorConfig, GeometryParameter, RegionTable, logging, sweep};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// Agrovoltaic layout, yield and economics estimator
#[derive(Parser, Debug)]
#[command(name = "agrovolt", version)]
#[command(about = "Estimate panel layout, energy, crop impact and economics of agrovoltaic projects", long_about = None)]
struct Args {
    /// Log debug output (overridden by AGROVOLT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a scenario file
    Estimate {
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,
        /// TOML file overriding estimator constants
        #[arg(long, value_name = "TOML")]
        config: Option<PathBuf>,
        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Also write the JSON estimate to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Evaluate a scenario across one geometry slider
    Sweep {
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,
        #[arg(short, long, value_enum)]
        parameter: SweepParameter,
        #[arg(short, long, default_value_t = 7)]
        steps: usize,
        #[arg(long, value_name = "TOML")]
        config: Option<PathBuf>,
    },
    /// List built-in crops
    Crops,
    /// List built-in regions
    Regions,
    /// Print an example scenario
    Template,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SweepParameter {
    PanelHeight,
    RowSpacing,
    GroundCoverage,
}

impl From<SweepParameter> for GeometryParameter {
    fn from(value: SweepParameter) -> Self {
        match value {
            SweepParameter::PanelHeight => GeometryParameter::PanelHeight,
            SweepParameter::RowSpacing => GeometryParameter::RowSpacing,
            SweepParameter::GroundCoverage => GeometryParameter::GroundCoverage,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Estimate {
            scenario,
            config,
            json,
            output,
        } => run_estimate(&scenario, config.as_deref(), json, output.as_deref()),
        Command::Sweep {
            scenario,
            parameter,
            steps,
            config,
        } => run_sweep(&scenario, config.as_deref(), parameter.into(), steps),
        Command::Crops => {
            print_crops();
            Ok(())
        }
        Command::Regions => {
            print_regions();
            Ok(())
        }
        Command::Template => {
            println!("{}", to_scenario_string(&Scenario::template())?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EstimatorConfig> {
    match path {
        Some(path) => {
            tracing::info!("Using estimator config {}", path.display());
            EstimatorConfig::load(path)
        }
        None => Ok(EstimatorConfig::new()),
    }
}

fn run_estimate(path: &Path, config: Option<&Path>, json: bool, output: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let session = read_scenario(path)?.into_session(config)?;
    let estimate = session.result().with_context(|| {
        format!(
            "No estimate: crop '{}' is not in the crop table",
            session.project().crop_id
        )
    })?;

    if json {
        println!("{}", to_estimate_string(estimate)?);
    } else {
        print!("{estimate}");
    }
    if let Some(output) = output {
        write_estimate(output, estimate)?;
        tracing::info!("Estimate written to {}", output.display());
    }
    Ok(())
}

fn run_sweep(path: &Path, config: Option<&Path>, parameter: GeometryParameter, steps: usize) -> Result<()> {
    let config = load_config(config)?;
    let session = read_scenario(path)?.into_session(config)?;
    let project = session.project();
    let crop = session
        .crops()
        .find(&project.crop_id)
        .with_context(|| format!("Crop '{}' is not in the crop table", project.crop_id))?;
    let region = session
        .region()
        .context("Scenario region table is empty")?;

    let result = sweep(project, crop, region, session.geometry(), parameter, steps, session.config())?;

    println!(
        "{:>10} {:>8} {:>12} {:>14} {:>8} {:>8} {:>16}",
        format!("{} ({})", short_name(parameter), parameter.unit()),
        "panels",
        "capacity kW",
        "annual kWh",
        "shade %",
        "ROI %",
        "payback"
    );
    for point in &result.points {
        let e = &point.estimate;
        println!(
            "{:>10.0} {:>8} {:>12.1} {:>14.0} {:>8.1} {:>8.1} {:>16}",
            point.value,
            e.panels.total_panels,
            e.panels.capacity_kw,
            e.energy.annual_production_kwh,
            e.agriculture.shading_pct,
            e.economics.roi_pct,
            e.economics.payback.to_string()
        );
    }
    if let Some(best) = result.best_roi() {
        println!(
            "Best ROI {:.1}% at {} = {:.0} {}",
            best.estimate.economics.roi_pct,
            parameter,
            best.value,
            parameter.unit()
        );
    }
    Ok(())
}

fn short_name(parameter: GeometryParameter) -> &'static str {
    match parameter {
        GeometryParameter::PanelHeight => "height",
        GeometryParameter::RowSpacing => "spacing",
        GeometryParameter::GroundCoverage => "coverage",
    }
}

fn print_crops() {
    let catalog = CropCatalog::builtin();
    println!(
        "{:<12} {:<12} {:>7} {:>9} {:>7} {:>8} {:>7}",
        "id", "name", "shade %", "height cm", "water", "price/kg", "compat"
    );
    for crop in catalog.sorted_by_name() {
        println!(
            "{:<12} {:<12} {:>7.0} {:>9.0} {:>7} {:>8.2} {:>7.0}",
            crop.id,
            crop.name,
            crop.shade_tolerance_pct,
            crop.height_at_maturity_cm,
            crop.water_requirement.to_string(),
            crop.market_price_per_kg,
            crop.compatibility_score
        );
    }
}

fn print_regions() {
    let table = RegionTable::builtin();
    println!("{:<14} {:<14} {:>9}", "id", "name", "sun h/day");
    for region in table.sorted_by_name() {
        println!("{:<14} {:<14} {:>9.1}", region.id, region.name, region.avg_sun_hours);
    }
}
