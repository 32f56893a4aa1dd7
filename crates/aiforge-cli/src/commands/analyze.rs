use std::path::PathBuf;
use std::time::Duration;

use aiforge_core::analysis::{create_analyzer, run_analysis, FitRequest};
use aiforge_core::config::ForgeConfig;
use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{find_garment, MeasurementArgs};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Garment id, e.g. m-1
    #[arg(short, long)]
    pub garment: String,

    #[command(flatten)]
    pub measurements: MeasurementArgs,

    /// Config file (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the stored reply text verbatim instead of the report
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ForgeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ForgeConfig::default(),
    };

    let garment = find_garment(&args.garment)?;
    let request = FitRequest::new(garment, garment.gender, args.measurements.to_measurements());
    let analyzer = create_analyzer(&config.analysis);
    info!(provider = analyzer.name(), garment = garment.id, "Starting analysis");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Analyzing fit of {}", garment.name));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = run_analysis(analyzer.as_ref(), &request);
    pb.finish_and_clear();

    if args.raw {
        println!("{}", outcome.text);
    } else {
        crate::summary::print_outcome(garment, &outcome);
    }
    Ok(())
}
