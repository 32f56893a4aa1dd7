use aiforge_core::analysis::FitRequest;
use anyhow::Result;
use clap::Args;

use super::{find_garment, MeasurementArgs};

#[derive(Args)]
pub struct PromptArgs {
    /// Garment id, e.g. m-1
    #[arg(short, long)]
    pub garment: String,

    #[command(flatten)]
    pub measurements: MeasurementArgs,
}

pub fn run(args: &PromptArgs) -> Result<()> {
    let garment = find_garment(&args.garment)?;
    let request = FitRequest::new(garment, garment.gender, args.measurements.to_measurements());
    println!("{}", request.prompt());
    Ok(())
}
