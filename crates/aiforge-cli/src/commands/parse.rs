use aiforge_core::analysis::parse_analysis;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ParseArgs {
    /// Reply text, e.g. "Great drape. | Fit Score: 87"
    pub text: String,
}

pub fn run(args: &ParseArgs) -> Result<()> {
    crate::summary::print_report(&parse_analysis(&args.text));
    Ok(())
}
