mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aiforge", about = "AiForge virtual fitting room tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List garments in the catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Print the fit-analysis prompt for a garment
    Prompt(commands::prompt::PromptArgs),
    /// Run one fit analysis against the configured provider
    Analyze(commands::analyze::AnalyzeArgs),
    /// Parse a fit-analysis reply
    Parse(commands::parse::ParseArgs),
    /// Print the copy of a site page
    Page(commands::page::PageArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Prompt(args) => commands::prompt::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Page(args) => commands::page::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
