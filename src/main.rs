use canister_envgen::config_loader;
use canister_envgen::dfx::{DfxCommand, DfxIdentityResolver, DfxRegistry};
use canister_envgen::generator::generate;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Writes env files with local canister ids and the admin developer principal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file overriding output paths, identity and variable names
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// dfx project directory containing dfx.json
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// dfx executable
    #[arg(long, default_value = canister_envgen::dfx::command::DEFAULT_DFX_BINARY)]
    dfx: PathBuf,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load overrides, or fall back to the stock local-dev layout
    let config = config_loader::load_or_default(args.config.as_deref())?;
    info!("Output directory: {:?}", config.output_dir);

    // Bind both collaborators to the same dfx project
    let dfx = DfxCommand::new(args.dfx, &args.project_dir);
    let registry = DfxRegistry::open(dfx.clone()).wrap_err_with(|| {
        format!("Failed to open dfx project '{}'", args.project_dir.display())
    })?;
    let identity = DfxIdentityResolver::new(dfx)?;

    let report =
        generate(&config, &registry, &identity).wrap_err("Failed to generate env files")?;

    info!(
        "Exported {} canister ids ({} undefined) to {:?}",
        report.canisters.len(),
        report.undefined_ids.len(),
        report.canister_ids_path
    );
    info!("Exported admin principal to {:?}", report.principals_path);
    Ok(())
}
