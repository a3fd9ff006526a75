// src/main.rs — khelpers entry point

use clap::Parser;

use khelpers::cli::{files, text, tree, Cli, Commands};
use khelpers::infra::config::Config;
use khelpers::infra::logger;
use khelpers::HelperError;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        // Bad input records exit with 2, everything else with 1
        let code = match e.downcast_ref::<HelperError>() {
            Some(err) if err.is_input_error() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    // Initialize logging (respects RUST_LOG)
    logger::init_logging(&config.log.level);

    let output = match &cli.command {
        Commands::Tree { action } => tree::run_tree(action, &config, cli.pretty)?,
        Commands::Text { action } => text::run_text(action, &config),
        Commands::Files { action } => files::run_files(action, cli.pretty)?,
    };
    println!("{output}");
    Ok(())
}
