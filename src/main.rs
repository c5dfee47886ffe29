//! PromptGen extension packager CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use promptgen_pack::utils::find_project_root;
use promptgen_pack::{package_extension, PackageConfig};

#[derive(Parser)]
#[command(name = "promptgen-pack")]
#[command(about = "Package promptgen-extension/ into dist/promptgen-extension-v<version>.zip", long_about = None)]
#[command(version)]
struct Cli {}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = PackageConfig::new(find_project_root(&cwd));

    let result = package_extension(&config)?;
    println!("{}", result.display_path());
    Ok(())
}

fn main() {
    let _cli = Cli::parse();
    promptgen_pack::logging::init_logging();

    if let Err(e) = run() {
        eprintln!("{}", "❌ Packaging failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
