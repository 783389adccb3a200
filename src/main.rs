//! typepack CLI - versioned typings-package generator
//!
//! Usage: typepack <COMMAND>
//!
//! Commands:
//!   generate    Materialize versioned packages from parsed typings data
//!   shrinkwrap  Pin wildcard dependency versions in generated packages

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use typepack::error::TypepackError;
use typepack::generator::GenerateOptions;
use typepack::versions::{VersionStore, VERSIONS_FILENAME};
use typepack::PublishConfig;

/// typepack - versioned typings-package generator
#[derive(Parser, Debug)]
#[command(name = "typepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Materialize versioned packages from parsed typings data
    Generate {
        /// Path to the parsed typings data file
        #[arg(short, long, default_value = "typings-data.json")]
        data: PathBuf,

        /// Path to the publish configuration
        #[arg(short, long, default_value = "typepack.toml")]
        config: PathBuf,

        /// Bump every package version even when content is unchanged
        #[arg(short, long)]
        force_update: bool,
    },

    /// Pin wildcard dependency versions in generated packages
    Shrinkwrap {
        /// Path to the parsed typings data file
        #[arg(short, long, default_value = "typings-data.json")]
        data: PathBuf,

        /// Path to the publish configuration
        #[arg(short, long, default_value = "typepack.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            data,
            config,
            force_update,
        } => cmd_generate(&data, &config, force_update, cli.json),
        Commands::Shrinkwrap { data, config } => cmd_shrinkwrap(&data, &config, cli.json),
    }
}

fn cmd_generate(data: &Path, config_path: &Path, force_update: bool, json: bool) -> Result<()> {
    if !json {
        println!("📦 Typepack Generate");
        println!("Data: {}", data.display());
        if force_update {
            println!("Mode: Force update");
        }
    }

    let config = PublishConfig::load_or_default(config_path)?;
    let typings = typepack::load_types_data(data)?;

    if !json {
        println!("\n✓ Loaded {} packages", typings.len());
    }

    let mut store = VersionStore::load(VERSIONS_FILENAME)?;
    let options = GenerateOptions { force_update };

    let mut log: Vec<String> = Vec::new();
    for (name, typing) in &typings {
        let outcome = typepack::generate_package(typing, &typings, &config, &mut store, options)?;

        log.push(format!(" * {}", name));
        for line in &outcome.log {
            log.push(format!("   * {}", line));
        }

        if !json {
            println!("  ✓ {} {}", name, outcome.version);
        }
    }

    let report_path = typepack::report::write_run_log(Path::new("."), &log)?;

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "generated": typings.len(),
            "report": report_path.display().to_string()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Generated {} packages", typings.len());
        println!("Report: {}", report_path.display());
    }

    Ok(())
}

fn cmd_shrinkwrap(data: &Path, config_path: &Path, json: bool) -> Result<()> {
    if !json {
        println!("🔗 Typepack Shrinkwrap");
        println!("Data: {}", data.display());
    }

    let config = PublishConfig::load_or_default(config_path)?;
    let typings = typepack::load_types_data(data)?;

    let mut pinned = 0usize;
    let mut dropped = 0usize;
    for name in typings.keys() {
        match typepack::shrinkwrap_package(name, &config) {
            Ok(outcome) => {
                pinned += outcome.pinned;
                dropped += outcome.dropped;
                if !json {
                    for line in &outcome.log {
                        println!("  {} ({})", line, name);
                    }
                }
            }
            // A package that was never generated has no manifest to pin;
            // skip it rather than failing the pass.
            Err(TypepackError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                if !json {
                    println!("  ⚠ Skipping {} (not generated)", name);
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    if json {
        let output = serde_json::json!({
            "event": "shrinkwrap",
            "pinned": pinned,
            "dropped": dropped
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Pinned {} dependencies, dropped {}", pinned, dropped);
    }

    Ok(())
}
