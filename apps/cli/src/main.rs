mod cli;
mod config;
mod error;

use clap::Parser;
use echo_worth::{
    ComputeWorthRequest, PresetCatalog, RankWorthRequest, TeammateOptionsRequest, bootstrap,
    compute_worth, load_catalog_or_empty, rank_worth, teammate_options,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(cli: &cli::Cli, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.quiet {
            "error"
        } else {
            match cli.verbose {
                0 => config.log_level(),
                1 => "info",
                _ => "debug",
            }
        };
        EnvFilter::new(level)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn selection_map(selections: Vec<(String, f64)>) -> BTreeMap<String, f64> {
    selections.into_iter().collect()
}

fn run(cli: cli::Cli, config: Config) -> Result<i32> {
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output()
    };
    let presets_path = cli.presets.clone().unwrap_or_else(|| config.presets_path());
    let catalog: PresetCatalog = load_catalog_or_empty(&presets_path);
    tracing::info!(
        path = %presets_path.display(),
        rows = catalog.len(),
        "preset catalog ready"
    );

    match cli.command {
        cli::Commands::Characters => {
            let characters: Vec<&str> = catalog.characters_in_order().collect();
            match output {
                OutputFormat::Json => print_json(&characters)?,
                OutputFormat::Text => {
                    for character in characters {
                        println!("{character}");
                    }
                }
            }
        }
        cli::Commands::Teammates(cmd) => {
            let response = teammate_options(
                &catalog,
                TeammateOptionsRequest {
                    character: cmd.character,
                },
            );
            match output {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Text => {
                    for teammates in &response.teammates {
                        println!("{teammates}");
                    }
                }
            }
        }
        cli::Commands::Score(cmd) => {
            let response = compute_worth(
                &catalog,
                ComputeWorthRequest {
                    character: cmd.character,
                    teammates: cmd.teammates,
                    selections: selection_map(cmd.selections),
                },
            )
            .map_err(CliError::Selection)?;
            match output {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Text => println!("{}", response.display),
            }
        }
        cli::Commands::Rank(cmd) => {
            let response = rank_worth(
                &catalog,
                RankWorthRequest {
                    selections: selection_map(cmd.selections),
                    top_k: cmd.top,
                },
            )
            .map_err(CliError::Selection)?;
            match output {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Text => {
                    for entry in &response.ranked {
                        println!(
                            "{:>10}  {} / {}",
                            entry.display, entry.preset.character, entry.preset.teammates
                        );
                    }
                }
            }
        }
        cli::Commands::Bootstrap => print_json(&bootstrap(&catalog))?,
    }

    Ok(exit_code::SUCCESS)
}

fn main() {
    let cli = cli::Cli::parse();
    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    };
    init_logging(&cli, &config);

    let code = match run(cli, config) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            eprintln!("error: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code);
}
