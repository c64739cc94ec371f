use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "echo-worth",
    version,
    about = "Score an echo's substats against character/teammate presets"
)]
pub struct Cli {
    /// Preset table (CSV). Overrides `presets_path` from the config file.
    #[arg(short, long, global = true)]
    pub presets: Option<PathBuf>,

    /// Config file (defaults to ./echo-worth.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logs except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List characters in preset order
    Characters,
    /// List teammate combinations for a character
    Teammates(TeammatesCommand),
    /// Compute the worth of an echo for one preset
    Score(ScoreCommand),
    /// Rank every preset by the worth of an echo
    Rank(RankCommand),
    /// Dump substat metadata and the character list as JSON
    Bootstrap,
}

#[derive(Args)]
pub struct TeammatesCommand {
    pub character: String,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub character: String,
    pub teammates: String,
    /// Selected substat value, e.g. `--set Crit=8.1`
    #[arg(short, long = "set", value_name = "KIND=VALUE", value_parser = parse_selection)]
    pub selections: Vec<(String, f64)>,
}

#[derive(Args)]
pub struct RankCommand {
    /// Selected substat value, e.g. `--set CritDmg=16.2`
    #[arg(short, long = "set", value_name = "KIND=VALUE", value_parser = parse_selection)]
    pub selections: Vec<(String, f64)>,
    /// Only show the best N presets (0 shows all)
    #[arg(long, default_value_t = 0)]
    pub top: usize,
}

fn parse_selection(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got `{arg}`"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for {}: {err}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}
