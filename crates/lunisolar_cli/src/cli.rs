use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Solar to lunisolar calendar conversion.
#[derive(Parser)]
#[command(
    name = "lunisolar",
    version,
    about = "Convert solar dates to the lunisolar calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert one date and time.
    Convert(ConvertArgs),
    /// Convert every `DATE [TIME]` line of a file.
    Batch(BatchArgs),
    /// List the months of a lunar year.
    Months(MonthsArgs),
}

/// Options shared by all subcommands.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the event table path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Override the IANA timezone from config.
    #[arg(long = "tz")]
    pub timezone: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Local date, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Local time, HH:MM or HH:MM:SS (default from config, else 12:00).
    #[arg(short, long)]
    pub time: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// File with one `DATE [TIME]` per line; `#` starts a comment.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
pub struct MonthsArgs {
    /// Lunar year.
    #[arg(short, long)]
    pub year: i32,

    #[command(flatten)]
    pub common: CommonArgs,
}
