use super::common::{OverheadArgs, ViewModeArgs, parse_bits, parse_memory};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Estimate the largest model that fits in the given memory")]
    Estimate(EstimateArgs),

    #[command(about = "Print a capacity grid: memory sizes by quantization levels")]
    Table(TableArgs),

    #[command(about = "Inspect quantization tables")]
    Quant {
        #[command(subcommand)]
        command: QuantCommand,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    #[arg(
        long,
        short,
        value_name = "GB",
        value_parser = parse_memory,
        help = "Available memory in GB (default 16, minimum 1)"
    )]
    pub memory: Option<f64>,

    #[arg(long, short, value_name = "LEVEL", help = "Quantization level, e.g. 4-bit or q4_K_M")]
    pub quant: Option<String>,

    #[arg(
        long,
        value_name = "BITS",
        value_parser = parse_bits,
        conflicts_with = "quant",
        help = "Bits per parameter, bypassing the quantization tables"
    )]
    pub bits: Option<f64>,

    #[arg(long, short, value_name = "TABLE", help = "Quantization table (standard, k-quant, ...)")]
    pub table: Option<String>,

    #[command(flatten)]
    pub overhead: OverheadArgs,

    #[command(flatten)]
    pub view_mode: ViewModeArgs,
}

#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    #[arg(long, short, value_name = "TABLE", help = "Quantization table (standard, k-quant, ...)")]
    pub table: Option<String>,

    #[arg(
        long,
        short,
        value_name = "GB",
        num_args = 1..,
        value_parser = parse_memory,
        help = "Memory sizes to tabulate (default: 8 16 32 64 128 256 512)"
    )]
    pub memory: Vec<f64>,

    #[command(flatten)]
    pub overhead: OverheadArgs,

    #[arg(long, help = "Write the grid as CSV instead of a formatted table")]
    pub csv: bool,
}

#[derive(Subcommand)]
pub enum QuantCommand {
    #[command(about = "List the levels of a quantization table")]
    List {
        #[arg(long, short, value_name = "TABLE")]
        table: Option<String>,

        #[arg(long, help = "List every available table")]
        all: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one quantization level")]
    Show {
        #[arg(help = "Level name, e.g. 8-bit or q5_K_S")]
        name: String,

        #[arg(long, short, value_name = "TABLE")]
        table: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective settings and where they came from")]
    Show {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Write a config.toml with every setting at its default")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
