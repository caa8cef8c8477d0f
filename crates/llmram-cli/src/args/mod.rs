// NOTE: Command Organization
//
// `estimate` and `table` are the two ways to run the formula (one point vs.
// a grid). `quant` and `config` are namespaces for inspecting the data the
// formula is fed with.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "llmram")]
#[command(about = "Estimate how large a quantized LLM fits in your memory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding config.toml (default: $LLMRAM_PATH or the user config dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
