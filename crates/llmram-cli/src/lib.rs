// NOTE: llmram layering
//
// types   - quantization tables and the request model (pure data)
// engine  - the capacity formula and the memory sweep (pure functions)
// runtime - config file, settings merge, table/level selection
// cli     - argument parsing, range checks, presentation
//
// The estimator never validates or clamps. Range checks happen where input
// is collected (clap value parsers here, `Config::validate` for the file),
// and a non-positive estimate is labelled infeasible by the presenters.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, QuantCommand};
pub use commands::run;
