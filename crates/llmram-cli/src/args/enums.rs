use clap::ValueEnum;
use llmram_types::OverheadKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OverheadModelArg {
    /// Fixed OS reservation in GB, plus the context window
    Absolute,
    /// Fraction of total memory
    Ratio,
}

impl fmt::Display for OverheadModelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverheadModelArg::Absolute => write!(f, "absolute"),
            OverheadModelArg::Ratio => write!(f, "ratio"),
        }
    }
}

impl From<OverheadModelArg> for OverheadKind {
    fn from(arg: OverheadModelArg) -> Self {
        match arg {
            OverheadModelArg::Absolute => OverheadKind::Absolute,
            OverheadModelArg::Ratio => OverheadKind::Ratio,
        }
    }
}
