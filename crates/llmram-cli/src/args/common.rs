use super::enums::OverheadModelArg;
use clap::Args;
use llmram_runtime::SettingsOverrides;
use llmram_runtime::settings::{
    check_bits, check_context_window_tokens, check_memory_gb, check_os_overhead_gb,
    check_overhead_ratio,
};
use llmram_types::OverheadKind;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (numbers/names only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, short, help = "Verbose output (full memory breakdown)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OverheadArgs {
    #[arg(
        long,
        value_name = "MODEL",
        help = "How overhead is deducted (default: absolute, or ratio when --overhead-ratio is given)"
    )]
    pub overhead_model: Option<OverheadModelArg>,

    #[arg(
        long,
        value_name = "GB",
        value_parser = parse_os_overhead,
        help = "Memory reserved for the OS (absolute model, default 2)"
    )]
    pub os_overhead: Option<f64>,

    #[arg(
        long,
        value_name = "TOKENS",
        value_parser = parse_context_window,
        help = "Context window deducted at 0.5 MB per token (absolute model, default 2048)"
    )]
    pub context_window: Option<u64>,

    #[arg(
        long,
        conflicts_with = "context_window",
        help = "Skip the context-window deduction"
    )]
    pub no_context: bool,

    #[arg(
        long,
        value_name = "FRACTION",
        value_parser = parse_overhead_ratio,
        help = "Share of memory reserved, 0 to 1 (ratio model, default 0.3)"
    )]
    pub overhead_ratio: Option<f64>,
}

impl OverheadArgs {
    pub fn apply(&self, overrides: &mut SettingsOverrides) {
        overrides.overhead_model = self
            .overhead_model
            .map(OverheadKind::from)
            .or(self.overhead_ratio.map(|_| OverheadKind::Ratio));
        overrides.os_overhead_gb = self.os_overhead;
        overrides.context_window_tokens = self.context_window;
        overrides.no_context = self.no_context;
        overrides.overhead_ratio = self.overhead_ratio;
    }
}

fn parse_f64(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", s))
}

pub fn parse_memory(s: &str) -> Result<f64, String> {
    check_memory_gb(parse_f64(s)?).map_err(|e| e.to_string())
}

pub fn parse_bits(s: &str) -> Result<f64, String> {
    check_bits(parse_f64(s)?).map_err(|e| e.to_string())
}

pub fn parse_os_overhead(s: &str) -> Result<f64, String> {
    check_os_overhead_gb(parse_f64(s)?).map_err(|e| e.to_string())
}

pub fn parse_overhead_ratio(s: &str) -> Result<f64, String> {
    check_overhead_ratio(parse_f64(s)?).map_err(|e| e.to_string())
}

pub fn parse_context_window(s: &str) -> Result<u64, String> {
    let tokens = s
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a whole number of tokens", s))?;
    check_context_window_tokens(tokens).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsers_accept_valid_values() {
        assert_eq!(parse_memory("16"), Ok(16.0));
        assert_eq!(parse_memory(" 1.5 "), Ok(1.5));
        assert_eq!(parse_bits("4.75"), Ok(4.75));
        assert_eq!(parse_os_overhead("0"), Ok(0.0));
        assert_eq!(parse_overhead_ratio("1"), Ok(1.0));
        assert_eq!(parse_context_window("2048"), Ok(2048));
    }

    #[test]
    fn test_parsers_reject_invalid_values() {
        assert!(parse_memory("0.99").is_err());
        assert!(parse_bits("0").is_err());
        assert!(parse_os_overhead("-1").is_err());
        assert!(parse_overhead_ratio("NaN").is_err());
        assert!(parse_context_window("0").is_err());
        assert!(parse_context_window("1.5").is_err());
    }

    #[test]
    fn test_ratio_flag_implies_ratio_model() {
        let args = OverheadArgs {
            overhead_ratio: Some(0.2),
            ..OverheadArgs::default()
        };
        let mut overrides = SettingsOverrides::default();
        args.apply(&mut overrides);

        assert_eq!(overrides.overhead_model, Some(OverheadKind::Ratio));
        assert_eq!(overrides.overhead_ratio, Some(0.2));
    }

    #[test]
    fn test_explicit_model_wins_over_ratio_hint() {
        let args = OverheadArgs {
            overhead_model: Some(OverheadModelArg::Absolute),
            overhead_ratio: Some(0.2),
            ..OverheadArgs::default()
        };
        let mut overrides = SettingsOverrides::default();
        args.apply(&mut overrides);

        assert_eq!(overrides.overhead_model, Some(OverheadKind::Absolute));
    }
}
