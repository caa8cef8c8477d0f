// Settings are merged in one place: CLI flag > config file > built-in default.

use crate::config::Config;
use crate::{Error, Result};
use llmram_types::{
    DEFAULT_CONTEXT_WINDOW_TOKENS, DEFAULT_MEMORY_GB, DEFAULT_OS_OVERHEAD_GB,
    DEFAULT_OVERHEAD_RATIO, OverheadKind, OverheadModel, STANDARD_TABLE,
};
use serde::Serialize;

/// Smallest memory size accepted from users, in GB.
pub const MIN_MEMORY_GB: f64 = 1.0;

pub fn check_memory_gb(value: f64) -> Result<f64> {
    if value.is_finite() && value >= MIN_MEMORY_GB {
        Ok(value)
    } else {
        Err(Error::InvalidSetting(format!(
            "memory must be at least {} GB, got {}",
            MIN_MEMORY_GB, value
        )))
    }
}

pub fn check_os_overhead_gb(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidSetting(format!(
            "OS overhead must be zero or more GB, got {}",
            value
        )))
    }
}

pub fn check_overhead_ratio(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidSetting(format!(
            "overhead ratio must be between 0 and 1, got {}",
            value
        )))
    }
}

pub fn check_context_window_tokens(value: u64) -> Result<u64> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(Error::InvalidSetting(
            "context window must be at least 1 token".to_string(),
        ))
    }
}

pub fn check_bits(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidSetting(format!(
            "bit-width must be a positive number, got {}",
            value
        )))
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub memory_gb: Option<f64>,
    pub table: Option<String>,
    pub quant: Option<String>,
    pub bits: Option<f64>,
    pub overhead_model: Option<OverheadKind>,
    pub os_overhead_gb: Option<f64>,
    pub context_window_tokens: Option<u64>,
    pub no_context: bool,
    pub overhead_ratio: Option<f64>,
}

/// What to compute with, after merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSettings {
    pub memory_gb: f64,
    pub table: String,
    /// `None` selects the table's default level.
    pub quant: Option<String>,
    /// Explicit bit-width, bypassing the table.
    pub bits: Option<f64>,
    pub overhead: OverheadModel,
}

impl EstimateSettings {
    pub fn resolve(config: &Config, overrides: &SettingsOverrides) -> Result<Self> {
        let memory_gb = check_memory_gb(
            overrides
                .memory_gb
                .or(config.memory_gb)
                .unwrap_or(DEFAULT_MEMORY_GB),
        )?;

        let configured_table = config.table.as_deref().unwrap_or(STANDARD_TABLE);
        let table = overrides
            .table
            .clone()
            .unwrap_or_else(|| configured_table.to_string());

        // The configured quant belongs to the configured table
        let quant = match &overrides.quant {
            Some(quant) => Some(quant.clone()),
            None if table == configured_table => config.quant.clone(),
            None => None,
        };

        let bits = overrides.bits.map(check_bits).transpose()?;
        let overhead = resolve_overhead(config, overrides)?;

        let settings = Self {
            memory_gb,
            table,
            quant,
            bits,
            overhead,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn resolve_overhead(config: &Config, overrides: &SettingsOverrides) -> Result<OverheadModel> {
    let kind = overrides
        .overhead_model
        .or(config.overhead.model)
        .unwrap_or_default();

    match kind {
        OverheadKind::Absolute => {
            let os_overhead_gb = check_os_overhead_gb(
                overrides
                    .os_overhead_gb
                    .or(config.overhead.os_overhead_gb)
                    .unwrap_or(DEFAULT_OS_OVERHEAD_GB),
            )?;

            // An explicit token count re-enables a deduction the file turned off
            let deduct_context = if overrides.no_context {
                false
            } else if overrides.context_window_tokens.is_some() {
                true
            } else {
                config.overhead.deduct_context.unwrap_or(true)
            };

            let context_window_tokens = if deduct_context {
                Some(check_context_window_tokens(
                    overrides
                        .context_window_tokens
                        .or(config.overhead.context_window_tokens)
                        .unwrap_or(DEFAULT_CONTEXT_WINDOW_TOKENS),
                )?)
            } else {
                None
            };

            Ok(OverheadModel::Absolute {
                os_overhead_gb,
                context_window_tokens,
            })
        }
        OverheadKind::Ratio => {
            let overhead_ratio = check_overhead_ratio(
                overrides
                    .overhead_ratio
                    .or(config.overhead.overhead_ratio)
                    .unwrap_or(DEFAULT_OVERHEAD_RATIO),
            )?;
            Ok(OverheadModel::Ratio { overhead_ratio })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverheadConfig;

    #[test]
    fn test_defaults_without_config_or_flags() -> Result<()> {
        let settings = EstimateSettings::resolve(&Config::default(), &SettingsOverrides::default())?;

        assert_eq!(settings.memory_gb, 16.0);
        assert_eq!(settings.table, "standard");
        assert_eq!(settings.quant, None);
        assert_eq!(settings.overhead, OverheadModel::absolute_with_context(2.0, 2048));
        Ok(())
    }

    #[test]
    fn test_flags_override_config() -> Result<()> {
        let config = Config {
            memory_gb: Some(32.0),
            quant: Some("8-bit".to_string()),
            ..Config::default()
        };
        let overrides = SettingsOverrides {
            memory_gb: Some(64.0),
            ..SettingsOverrides::default()
        };

        let settings = EstimateSettings::resolve(&config, &overrides)?;
        assert_eq!(settings.memory_gb, 64.0);
        assert_eq!(settings.quant.as_deref(), Some("8-bit"));
        Ok(())
    }

    #[test]
    fn test_table_flag_drops_configured_quant() -> Result<()> {
        let config = Config {
            quant: Some("8-bit".to_string()),
            ..Config::default()
        };
        let overrides = SettingsOverrides {
            table: Some("k-quant".to_string()),
            ..SettingsOverrides::default()
        };

        let settings = EstimateSettings::resolve(&config, &overrides)?;
        assert_eq!(settings.table, "k-quant");
        assert_eq!(settings.quant, None);
        Ok(())
    }

    #[test]
    fn test_table_flag_naming_configured_table_keeps_quant() -> Result<()> {
        let config = Config {
            table: Some("k-quant".to_string()),
            quant: Some("q4_K_M".to_string()),
            ..Config::default()
        };
        let overrides = SettingsOverrides {
            table: Some("k-quant".to_string()),
            ..SettingsOverrides::default()
        };

        let settings = EstimateSettings::resolve(&config, &overrides)?;
        assert_eq!(settings.quant.as_deref(), Some("q4_K_M"));

        // Same for the implicit standard table
        let config = Config {
            quant: Some("8-bit".to_string()),
            ..Config::default()
        };
        let overrides = SettingsOverrides {
            table: Some("standard".to_string()),
            ..SettingsOverrides::default()
        };
        let settings = EstimateSettings::resolve(&config, &overrides)?;
        assert_eq!(settings.quant.as_deref(), Some("8-bit"));
        Ok(())
    }

    #[test]
    fn test_ratio_model_from_config() -> Result<()> {
        let config = Config {
            overhead: OverheadConfig {
                model: Some(OverheadKind::Ratio),
                overhead_ratio: Some(0.25),
                ..OverheadConfig::default()
            },
            ..Config::default()
        };

        let settings = EstimateSettings::resolve(&config, &SettingsOverrides::default())?;
        assert_eq!(settings.overhead, OverheadModel::ratio(0.25));
        Ok(())
    }

    #[test]
    fn test_ratio_defaults_to_thirty_percent() -> Result<()> {
        let overrides = SettingsOverrides {
            overhead_model: Some(OverheadKind::Ratio),
            ..SettingsOverrides::default()
        };

        let settings = EstimateSettings::resolve(&Config::default(), &overrides)?;
        assert_eq!(settings.overhead, OverheadModel::ratio(0.3));
        Ok(())
    }

    #[test]
    fn test_no_context_flag() -> Result<()> {
        let overrides = SettingsOverrides {
            no_context: true,
            os_overhead_gb: Some(1.5),
            ..SettingsOverrides::default()
        };

        let settings = EstimateSettings::resolve(&Config::default(), &overrides)?;
        assert_eq!(settings.overhead, OverheadModel::absolute(1.5));
        Ok(())
    }

    #[test]
    fn test_config_can_disable_context_and_flag_reenables_it() -> Result<()> {
        let config = Config {
            overhead: OverheadConfig {
                deduct_context: Some(false),
                ..OverheadConfig::default()
            },
            ..Config::default()
        };

        let settings = EstimateSettings::resolve(&config, &SettingsOverrides::default())?;
        assert_eq!(settings.overhead, OverheadModel::absolute(2.0));

        let overrides = SettingsOverrides {
            context_window_tokens: Some(4096),
            ..SettingsOverrides::default()
        };
        let settings = EstimateSettings::resolve(&config, &overrides)?;
        assert_eq!(settings.overhead, OverheadModel::absolute_with_context(2.0, 4096));
        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases = [
            SettingsOverrides {
                memory_gb: Some(0.5),
                ..SettingsOverrides::default()
            },
            SettingsOverrides {
                os_overhead_gb: Some(-1.0),
                ..SettingsOverrides::default()
            },
            SettingsOverrides {
                context_window_tokens: Some(0),
                ..SettingsOverrides::default()
            },
            SettingsOverrides {
                overhead_model: Some(OverheadKind::Ratio),
                overhead_ratio: Some(1.01),
                ..SettingsOverrides::default()
            },
            SettingsOverrides {
                bits: Some(0.0),
                ..SettingsOverrides::default()
            },
        ];

        for overrides in cases {
            let result = EstimateSettings::resolve(&Config::default(), &overrides);
            assert!(matches!(result, Err(Error::InvalidSetting(_))), "{overrides:?}");
        }
    }

    #[test]
    fn test_checks_accept_boundaries() {
        assert!(check_memory_gb(1.0).is_ok());
        assert!(check_os_overhead_gb(0.0).is_ok());
        assert!(check_overhead_ratio(0.0).is_ok());
        assert!(check_overhead_ratio(1.0).is_ok());
        assert!(check_context_window_tokens(1).is_ok());
        assert!(check_overhead_ratio(f64::NAN).is_err());
    }
}
