use crate::config::Config;
use crate::settings::{EstimateSettings, SettingsOverrides};
use crate::Result;
use llmram_engine::{CapacityResult, SweepGrid, estimate, sweep};
use llmram_types::{CapacityRequest, QuantizationLevel, QuantizationTable, TableSet};
use serde::Serialize;

/// Table name reported for an explicit `--bits` value.
pub const CUSTOM_TABLE: &str = "custom";

/// The requested table or level does not exist. Not an error: the caller
/// asks the user to pick a valid name instead of computing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupFailure {
    UnknownTable {
        requested: String,
        available: Vec<String>,
    },
    UnknownLevel {
        table: String,
        requested: String,
        available: Vec<String>,
    },
}

/// One completed estimate and everything that went into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub table: String,
    pub level: QuantizationLevel,
    pub request: CapacityRequest,
    pub result: CapacityResult,
}

/// Binds resolved settings to the available tables.
pub struct Calculator {
    tables: TableSet,
    settings: EstimateSettings,
}

impl Calculator {
    pub fn new(tables: TableSet, settings: EstimateSettings) -> Self {
        Self { tables, settings }
    }

    pub fn from_config(config: &Config, overrides: &SettingsOverrides) -> Result<Self> {
        let settings = EstimateSettings::resolve(config, overrides)?;
        Ok(Self::new(config.table_set()?, settings))
    }

    pub fn settings(&self) -> &EstimateSettings {
        &self.settings
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    pub fn table(&self) -> std::result::Result<&QuantizationTable, LookupFailure> {
        self.tables
            .get(&self.settings.table)
            .ok_or_else(|| LookupFailure::UnknownTable {
                requested: self.settings.table.clone(),
                available: self.tables.names().map(str::to_string).collect(),
            })
    }

    /// The level to estimate with: explicit bits, the named level, or the
    /// table default.
    pub fn level(&self) -> std::result::Result<(String, QuantizationLevel), LookupFailure> {
        if let Some(bits) = self.settings.bits {
            return Ok((
                CUSTOM_TABLE.to_string(),
                QuantizationLevel::new(format!("{}-bit", bits), bits),
            ));
        }

        let table = self.table()?;
        let level = match &self.settings.quant {
            Some(name) => table
                .level(name)
                .ok_or_else(|| LookupFailure::UnknownLevel {
                    table: table.name().to_string(),
                    requested: name.clone(),
                    available: table.names().map(str::to_string).collect(),
                })?,
            None => table.default_level(),
        };

        Ok((table.name().to_string(), level.clone()))
    }

    pub fn estimate(&self) -> std::result::Result<Estimate, LookupFailure> {
        let (table, level) = self.level()?;
        let request = CapacityRequest::new(self.settings.memory_gb, level.bits, self.settings.overhead);
        let result = estimate(&request);

        tracing::debug!(
            table = %table,
            level = %level.name,
            max_params_billions = result.max_params_billions,
            "estimated capacity"
        );

        Ok(Estimate {
            table,
            level,
            request,
            result,
        })
    }

    pub fn sweep(&self, memory_values: &[f64]) -> std::result::Result<SweepGrid, LookupFailure> {
        let table = self.table()?;
        Ok(sweep(table, memory_values, self.settings.overhead))
    }
}
