use crate::settings::{
    check_context_window_tokens, check_memory_gb, check_os_overhead_gb, check_overhead_ratio,
};
use crate::{Error, Result};
use llmram_types::{
    DEFAULT_CONTEXT_WINDOW_TOKENS, DEFAULT_MEMORY_GB, DEFAULT_OS_OVERHEAD_GB,
    DEFAULT_OVERHEAD_RATIO, OverheadKind, QuantizationLevel, QuantizationTable, STANDARD_TABLE,
    TableSet,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the workspace directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LLMRAM_PATH environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.llmram (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LLMRAM_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("llmram"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".llmram"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverheadConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<OverheadKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_overhead_gb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window_tokens: Option<u64>,
    /// Set to false to skip the context-window deduction in the absolute model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduct_context: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overhead_ratio: Option<f64>,
}

/// A user-defined quantization table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub levels: Vec<QuantizationLevel>,
}

impl TableConfig {
    pub fn build(&self) -> Result<QuantizationTable> {
        let table = QuantizationTable::new(self.name.clone(), self.levels.clone())?;
        Ok(match &self.default {
            Some(level) => table.with_default(level)?,
            None => table,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quant: Option<String>,
    #[serde(default)]
    pub overhead: OverheadConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableConfig>,
}

impl Config {
    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), tables = config.tables.len(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Every setting spelled out with its built-in default, for `config init`.
    pub fn template() -> Self {
        Self {
            memory_gb: Some(DEFAULT_MEMORY_GB),
            table: Some(STANDARD_TABLE.to_string()),
            quant: Some(QuantizationTable::standard().default_level().name.clone()),
            overhead: OverheadConfig {
                model: Some(OverheadKind::Absolute),
                os_overhead_gb: Some(DEFAULT_OS_OVERHEAD_GB),
                context_window_tokens: Some(DEFAULT_CONTEXT_WINDOW_TOKENS),
                deduct_context: Some(true),
                overhead_ratio: Some(DEFAULT_OVERHEAD_RATIO),
            },
            tables: Vec::new(),
        }
    }

    /// Range-check every value present in the file.
    pub fn validate(&self) -> Result<()> {
        if let Some(memory_gb) = self.memory_gb {
            check_memory_gb(memory_gb)?;
        }
        if let Some(gb) = self.overhead.os_overhead_gb {
            check_os_overhead_gb(gb)?;
        }
        if let Some(tokens) = self.overhead.context_window_tokens {
            check_context_window_tokens(tokens)?;
        }
        if let Some(ratio) = self.overhead.overhead_ratio {
            check_overhead_ratio(ratio)?;
        }
        for table in &self.tables {
            table.build()?;
        }
        Ok(())
    }

    /// Built-in tables plus the ones declared in this file.
    pub fn table_set(&self) -> Result<TableSet> {
        let tables = self
            .tables
            .iter()
            .map(TableConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Ok(TableSet::builtin().with_tables(tables))
    }
}

/// Write the template config to `path`, refusing to clobber an existing file
/// unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<Config> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists(format!(
            "{} (use --force to overwrite)",
            path.display()
        )));
    }

    let config = Config::template();
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "wrote config");
    Ok(config)
}
