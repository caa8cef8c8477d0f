pub mod calculator;
pub mod config;
pub mod error;
pub mod settings;

pub use calculator::{CUSTOM_TABLE, Calculator, Estimate, LookupFailure};
pub use config::{
    CONFIG_FILE_NAME, Config, OverheadConfig, TableConfig, init_config, resolve_workspace_path,
};
pub use error::{Error, Result};
pub use settings::{EstimateSettings, MIN_MEMORY_GB, SettingsOverrides};
