use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Context, Result};
use llmram_runtime::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where the workspace config lives and how results are printed.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    config_path: PathBuf,
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(config_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            config_path,
            format,
            view_mode: ViewMode::default(),
        }
    }

    /// Same workspace, with the command's `--quiet`/`--verbose` applied.
    pub fn with_view_mode(&self, view_mode: &ViewModeArgs) -> Self {
        Self {
            view_mode: view_mode.resolve(),
            ..self.clone()
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read `config.toml`; a missing file yields the built-in defaults.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path)
            .with_context(|| format!("failed to load {}", self.config_path.display()))
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        ConsoleRenderer::new(self.format, self.view_mode).render(view_model)
    }
}
