use super::estimate::present_overhead;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigShowViewModel, Guidance, GuidanceViewModel,
    StatusBadge, StatusLevel,
};
use llmram_runtime::EstimateSettings;
use std::path::Path;

pub fn present_config_show(
    path: &Path,
    settings: &EstimateSettings,
    effective_quant: Option<String>,
    custom_tables: Vec<String>,
) -> CommandResultViewModel<ConfigShowViewModel> {
    let exists = path.exists();
    let content = ConfigShowViewModel {
        path: path.display().to_string(),
        exists,
        memory_gb: settings.memory_gb,
        table: settings.table.clone(),
        quant: settings.quant.clone(),
        effective_quant,
        overhead: present_overhead(&settings.overhead),
        custom_tables,
    };

    let view_model = CommandResultViewModel::new(content);
    if exists {
        view_model.with_badge(StatusBadge::new(StatusLevel::Success, "Config loaded"))
    } else {
        view_model
            .with_badge(StatusBadge::new(
                StatusLevel::Info,
                "No config file, showing built-in defaults",
            ))
            .with_suggestion(Guidance::new("Write a starter config").with_command(cmd::CONFIG_INIT))
    }
}

pub fn present_config_init(path: &Path, overwritten: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Config overwritten"
    } else {
        "Config created"
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::new(StatusLevel::Success, label))
    .with_suggestion(Guidance::new("Check the effective settings").with_command(cmd::CONFIG_SHOW))
}

pub fn present_config_exists(path: &Path) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten: false,
    })
    .with_badge(StatusBadge::new(
        StatusLevel::Warning,
        "Config already exists, left unchanged",
    ))
    .with_suggestion(Guidance::new("Replace it with the defaults").with_command(cmd::CONFIG_INIT_FORCE))
}

pub fn present_guidance(config_path: &Path) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
    })
}
