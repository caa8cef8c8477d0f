use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, QuantLevelViewModel, QuantListViewModel, QuantShowViewModel,
    QuantTableViewModel, StatusBadge, StatusLevel,
};
use llmram_types::{K_QUANT_TABLE, QuantizationLevel, QuantizationTable};

fn present_level(level: &QuantizationLevel, default_name: &str) -> QuantLevelViewModel {
    QuantLevelViewModel {
        name: level.name.clone(),
        bits: level.bits,
        bytes_per_param: level.bytes_per_param(),
        is_default: level.name == default_name,
    }
}

fn present_table(table: &QuantizationTable, custom: &[&str]) -> QuantTableViewModel {
    let default_level = table.default_level().name.clone();
    QuantTableViewModel {
        name: table.name().to_string(),
        builtin: !custom.contains(&table.name()),
        levels: table
            .levels()
            .iter()
            .map(|level| present_level(level, &default_level))
            .collect(),
        default_level,
    }
}

/// `custom` names the tables that came from the config file.
pub fn present_quant_list<'a>(
    tables: impl IntoIterator<Item = &'a QuantizationTable>,
    custom: &[&str],
) -> CommandResultViewModel<QuantListViewModel> {
    let tables: Vec<QuantTableViewModel> = tables
        .into_iter()
        .map(|table| present_table(table, custom))
        .collect();
    let single = tables.len() == 1;

    let mut view_model = CommandResultViewModel::new(QuantListViewModel { tables });

    if single {
        view_model = view_model.with_suggestion(
            Guidance::new("List every table, including your own").with_command(cmd::QUANT_LIST_ALL),
        );
    }

    if !view_model.content.tables.iter().any(|t| !t.builtin) {
        view_model = view_model.with_suggestion(
            Guidance::new("Add your own table under [[tables]] in config.toml")
                .with_command(cmd::CONFIG_INIT),
        );
    }

    view_model
}

pub fn present_quant_show(
    table: &QuantizationTable,
    level: &QuantizationLevel,
) -> CommandResultViewModel<QuantShowViewModel> {
    let level = present_level(level, &table.default_level().name);
    let params_per_gb_billions = 1.0 / level.bytes_per_param;

    let label = format!("{} ({} table)", level.name, table.name());
    CommandResultViewModel::new(QuantShowViewModel {
        table: table.name().to_string(),
        level,
        params_per_gb_billions,
    })
    .with_badge(StatusBadge::new(StatusLevel::Info, label))
    .with_suggestion(Guidance::new("Compare levels across memory sizes").with_command(
        if table.name() == K_QUANT_TABLE {
            cmd::TABLE_K_QUANT.to_string()
        } else {
            format!("{} --table {}", cmd::TABLE, table.name())
        },
    ))
}
