use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use llmram_runtime::{Config, LookupFailure};
use llmram_types::{QuantizationTable, STANDARD_TABLE, TableSet};

pub fn list(config: &Config, table: Option<String>, all: bool, ctx: &HandlerContext) -> Result<()> {
    let tables = config.table_set()?;
    let custom: Vec<&str> = config.tables.iter().map(|t| t.name.as_str()).collect();

    if all {
        return ctx.render(presenters::present_quant_list(tables.iter(), &custom));
    }

    let name = selected_table_name(config, table);
    match lookup_table(&tables, &name) {
        Ok(found) => ctx.render(presenters::present_quant_list([found], &custom)),
        Err(failure) => ctx.render(presenters::present_lookup_failure(failure)),
    }
}

pub fn show(config: &Config, name: &str, table: Option<String>, ctx: &HandlerContext) -> Result<()> {
    let tables = config.table_set()?;
    let explicit_table = table.is_some();
    let table_name = selected_table_name(config, table);

    let selected = match lookup_table(&tables, &table_name) {
        Ok(found) => found,
        Err(failure) => return ctx.render(presenters::present_lookup_failure(failure)),
    };

    if let Some(level) = selected.level(name) {
        return ctx.render(presenters::present_quant_show(selected, level));
    }

    // Without --table, a name unique to another table (e.g. q4_K_M) still resolves
    if !explicit_table
        && let Some((other, level)) = tables
            .iter()
            .find_map(|t| t.level(name).map(|level| (t, level)))
    {
        tracing::debug!(level = name, table = other.name(), "found level in another table");
        return ctx.render(presenters::present_quant_show(other, level));
    }

    ctx.render(presenters::present_lookup_failure(LookupFailure::UnknownLevel {
        table: selected.name().to_string(),
        requested: name.to_string(),
        available: selected.names().map(str::to_string).collect(),
    }))
}

fn selected_table_name(config: &Config, table: Option<String>) -> String {
    table
        .or_else(|| config.table.clone())
        .unwrap_or_else(|| STANDARD_TABLE.to_string())
}

fn lookup_table<'a>(tables: &'a TableSet, name: &str) -> Result<&'a QuantizationTable, LookupFailure> {
    tables.get(name).ok_or_else(|| LookupFailure::UnknownTable {
        requested: name.to_string(),
        available: tables.names().map(str::to_string).collect(),
    })
}
