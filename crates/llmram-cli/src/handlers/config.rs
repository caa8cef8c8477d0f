use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use llmram_runtime::{Calculator, Config, Error, SettingsOverrides, init_config};

pub fn show(config: &Config, ctx: &HandlerContext) -> Result<()> {
    let calculator = Calculator::from_config(config, &SettingsOverrides::default())?;

    let effective_quant = calculator.level().ok().map(|(_, level)| level.name);
    let custom_tables = config.tables.iter().map(|t| t.name.clone()).collect();

    ctx.render(presenters::present_config_show(
        ctx.config_path(),
        calculator.settings(),
        effective_quant,
        custom_tables,
    ))
}

pub fn init(force: bool, ctx: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();

    match init_config(path, force) {
        Ok(_) => ctx.render(presenters::present_config_init(path, existed)),
        Err(Error::AlreadyExists(_)) => ctx.render(presenters::present_config_exists(path)),
        Err(e) => Err(e.into()),
    }
}
