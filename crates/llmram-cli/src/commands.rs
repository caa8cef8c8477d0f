use crate::args::{Cli, Commands, ConfigCommand, QuantCommand};
use crate::handlers;
use crate::handlers::HandlerContext;
use anyhow::Result;
use llmram_runtime::{CONFIG_FILE_NAME, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let workspace = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(workspace.join(CONFIG_FILE_NAME), cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Estimate(args) => {
            let config = ctx.load_config()?;
            handlers::estimate::handle(&config, &args, &ctx.with_view_mode(&args.view_mode))
        }

        Commands::Table(args) => {
            let config = ctx.load_config()?;
            handlers::table::handle(&config, &args, &ctx)
        }

        Commands::Quant { command } => {
            let config = ctx.load_config()?;
            match command {
                QuantCommand::List {
                    table,
                    all,
                    view_mode,
                } => handlers::quant::list(&config, table, all, &ctx.with_view_mode(&view_mode)),
                QuantCommand::Show { name, table } => {
                    handlers::quant::show(&config, &name, table, &ctx)
                }
            }
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show { view_mode } => {
                let config = ctx.load_config()?;
                handlers::config::show(&config, &ctx.with_view_mode(&view_mode))
            }
            // Does not load the existing file, so a broken one can be replaced
            ConfigCommand::Init { force } => handlers::config::init(force, &ctx),
        },
    }
}
