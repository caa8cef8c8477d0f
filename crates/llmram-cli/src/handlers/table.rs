use super::{HandlerContext, overrides_with};
use crate::args::TableArgs;
use crate::presentation::formatters::format_gb;
use crate::presentation::presenters;
use anyhow::Result;
use llmram_engine::{MEMORY_PRESETS_GB, SweepGrid};
use llmram_runtime::{Calculator, Config};
use std::io::Write;

pub fn handle(config: &Config, args: &TableArgs, ctx: &HandlerContext) -> Result<()> {
    let mut overrides = overrides_with(&args.overhead);
    overrides.table = args.table.clone();

    let calculator = Calculator::from_config(config, &overrides)?;

    let memory_values: &[f64] = if args.memory.is_empty() {
        MEMORY_PRESETS_GB
    } else {
        &args.memory
    };

    let grid = match calculator.sweep(memory_values) {
        Ok(grid) => grid,
        Err(failure) => return ctx.render(presenters::present_lookup_failure(failure)),
    };

    tracing::debug!(
        table = %grid.table,
        rows = grid.rows.len(),
        infeasible = grid.infeasible_count(),
        "swept memory sizes"
    );

    if args.csv {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_csv(&grid, &mut handle)?;
        handle.flush()?;
        return Ok(());
    }

    ctx.render(presenters::present_sweep(&grid))
}

/// One row per memory size. Infeasible cells are left empty.
pub fn write_csv<W: Write>(grid: &SweepGrid, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["memory_gb".to_string()];
    header.extend(grid.levels.iter().cloned());
    writer.write_record(&header)?;

    for row in &grid.rows {
        let mut record = vec![format_gb(row.memory_gb)];
        record.extend(row.cells.iter().map(|cell| {
            if cell.feasibility.is_feasible() {
                format!("{:.4}", cell.max_params_billions)
            } else {
                String::new()
            }
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
