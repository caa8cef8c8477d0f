use super::estimate::present_overhead;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, SweepCellViewModel, SweepRowViewModel,
    SweepViewModel,
};
use llmram_engine::SweepGrid;

pub fn present_sweep(grid: &SweepGrid) -> CommandResultViewModel<SweepViewModel> {
    let rows = grid
        .rows
        .iter()
        .map(|row| SweepRowViewModel {
            memory_gb: row.memory_gb,
            cells: row
                .cells
                .iter()
                .map(|cell| SweepCellViewModel {
                    level: cell.level.clone(),
                    max_params_billions: cell.max_params_billions,
                    feasible: cell.feasibility.is_feasible(),
                })
                .collect(),
        })
        .collect();

    let content = SweepViewModel {
        table: grid.table.clone(),
        levels: grid.levels.clone(),
        overhead: present_overhead(&grid.overhead),
        rows,
    };

    let mut view_model = CommandResultViewModel::new(content);

    let infeasible = grid.infeasible_count();
    if infeasible > 0 {
        view_model = view_model
            .with_badge(StatusBadge::infeasible_cells(infeasible))
            .with_suggestion(Guidance::new("Reduce overhead or increase memory"));
    }

    view_model.with_suggestion(
        Guidance::new("Estimate a single configuration in detail").with_command(cmd::ESTIMATE_VERBOSE),
    )
}
