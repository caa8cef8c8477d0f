use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, EstimateViewModel, Guidance, LookupPromptViewModel, LookupTarget,
    MemoryBreakdownViewModel, OverheadViewModel, StatusBadge,
};
use llmram_runtime::{Estimate, LookupFailure};
use llmram_types::OverheadModel;

pub fn present_overhead(overhead: &OverheadModel) -> OverheadViewModel {
    match *overhead {
        OverheadModel::Absolute {
            os_overhead_gb,
            context_window_tokens,
        } => OverheadViewModel {
            model: overhead.kind().to_string(),
            os_overhead_gb: Some(os_overhead_gb),
            context_window_tokens,
            overhead_ratio: None,
        },
        OverheadModel::Ratio { overhead_ratio } => OverheadViewModel {
            model: overhead.kind().to_string(),
            os_overhead_gb: None,
            context_window_tokens: None,
            overhead_ratio: Some(overhead_ratio),
        },
    }
}

pub fn present_estimate(estimate: &Estimate) -> CommandResultViewModel<EstimateViewModel> {
    let result = &estimate.result;
    let feasible = result.feasibility().is_feasible();

    let content = EstimateViewModel {
        table: estimate.table.clone(),
        level: estimate.level.name.clone(),
        bits_per_param: estimate.level.bits,
        bytes_per_param: result.bytes_per_param,
        memory_gb: estimate.request.available_gb,
        overhead: present_overhead(&estimate.request.overhead),
        breakdown: MemoryBreakdownViewModel {
            total_bytes: result.total_bytes,
            overhead_bytes: result.overhead_bytes,
            context_bytes: result.context_bytes,
            usable_bytes: result.usable_bytes,
        },
        max_params_billions: result.max_params_billions,
        feasible,
    };

    let mut view_model = CommandResultViewModel::new(content);
    if feasible {
        return view_model;
    }

    view_model = view_model
        .with_badge(StatusBadge::infeasible())
        .with_suggestion(Guidance::new("Reduce overhead or increase memory"));

    if let OverheadModel::Absolute {
        context_window_tokens: Some(_),
        ..
    } = estimate.request.overhead
    {
        view_model = view_model.with_suggestion(
            Guidance::new("Skip the context-window deduction").with_command(cmd::ESTIMATE_NO_CONTEXT),
        );
    }

    // A full ratio leaves nothing at any memory size
    let memory_helps = !matches!(
        estimate.request.overhead,
        OverheadModel::Ratio { overhead_ratio } if overhead_ratio >= 1.0
    );
    let next_preset = llmram_engine::MEMORY_PRESETS_GB
        .iter()
        .copied()
        .find(|gb| *gb > estimate.request.available_gb);
    if memory_helps && let Some(gb) = next_preset {
        view_model = view_model.with_suggestion(
            Guidance::new("Try a larger memory size").with_command(fmt::estimate_with_memory(gb)),
        );
    }

    view_model
}

pub fn present_lookup_failure(failure: LookupFailure) -> CommandResultViewModel<LookupPromptViewModel> {
    match failure {
        LookupFailure::UnknownTable {
            requested,
            available,
        } => CommandResultViewModel::new(LookupPromptViewModel {
            target: LookupTarget::Table,
            requested: requested.clone(),
            table: None,
            available,
        })
        .with_badge(StatusBadge::unknown(LookupTarget::Table, &requested))
        .with_suggestion(
            Guidance::new("See every table and its levels").with_command(cmd::QUANT_LIST_ALL),
        ),

        LookupFailure::UnknownLevel {
            table,
            requested,
            available,
        } => CommandResultViewModel::new(LookupPromptViewModel {
            target: LookupTarget::Level,
            requested: requested.clone(),
            table: Some(table.clone()),
            available,
        })
        .with_badge(StatusBadge::unknown(LookupTarget::Level, &requested))
        .with_suggestion(
            Guidance::new("See bit-widths for this table").with_command(fmt::quant_list_table(&table)),
        ),
    }
}
