use crate::estimator::{Feasibility, max_params_billions};
use llmram_types::{OverheadModel, QuantizationTable};
use serde::Serialize;

/// Memory sizes offered by the memory slider, in GB.
pub const MEMORY_PRESETS_GB: &[f64] = &[8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCell {
    pub level: String,
    pub max_params_billions: f64,
    pub feasibility: Feasibility,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub memory_gb: f64,
    pub cells: Vec<SweepCell>,
}

/// Estimates for every (memory, level) pair of one table.
///
/// Rows follow the order of the memory values, cells follow table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepGrid {
    pub table: String,
    pub levels: Vec<String>,
    pub overhead: OverheadModel,
    pub rows: Vec<SweepRow>,
}

impl SweepGrid {
    pub fn cell(&self, memory_gb: f64, level: &str) -> Option<&SweepCell> {
        self.rows
            .iter()
            .find(|row| row.memory_gb == memory_gb)
            .and_then(|row| row.cells.iter().find(|cell| cell.level == level))
    }

    pub fn infeasible_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| !cell.feasibility.is_feasible())
            .count()
    }
}

pub fn sweep(table: &QuantizationTable, memory_values: &[f64], overhead: OverheadModel) -> SweepGrid {
    let rows = memory_values
        .iter()
        .map(|&memory_gb| SweepRow {
            memory_gb,
            cells: table
                .levels()
                .iter()
                .map(|level| {
                    let value = max_params_billions(memory_gb, level.bits, overhead);
                    SweepCell {
                        level: level.name.clone(),
                        max_params_billions: value,
                        feasibility: Feasibility::of(value),
                    }
                })
                .collect(),
        })
        .collect();

    SweepGrid {
        table: table.name().to_string(),
        levels: table.names().map(str::to_string).collect(),
        overhead,
        rows,
    }
}
