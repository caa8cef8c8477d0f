use serde::Serialize;

use super::estimate::OverheadViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct SweepCellViewModel {
    pub level: String,
    pub max_params_billions: f64,
    pub feasible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepRowViewModel {
    pub memory_gb: f64,
    pub cells: Vec<SweepCellViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepViewModel {
    pub table: String,
    pub levels: Vec<String>,
    pub overhead: OverheadViewModel,
    pub rows: Vec<SweepRowViewModel>,
}
