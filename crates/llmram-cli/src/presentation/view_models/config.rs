use serde::Serialize;

use super::estimate::OverheadViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigShowViewModel {
    pub path: String,
    pub exists: bool,
    pub memory_gb: f64,
    pub table: String,
    /// `None` means the table's default level.
    pub quant: Option<String>,
    pub effective_quant: Option<String>,
    pub overhead: OverheadViewModel,
    pub custom_tables: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: String,
    pub config_exists: bool,
}
