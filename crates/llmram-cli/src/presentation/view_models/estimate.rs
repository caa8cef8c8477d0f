use serde::Serialize;

/// Overhead settings as shown to the user. Only the fields of the active
/// model are set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverheadViewModel {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_overhead_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryBreakdownViewModel {
    pub total_bytes: f64,
    pub overhead_bytes: f64,
    pub context_bytes: f64,
    pub usable_bytes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateViewModel {
    pub table: String,
    pub level: String,
    pub bits_per_param: f64,
    pub bytes_per_param: f64,
    pub memory_gb: f64,
    pub overhead: OverheadViewModel,
    pub breakdown: MemoryBreakdownViewModel,
    pub max_params_billions: f64,
    pub feasible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupTarget {
    Table,
    Level,
}

/// Asks the user to pick a valid table or level. Nothing was computed.
#[derive(Debug, Clone, Serialize)]
pub struct LookupPromptViewModel {
    pub target: LookupTarget,
    pub requested: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub available: Vec<String>,
}
