use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuantLevelViewModel {
    pub name: String,
    pub bits: f64,
    pub bytes_per_param: f64,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantTableViewModel {
    pub name: String,
    pub default_level: String,
    pub builtin: bool,
    pub levels: Vec<QuantLevelViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantListViewModel {
    pub tables: Vec<QuantTableViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantShowViewModel {
    pub table: String,
    pub level: QuantLevelViewModel,
    /// Billions of parameters per GB of usable memory.
    pub params_per_gb_billions: f64,
}
