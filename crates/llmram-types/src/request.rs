use serde::{Deserialize, Serialize};

/// Decimal gigabyte. Memory is quoted the way vendors quote it, not in GiB.
pub const BYTES_PER_GB: f64 = 1e9;

/// Memory reserved per context-window token (0.5 MB).
pub const CONTEXT_BYTES_PER_TOKEN: f64 = 0.5e6;

pub const DEFAULT_MEMORY_GB: f64 = 16.0;
pub const DEFAULT_OS_OVERHEAD_GB: f64 = 2.0;
pub const DEFAULT_OVERHEAD_RATIO: f64 = 0.3;
pub const DEFAULT_CONTEXT_WINDOW_TOKENS: u64 = 2048;

/// How non-model memory is taken out of the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum OverheadModel {
    /// Fixed OS reservation, plus an optional per-token context deduction.
    Absolute {
        os_overhead_gb: f64,
        context_window_tokens: Option<u64>,
    },
    /// A fraction of total memory, in `[0, 1]`.
    Ratio { overhead_ratio: f64 },
}

impl OverheadModel {
    pub fn absolute(os_overhead_gb: f64) -> Self {
        OverheadModel::Absolute {
            os_overhead_gb,
            context_window_tokens: None,
        }
    }

    pub fn absolute_with_context(os_overhead_gb: f64, context_window_tokens: u64) -> Self {
        OverheadModel::Absolute {
            os_overhead_gb,
            context_window_tokens: Some(context_window_tokens),
        }
    }

    pub fn ratio(overhead_ratio: f64) -> Self {
        OverheadModel::Ratio { overhead_ratio }
    }

    /// No deduction at all.
    pub fn none() -> Self {
        Self::absolute(0.0)
    }

    pub fn kind(&self) -> OverheadKind {
        match self {
            OverheadModel::Absolute { .. } => OverheadKind::Absolute,
            OverheadModel::Ratio { .. } => OverheadKind::Ratio,
        }
    }
}

impl Default for OverheadModel {
    fn default() -> Self {
        Self::absolute_with_context(DEFAULT_OS_OVERHEAD_GB, DEFAULT_CONTEXT_WINDOW_TOKENS)
    }
}

/// Discriminant of [`OverheadModel`], used where only the choice matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverheadKind {
    #[default]
    Absolute,
    Ratio,
}

impl std::fmt::Display for OverheadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverheadKind::Absolute => write!(f, "absolute"),
            OverheadKind::Ratio => write!(f, "ratio"),
        }
    }
}

/// One estimation input. Values are taken as given; range checks belong to
/// whoever collects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityRequest {
    pub available_gb: f64,
    pub bits_per_param: f64,
    pub overhead: OverheadModel,
}

impl CapacityRequest {
    pub fn new(available_gb: f64, bits_per_param: f64, overhead: OverheadModel) -> Self {
        Self {
            available_gb,
            bits_per_param,
            overhead,
        }
    }
}
