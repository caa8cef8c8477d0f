// Engine module - the capacity formula and everything derived from it.
// This layer sits between the quantization data (types) and the CLI.

pub mod estimator;
pub mod sweep;

pub use estimator::{CapacityResult, Feasibility, context_bytes, estimate, max_params_billions};
pub use sweep::{MEMORY_PRESETS_GB, SweepCell, SweepGrid, SweepRow, sweep};
