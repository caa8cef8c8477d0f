pub mod common;
pub mod config;
pub mod estimate;
pub mod quant;
pub mod result;
pub mod sweep;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigShowViewModel, GuidanceViewModel};
pub use estimate::{
    EstimateViewModel, LookupPromptViewModel, LookupTarget, MemoryBreakdownViewModel,
    OverheadViewModel,
};
pub use quant::{QuantLevelViewModel, QuantListViewModel, QuantShowViewModel, QuantTableViewModel};
pub use result::{CommandResultViewModel, CreateView};
pub use sweep::{SweepCellViewModel, SweepRowViewModel, SweepViewModel};
