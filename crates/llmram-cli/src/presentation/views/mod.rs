//! Text layouts. Each ViewModel gets its View through `CreateView`.

mod config;
mod estimate;
mod quant;
mod sweep;

pub use estimate::OverheadSummary;
