pub mod config;
pub mod context;
pub mod estimate;
pub mod guidance;
pub mod quant;
pub mod table;

pub use context::HandlerContext;

use crate::args::OverheadArgs;
use llmram_runtime::SettingsOverrides;

fn overrides_with(overhead: &OverheadArgs) -> SettingsOverrides {
    let mut overrides = SettingsOverrides::default();
    overhead.apply(&mut overrides);
    overrides
}
