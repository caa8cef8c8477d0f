mod config;
mod estimate;
mod quant;
mod sweep;

pub use config::{present_config_exists, present_config_init, present_config_show, present_guidance};
pub use estimate::{present_estimate, present_lookup_failure, present_overhead};
pub use quant::{present_quant_list, present_quant_show};
pub use sweep::present_sweep;
