use super::{HandlerContext, overrides_with};
use crate::args::EstimateArgs;
use crate::presentation::presenters;
use anyhow::Result;
use llmram_runtime::{Calculator, Config};

pub fn handle(config: &Config, args: &EstimateArgs, ctx: &HandlerContext) -> Result<()> {
    let mut overrides = overrides_with(&args.overhead);
    overrides.memory_gb = args.memory;
    overrides.table = args.table.clone();
    overrides.quant = args.quant.clone();
    overrides.bits = args.bits;

    let calculator = Calculator::from_config(config, &overrides)?;

    match calculator.estimate() {
        Ok(estimate) => {
            if !estimate.result.feasibility().is_feasible() {
                tracing::info!(
                    max_params_billions = estimate.result.max_params_billions,
                    "configuration infeasible"
                );
            }
            ctx.render(presenters::present_estimate(&estimate))
        }
        Err(failure) => {
            tracing::debug!(?failure, "lookup failed, prompting for a valid name");
            ctx.render(presenters::present_lookup_failure(failure))
        }
    }
}
