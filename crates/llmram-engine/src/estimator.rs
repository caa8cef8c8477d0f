use llmram_types::{BYTES_PER_GB, CONTEXT_BYTES_PER_TOKEN, CapacityRequest, OverheadModel};
use serde::Serialize;

/// Whether a computed capacity describes a model that can actually run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    Feasible,
    /// Overhead consumes all of the memory (result <= 0).
    Infeasible,
}

impl Feasibility {
    pub fn of(max_params_billions: f64) -> Self {
        if max_params_billions > 0.0 {
            Feasibility::Feasible
        } else {
            Feasibility::Infeasible
        }
    }

    pub fn is_feasible(self) -> bool {
        self == Feasibility::Feasible
    }
}

/// Outcome of one estimate, with the byte figures that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityResult {
    pub max_params_billions: f64,
    pub bytes_per_param: f64,
    pub total_bytes: f64,
    /// Bytes taken by the overhead model, excluding the context window.
    pub overhead_bytes: f64,
    pub context_bytes: f64,
    pub usable_bytes: f64,
}

impl CapacityResult {
    pub fn feasibility(&self) -> Feasibility {
        Feasibility::of(self.max_params_billions)
    }
}

/// Memory held by a context window of `tokens` tokens.
pub fn context_bytes(tokens: u64) -> f64 {
    tokens as f64 * CONTEXT_BYTES_PER_TOKEN
}

/// Estimate the largest model (in billions of parameters) that fits.
///
/// No clamping and no validation: when the overhead exceeds the memory the
/// result is negative and it is up to the caller to label it.
pub fn estimate(request: &CapacityRequest) -> CapacityResult {
    let bytes_per_param = request.bits_per_param / 8.0;
    let total_bytes = request.available_gb * BYTES_PER_GB;

    let (overhead_bytes, context_bytes, usable_bytes) = match request.overhead {
        OverheadModel::Absolute {
            os_overhead_gb,
            context_window_tokens,
        } => {
            let overhead = os_overhead_gb * BYTES_PER_GB;
            let context = context_window_tokens.map(context_bytes).unwrap_or(0.0);
            (overhead, context, total_bytes - overhead - context)
        }
        OverheadModel::Ratio { overhead_ratio } => {
            let usable = total_bytes * (1.0 - overhead_ratio);
            (total_bytes - usable, 0.0, usable)
        }
    };

    let max_parameters = usable_bytes / bytes_per_param;

    CapacityResult {
        max_params_billions: max_parameters / 1e9,
        bytes_per_param,
        total_bytes,
        overhead_bytes,
        context_bytes,
        usable_bytes,
    }
}

pub fn max_params_billions(available_gb: f64, bits_per_param: f64, overhead: OverheadModel) -> f64 {
    estimate(&CapacityRequest::new(available_gb, bits_per_param, overhead)).max_params_billions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_overhead_matches_closed_form() {
        assert_eq!(max_params_billions(16.0, 8.0, OverheadModel::none()), 16.0);

        for (gb, bits) in [(8.0, 4.0), (24.0, 3.5), (64.0, 16.0), (1.5, 4.75)] {
            let expected = gb * 1e9 * 8.0 / bits / 1e9;
            assert_close(max_params_billions(gb, bits, OverheadModel::none()), expected);
        }
    }

    #[test]
    fn test_concrete_absolute_scenario() {
        let result = estimate(&CapacityRequest::new(
            16.0,
            4.0,
            OverheadModel::absolute_with_context(2.0, 2048),
        ));

        assert_eq!(result.bytes_per_param, 0.5);
        assert_eq!(result.context_bytes, 1024.0e6);
        assert_close(result.usable_bytes / 1e9, 12.976);
        assert_close(result.max_params_billions, 25.952);
        assert!(result.feasibility().is_feasible());
    }

    #[test]
    fn test_context_deduction_scales_linearly() {
        assert_eq!(context_bytes(2048), 1024.0e6);
        assert_eq!(context_bytes(4096), 2.0 * context_bytes(2048));

        let without = estimate(&CapacityRequest::new(32.0, 8.0, OverheadModel::absolute(2.0)));
        let with = estimate(&CapacityRequest::new(
            32.0,
            8.0,
            OverheadModel::absolute_with_context(2.0, 2048),
        ));
        assert_close((without.usable_bytes - with.usable_bytes) / 1e6, 1024.0);
    }

    #[test]
    fn test_monotonic_in_memory() {
        let overhead = OverheadModel::default();
        let mut previous = f64::NEG_INFINITY;
        for gb in [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 512.0] {
            let current = max_params_billions(gb, 4.0, overhead);
            assert!(current > previous, "{gb} GB gave {current}");
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_in_bits() {
        let overhead = OverheadModel::ratio(0.3);
        let mut previous = f64::INFINITY;
        for bits in [1.0, 2.0, 3.5, 4.0, 4.75, 8.0, 16.0, 32.0] {
            let current = max_params_billions(16.0, bits, overhead);
            assert!(current < previous, "{bits} bits gave {current}");
            previous = current;
        }
    }

    #[test]
    fn test_full_ratio_leaves_nothing() {
        for (gb, bits) in [(1.0, 1.0), (16.0, 4.0), (512.0, 32.0)] {
            let result = estimate(&CapacityRequest::new(gb, bits, OverheadModel::ratio(1.0)));
            assert_eq!(result.usable_bytes, 0.0);
            assert_eq!(result.max_params_billions, 0.0);
            assert_eq!(result.feasibility(), Feasibility::Infeasible);
        }
    }

    #[test]
    fn test_zero_ratio_equals_no_overhead() {
        for (gb, bits) in [(16.0, 8.0), (24.0, 4.75), (128.0, 2.5)] {
            assert_eq!(
                max_params_billions(gb, bits, OverheadModel::ratio(0.0)),
                max_params_billions(gb, bits, OverheadModel::none())
            );
        }
    }

    #[test]
    fn test_ratio_model_reserves_share_of_total() {
        // 16 GB * 0.7 = 11.2 GB usable at 1 byte per param
        assert_close(max_params_billions(16.0, 8.0, OverheadModel::ratio(0.3)), 11.2);

        let result = estimate(&CapacityRequest::new(16.0, 8.0, OverheadModel::ratio(0.3)));
        assert_close(result.overhead_bytes / 1e9, 4.8);
        assert_eq!(result.context_bytes, 0.0);
    }

    #[test]
    fn test_overhead_exceeding_memory_goes_negative() {
        let result = estimate(&CapacityRequest::new(1.0, 4.0, OverheadModel::absolute(2.0)));
        assert!(result.max_params_billions < 0.0);
        assert_close(result.max_params_billions, -2.0);
        assert_eq!(result.feasibility(), Feasibility::Infeasible);
    }

    #[test]
    fn test_feasibility_boundary() {
        assert_eq!(Feasibility::of(0.0), Feasibility::Infeasible);
        assert_eq!(Feasibility::of(-0.1), Feasibility::Infeasible);
        assert_eq!(Feasibility::of(0.001), Feasibility::Feasible);
    }
}
