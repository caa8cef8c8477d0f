use std::fmt;

use crate::presentation::formatters::{format_billions, format_bytes_as_gb, format_gb, format_percent};
use crate::presentation::view_models::{
    CreateView, EstimateViewModel, LookupPromptViewModel, LookupTarget, OverheadViewModel, ViewMode,
};

// --------------------------------------------------------
// Estimate View
// --------------------------------------------------------

impl CreateView for EstimateViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EstimateView { data: self, mode })
    }
}

struct EstimateView<'a> {
    data: &'a EstimateViewModel,
    mode: ViewMode,
}

impl<'a> EstimateView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.feasible {
            return writeln!(f, "infeasible");
        }
        writeln!(f, "{}", format_billions(self.data.max_params_billions))
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.feasible {
            return self.render_infeasible(f);
        }
        writeln!(
            f,
            "With {} quantization, you can run a model with up to {} billion parameters.",
            self.data.level,
            format_billions(self.data.max_params_billions)
        )
    }

    fn render_infeasible(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shortfall = -self.data.breakdown.usable_bytes;
        if shortfall > 0.0 {
            writeln!(
                f,
                "No {} model fits: overhead exceeds memory by {} GB.",
                self.data.level,
                format_bytes_as_gb(shortfall)
            )
        } else {
            writeln!(
                f,
                "No {} model fits: overhead takes all of the memory.",
                self.data.level
            )
        }
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f)?;

        let d = self.data;
        writeln!(
            f,
            "  {:<14} {} ({} table), {} bits = {} bytes/param",
            "Quantization:",
            d.level,
            d.table,
            format_gb(d.bits_per_param),
            format_gb(d.bytes_per_param)
        )?;
        writeln!(f, "  {:<14} {} GB", "Memory:", format_gb(d.memory_gb))?;
        writeln!(
            f,
            "  {:<14} {} GB ({})",
            "Overhead:",
            format_bytes_as_gb(d.breakdown.overhead_bytes),
            OverheadSummary(&d.overhead)
        )?;
        if d.breakdown.context_bytes > 0.0 {
            writeln!(
                f,
                "  {:<14} {} GB",
                "Context:",
                format_bytes_as_gb(d.breakdown.context_bytes)
            )?;
        }
        writeln!(
            f,
            "  {:<14} {} GB",
            "Usable:",
            format_bytes_as_gb(d.breakdown.usable_bytes)
        )
    }
}

impl<'a> fmt::Display for EstimateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

/// One-line description of an overhead model, shared by the estimate,
/// table and config views.
pub struct OverheadSummary<'a>(pub &'a OverheadViewModel);

impl<'a> fmt::Display for OverheadSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let o = self.0;
        if let Some(ratio) = o.overhead_ratio {
            return write!(f, "{} model, {} of memory", o.model, format_percent(ratio));
        }

        write!(
            f,
            "{} model, {} GB OS",
            o.model,
            format_gb(o.os_overhead_gb.unwrap_or_default())
        )?;
        match o.context_window_tokens {
            Some(tokens) => write!(f, " + {}-token context", tokens),
            None => write!(f, ", no context deduction"),
        }
    }
}

// --------------------------------------------------------
// Lookup Prompt View
// --------------------------------------------------------

impl CreateView for LookupPromptViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LookupPromptView { data: self, mode })
    }
}

struct LookupPromptView<'a> {
    data: &'a LookupPromptViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for LookupPromptView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for name in &self.data.available {
                writeln!(f, "{}", name)?;
            }
            return Ok(());
        }

        match (&self.data.target, &self.data.table) {
            (LookupTarget::Level, Some(table)) => writeln!(
                f,
                "Please select a quantization level. '{}' is not in the {} table.",
                self.data.requested, table
            )?,
            _ => writeln!(
                f,
                "Please select a quantization table. '{}' is not defined.",
                self.data.requested
            )?,
        }

        writeln!(f, "Available: {}", self.data.available.join(", "))
    }
}
