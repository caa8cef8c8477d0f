use std::fmt;

use super::estimate::OverheadSummary;
use crate::presentation::formatters::{format_billions, format_gb};
use crate::presentation::view_models::{CreateView, SweepViewModel, ViewMode};

const MEMORY_COLUMN_WIDTH: usize = 8;
const MIN_LEVEL_COLUMN_WIDTH: usize = 8;

impl CreateView for SweepViewModel {
    // Scripts use `table --csv`, so there is a single text layout
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SweepView { data: self })
    }
}

struct SweepView<'a> {
    data: &'a SweepViewModel,
}

impl<'a> SweepView<'a> {
    fn column_widths(&self) -> Vec<usize> {
        self.data
            .levels
            .iter()
            .map(|name| name.chars().count().max(MIN_LEVEL_COLUMN_WIDTH))
            .collect()
    }

    fn render_grid(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths = self.column_widths();

        write!(f, "{:>width$}", "MEMORY", width = MEMORY_COLUMN_WIDTH)?;
        for (name, width) in self.data.levels.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for row in &self.data.rows {
            let memory = format!("{} GB", format_gb(row.memory_gb));
            write!(f, "{:>width$}", memory, width = MEMORY_COLUMN_WIDTH)?;
            for (cell, width) in row.cells.iter().zip(&widths) {
                let value = if cell.feasible {
                    format_billions(cell.max_params_billions)
                } else {
                    "n/a".to_string()
                };
                write!(f, "  {:>width$}", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SweepView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Max parameters (billions), {} table, {}",
            self.data.table,
            OverheadSummary(&self.data.overhead)
        )?;
        writeln!(f)?;
        self.render_grid(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{OverheadViewModel, SweepCellViewModel, SweepRowViewModel};

    fn cell(level: &str, value: f64) -> SweepCellViewModel {
        SweepCellViewModel {
            level: level.to_string(),
            max_params_billions: value,
            feasible: value > 0.0,
        }
    }

    fn grid() -> SweepViewModel {
        SweepViewModel {
            table: "k-quant".to_string(),
            levels: vec!["q4".to_string(), "q4_K_M".to_string(), "q3_K_L_wide".to_string()],
            overhead: OverheadViewModel {
                model: "absolute".to_string(),
                os_overhead_gb: Some(2.0),
                context_window_tokens: None,
                overhead_ratio: None,
            },
            rows: vec![
                SweepRowViewModel {
                    memory_gb: 1.0,
                    cells: vec![cell("q4", -2.0), cell("q4_K_M", -1.68), cell("q3_K_L_wide", -2.13)],
                },
                SweepRowViewModel {
                    memory_gb: 16.0,
                    cells: vec![cell("q4", 28.0), cell("q4_K_M", 23.578947), cell("q3_K_L_wide", 29.866)],
                },
            ],
        }
    }

    #[test]
    fn test_standard_grid() {
        insta::assert_snapshot!(grid().create_view(ViewMode::Standard).to_string(), @r"
        Max parameters (billions), k-quant table, absolute model, 2 GB OS, no context deduction

          MEMORY        q4    q4_K_M  q3_K_L_wide
            1 GB       n/a       n/a          n/a
           16 GB     28.00     23.58        29.87
        ");
    }
}
