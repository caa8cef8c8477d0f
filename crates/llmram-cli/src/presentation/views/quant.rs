use std::fmt;

use crate::presentation::formatters::format_billions;
use crate::presentation::view_models::{
    CreateView, QuantListViewModel, QuantShowViewModel, QuantTableViewModel, ViewMode,
};

impl CreateView for QuantListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(QuantListView { data: self, mode })
    }
}

struct QuantListView<'a> {
    data: &'a QuantListViewModel,
    mode: ViewMode,
}

impl<'a> QuantListView<'a> {
    fn render_table(&self, f: &mut fmt::Formatter, table: &QuantTableViewModel) -> fmt::Result {
        let origin = if table.builtin { "built-in" } else { "config" };
        writeln!(f, "{} ({}, default {})", table.name, origin, table.default_level)?;

        let name_width = table
            .levels
            .iter()
            .map(|l| l.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("LEVEL".len());

        writeln!(
            f,
            "    {:<name_width$}  {:>6}  {:>11}",
            "LEVEL", "BITS", "BYTES/PARAM"
        )?;
        for level in &table.levels {
            let marker = if level.is_default { "* " } else { "  " };
            writeln!(
                f,
                "  {}{:<name_width$}  {:>6}  {:>11}",
                marker, level.name, level.bits, level.bytes_per_param
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for QuantListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for table in &self.data.tables {
                for level in &table.levels {
                    writeln!(f, "{}", level.name)?;
                }
            }
            return Ok(());
        }

        for (i, table) in self.data.tables.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_table(f, table)?;
        }
        Ok(())
    }
}

impl CreateView for QuantShowViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(QuantShowView { data: self, mode })
    }
}

struct QuantShowView<'a> {
    data: &'a QuantShowViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for QuantShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level = &self.data.level;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", level.bits);
        }

        writeln!(f, "  {:<21} {}", "Bits per parameter:", level.bits)?;
        writeln!(f, "  {:<21} {}", "Bytes per parameter:", level.bytes_per_param)?;
        writeln!(
            f,
            "  {:<21} {} billion",
            "Parameters per GB:",
            format_billions(self.data.params_per_gb_billions)
        )?;
        writeln!(
            f,
            "  {:<21} {}",
            "Table default:",
            if level.is_default { "yes" } else { "no" }
        )
    }
}
