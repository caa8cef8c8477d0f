use std::fmt;

use super::estimate::OverheadSummary;
use crate::presentation::formatters::format_gb;
use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigShowViewModel, CreateView, GuidanceViewModel, ViewMode,
};

// --------------------------------------------------------
// Config Show View
// --------------------------------------------------------

impl CreateView for ConfigShowViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigShowView { data: self, mode })
    }
}

struct ConfigShowView<'a> {
    data: &'a ConfigShowViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ConfigShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.path);
        }

        let file_note = if d.exists { "" } else { " (not created)" };
        writeln!(f, "  {:<14} {}{}", "Config file:", d.path, file_note)?;
        writeln!(f, "  {:<14} {} GB", "Memory:", format_gb(d.memory_gb))?;
        writeln!(f, "  {:<14} {}", "Table:", d.table)?;

        match (&d.quant, &d.effective_quant) {
            (Some(quant), _) => writeln!(f, "  {:<14} {}", "Quantization:", quant)?,
            (None, Some(default)) => {
                writeln!(f, "  {:<14} {} (table default)", "Quantization:", default)?
            }
            (None, None) => writeln!(f, "  {:<14} (unknown table)", "Quantization:")?,
        }

        writeln!(f, "  {:<14} {}", "Overhead:", OverheadSummary(&d.overhead))?;

        if !d.custom_tables.is_empty() {
            writeln!(f, "  {:<14} {}", "Own tables:", d.custom_tables.join(", "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Config Init View
// --------------------------------------------------------

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}

// --------------------------------------------------------
// Guidance View
// --------------------------------------------------------

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "llmram - how large a model fits in your memory")?;
        writeln!(f)?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  llmram estimate                      # 16 GB, 4-bit, default overhead")?;
        writeln!(f, "  llmram estimate -m 24 -q q4_K_M -t k-quant")?;
        writeln!(f, "  llmram table                         # capacity grid for common memory sizes")?;
        writeln!(f, "  llmram quant list --all              # every quantization level")?;
        writeln!(f)?;

        if self.data.config_exists {
            writeln!(f, "Using settings from {}", self.data.config_path)?;
        } else {
            writeln!(f, "Save your defaults:")?;
            writeln!(f, "  llmram config init                   # writes {}", self.data.config_path)?;
        }
        writeln!(f)?;

        writeln!(f, "For more commands:")?;
        writeln!(f, "  llmram --help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::OverheadViewModel;

    fn settings(quant: Option<&str>, custom_tables: Vec<String>) -> ConfigShowViewModel {
        ConfigShowViewModel {
            path: "/tmp/llmram/config.toml".to_string(),
            exists: true,
            memory_gb: 24.0,
            table: "standard".to_string(),
            quant: quant.map(str::to_string),
            effective_quant: Some("4-bit".to_string()),
            overhead: OverheadViewModel {
                model: "ratio".to_string(),
                os_overhead_gb: None,
                context_window_tokens: None,
                overhead_ratio: Some(0.25),
            },
            custom_tables,
        }
    }

    #[test]
    fn test_show_table_default() {
        let text = settings(None, vec!["gguf".to_string()])
            .create_view(ViewMode::Standard)
            .to_string();
        assert_eq!(
            text,
            "  Config file:   /tmp/llmram/config.toml\n\
             \x20 Memory:        24 GB\n\
             \x20 Table:         standard\n\
             \x20 Quantization:  4-bit (table default)\n\
             \x20 Overhead:      ratio model, 25% of memory\n\
             \x20 Own tables:    gguf\n"
        );
    }

    #[test]
    fn test_show_explicit_quant_without_custom_tables() {
        let text = settings(Some("8-bit"), Vec::new())
            .create_view(ViewMode::Standard)
            .to_string();
        assert!(text.contains("Quantization:  8-bit\n"));
        assert!(!text.contains("Own tables"));
    }

    #[test]
    fn test_guidance_points_to_init_without_config() {
        let vm = GuidanceViewModel {
            config_path: "/tmp/llmram/config.toml".to_string(),
            config_exists: false,
        };
        let text = vm.create_view(ViewMode::Standard).to_string();
        assert!(text.contains("llmram config init"));
        assert!(text.contains("llmram --help"));
    }
}
