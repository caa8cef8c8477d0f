use serde::Serialize;

use super::estimate::LookupTarget;

/// How much text a command prints. JSON output ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// `--quiet`: one value per line, nothing else
    Minimal,
    #[default]
    Standard,
    /// `--verbose`: the memory breakdown behind the number
    Verbose,
}

impl ViewMode {
    /// Badges and tips are printed around the view.
    pub fn is_decorated(self) -> bool {
        self != ViewMode::Minimal
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

/// One-line headline above a command's output.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    /// Overhead leaves no memory for weights.
    pub fn infeasible() -> Self {
        Self::new(StatusLevel::Warning, "Configuration infeasible")
    }

    /// Some cells of a memory sweep are infeasible.
    pub fn infeasible_cells(count: usize) -> Self {
        Self::new(
            StatusLevel::Warning,
            format!("{} infeasible configuration(s) shown as n/a", count),
        )
    }

    /// A table or level name that nothing matched.
    pub fn unknown(target: LookupTarget, requested: &str) -> Self {
        let what = match target {
            LookupTarget::Table => "table",
            LookupTarget::Level => "level",
        };
        Self::new(
            StatusLevel::Error,
            format!("Unknown quantization {} '{}'", what, requested),
        )
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

/// A follow-up the user can try, optionally with the exact command.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_badge_names_the_target() {
        let badge = StatusBadge::unknown(LookupTarget::Level, "7-bit");
        assert_eq!(badge.level, StatusLevel::Error);
        assert_eq!(badge.label, "Unknown quantization level '7-bit'");

        let badge = StatusBadge::unknown(LookupTarget::Table, "gguf");
        assert_eq!(badge.label, "Unknown quantization table 'gguf'");
    }

    #[test]
    fn test_only_minimal_drops_decorations() {
        assert!(!ViewMode::Minimal.is_decorated());
        assert!(ViewMode::Standard.is_decorated());
        assert!(ViewMode::Verbose.is_decorated());
    }
}
