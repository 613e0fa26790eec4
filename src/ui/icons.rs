//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons used by
//! every check and command, so the report reads the same everywhere.

/// Canonical status kinds used across all report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for this status.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Format an unindented status line: icon + message.
    pub fn line(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }

    /// Format a per-item line, indented under its section.
    pub fn item(self, msg: &str) -> String {
        format!("  {} {}", self.icon(), msg)
    }
}
