//! Presence and API-key sanity check for the pipeline config files.
//!
//! The API-key heuristic is line-adjacency based on purpose: a line
//! containing `api_key:` is suspect when the line directly below it is
//! empty or commented out. The files are never parsed as YAML; switching to
//! a real parser would change which files get flagged (inline values,
//! same-line comments), and downstream tooling relies on the current
//! behavior. Known limitation, kept.

use std::path::Path;

use crate::ui::{StatusKind, UserInterface};

/// Pipeline config files, relative to the project root, scanned in order.
pub const CONFIG_FILES: &[&str] = &["configs/idea2video.yaml", "configs/script2video.yaml"];

/// The substring that marks a key-bearing line.
const API_KEY_MARKER: &str = "api_key:";

/// Check both pipeline config files.
///
/// Returns the ordered list of issue strings across both files. A file that
/// exists but cannot be read as UTF-8 produces a warning line and no issue.
pub fn check_config_files(project_root: &Path, ui: &mut dyn UserInterface) -> Vec<String> {
    let mut issues = Vec::new();

    for rel in CONFIG_FILES {
        let path = project_root.join(rel);
        if !path.exists() {
            ui.detail(&StatusKind::Failed.item(&format!("{rel} 不存在")));
            issues.push(format!("{rel} 不存在"));
            continue;
        }

        ui.detail(&StatusKind::Success.item(&format!("{rel} 存在")));
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(file = %rel, bytes = content.len(), "scanning config");
                issues.extend(scan_api_key_lines(rel, &content));
            }
            Err(e) => {
                ui.detail(&StatusKind::Warning.item(&format!("{rel} 读取失败: {e}")));
            }
        }
    }

    issues
}

/// Scan config content for `api_key:` lines followed by an empty or
/// commented line. Every match is checked independently, so one file can
/// accumulate several issues.
pub(crate) fn scan_api_key_lines(path_label: &str, content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut issues = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.contains(API_KEY_MARKER) {
            continue;
        }
        // A key on the final line has no next line to inspect.
        let Some(next) = lines.get(i + 1) else {
            continue;
        };
        let next = next.trim();
        if next.is_empty() || next.starts_with('#') {
            issues.push(format!("{path_label} 中的 API key 可能未配置"));
        }
    }

    issues
}
