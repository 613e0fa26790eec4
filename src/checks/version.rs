//! Interpreter version check.

use serde::Serialize;

use crate::interpreter::version::{REQUIRED_MAJOR, REQUIRED_MINOR};
use crate::interpreter::{PythonRuntime, VersionTriple};
use crate::ui::{StatusKind, UserInterface};

/// Outcome of the interpreter version check.
///
/// Created once per run, never mutated. `version` is `None` when no
/// interpreter could be found or its version output was unparseable; `ok`
/// is false in that case.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionCheckResult {
    pub ok: bool,
    pub version: Option<VersionTriple>,
}

/// Check the project interpreter's version against the `>=3.12` requirement.
///
/// Always returns a result. A missing interpreter or a failed version probe
/// is reported as a failed check, never as an error.
pub fn check_version(
    py: Option<&dyn PythonRuntime>,
    ui: &mut dyn UserInterface,
) -> VersionCheckResult {
    let version = py.and_then(|rt| rt.version_triple());

    match (py, version) {
        (Some(_), Some(triple)) => {
            ui.message(&StatusKind::Success.line(&format!("Python 版本: {triple}")));
            let ok = triple.meets_requirement();
            if ok {
                ui.detail(&StatusKind::Success.item(&format!(
                    "Python 版本满足要求 (>={REQUIRED_MAJOR}.{REQUIRED_MINOR})"
                )));
            } else {
                ui.detail(&StatusKind::Failed.item(&format!(
                    "Python 版本不满足要求，需要 >={REQUIRED_MAJOR}.{REQUIRED_MINOR}"
                )));
            }
            VersionCheckResult {
                ok,
                version: Some(triple),
            }
        }
        (Some(rt), None) => {
            ui.message(
                &StatusKind::Failed.line(&format!("无法获取 Python 版本: {}", rt.display_path())),
            );
            ui.detail(&StatusKind::Failed.item(&format!(
                "Python 版本不满足要求，需要 >={REQUIRED_MAJOR}.{REQUIRED_MINOR}"
            )));
            VersionCheckResult {
                ok: false,
                version: None,
            }
        }
        (None, _) => {
            ui.message(&StatusKind::Failed.line("未找到 Python 解释器"));
            ui.detail(&StatusKind::Failed.item(&format!(
                "Python 版本不满足要求，需要 >={REQUIRED_MAJOR}.{REQUIRED_MINOR}"
            )));
            VersionCheckResult {
                ok: false,
                version: None,
            }
        }
    }
}
