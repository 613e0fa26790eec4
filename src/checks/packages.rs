//! Importability check for the pipeline's required Python packages.
//!
//! The requirement table below is the single source of truth: the probe
//! loop, the printed counts, and the `packages` subcommand all derive from
//! it. Each entry maps a requirement name (as it appears in the project's
//! dependency files) to its canonical import path; for most packages the
//! two coincide, and the ones that differ are data here, not special cases
//! in code.

use serde::Serialize;

use crate::interpreter::PythonRuntime;
use crate::ui::{StatusKind, UserInterface};

/// A required package: requirement name plus canonical import path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PackageSpec {
    /// Requirement name, shown in report lines.
    pub name: &'static str,
    /// Import path probed in the interpreter. `google-genai` ships a
    /// namespace package, so its path is the `google.genai` submodule.
    pub import_path: &'static str,
}

/// The packages the pipeline needs, probed in this order.
pub const REQUIRED_PACKAGES: &[PackageSpec] = &[
    PackageSpec {
        name: "langchain",
        import_path: "langchain",
    },
    PackageSpec {
        name: "langchain-core",
        import_path: "langchain_core",
    },
    PackageSpec {
        name: "langchain-community",
        import_path: "langchain_community",
    },
    PackageSpec {
        name: "langchain-openai",
        import_path: "langchain_openai",
    },
    PackageSpec {
        name: "openai",
        import_path: "openai",
    },
    PackageSpec {
        name: "moviepy",
        import_path: "moviepy",
    },
    PackageSpec {
        name: "google-genai",
        import_path: "google.genai",
    },
    PackageSpec {
        name: "opencv-python",
        import_path: "cv2",
    },
    PackageSpec {
        name: "scenedetect",
        import_path: "scenedetect",
    },
    PackageSpec {
        name: "faiss-cpu",
        import_path: "faiss",
    },
    PackageSpec {
        name: "chardet",
        import_path: "chardet",
    },
    PackageSpec {
        name: "pyyaml",
        import_path: "yaml",
    },
    PackageSpec {
        name: "pillow",
        import_path: "PIL",
    },
];

/// Installed/missing partition of the requirement table.
///
/// Every requirement name lands in exactly one of the two sequences, in
/// table order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageReport {
    pub installed: Vec<String>,
    pub missing: Vec<String>,
}

impl PackageReport {
    /// Total number of requirements checked.
    pub fn total(&self) -> usize {
        self.installed.len() + self.missing.len()
    }

    /// Whether every requirement imported successfully.
    pub fn all_installed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Probe each required package once, in table order.
///
/// Every per-package failure, including a missing interpreter, is converted
/// into a `missing` entry; this function itself never fails.
pub fn check_packages(
    py: Option<&dyn PythonRuntime>,
    ui: &mut dyn UserInterface,
) -> PackageReport {
    let mut report = PackageReport::default();

    for spec in REQUIRED_PACKAGES {
        let outcome = match py {
            Some(rt) => rt.try_import(spec.import_path),
            None => Err("未找到 Python 解释器".to_string()),
        };

        match outcome {
            Ok(()) => {
                ui.detail(&StatusKind::Success.item(spec.name));
                report.installed.push(spec.name.to_string());
            }
            Err(reason) => {
                tracing::debug!(package = spec.name, %reason, "import probe failed");
                ui.detail(&StatusKind::Failed.item(&format!("{} - 未安装", spec.name)));
                report.missing.push(spec.name.to_string());
            }
        }
    }

    report
}
