//! Probe surface over a Python interpreter.
//!
//! [`PythonRuntime`] is the seam between the checks and the actual
//! interpreter: the production implementation spawns the interpreter as a
//! subprocess, and tests substitute a stub so check logic stays
//! deterministic.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::interpreter::version::{parse_version_output, VersionTriple};

/// One-line snippet printing the interpreter's version triple.
const VERSION_SNIPPET: &str = "import sys; print('%d.%d.%d' % sys.version_info[:3])";

/// Probe interface over a Python interpreter.
pub trait PythonRuntime {
    /// Interpreter location for display and logs.
    fn display_path(&self) -> String;

    /// Query the interpreter's version triple.
    ///
    /// `None` means the interpreter could not be spawned or did not produce
    /// parseable version output.
    fn version_triple(&self) -> Option<VersionTriple>;

    /// Attempt to import a module by its canonical import path.
    ///
    /// `Err` carries a short description of the failure (module not found,
    /// spawn error). Import probes never panic and never propagate further.
    fn try_import(&self, import_path: &str) -> Result<(), String>;
}

/// A Python interpreter invoked as a subprocess.
#[derive(Debug, Clone)]
pub struct SystemPython {
    path: PathBuf,
}

impl SystemPython {
    /// Create a runtime for the interpreter at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The interpreter binary path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PythonRuntime for SystemPython {
    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn version_triple(&self) -> Option<VersionTriple> {
        let output = Command::new(&self.path)
            .args(["-c", VERSION_SNIPPET])
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let stdout = String::from_utf8_lossy(&out.stdout);
                let triple = parse_version_output(&stdout);
                if triple.is_none() {
                    tracing::debug!(
                        interpreter = %self.path.display(),
                        output = %stdout.trim(),
                        "version probe produced unparseable output"
                    );
                }
                triple
            }
            Ok(out) => {
                tracing::debug!(
                    interpreter = %self.path.display(),
                    code = ?out.status.code(),
                    "version probe exited non-zero"
                );
                None
            }
            Err(e) => {
                tracing::debug!(
                    interpreter = %self.path.display(),
                    error = %e,
                    "failed to spawn interpreter for version probe"
                );
                None
            }
        }
    }

    fn try_import(&self, import_path: &str) -> Result<(), String> {
        let output = Command::new(&self.path)
            .args(["-c", &format!("import {import_path}")])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                // The last stderr line is the exception summary
                // (e.g. "ModuleNotFoundError: No module named 'faiss'").
                let stderr = String::from_utf8_lossy(&out.stderr);
                let reason = stderr
                    .lines()
                    .rev()
                    .find(|l| !l.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("import exited with {}", out.status));
                tracing::debug!(module = import_path, %reason, "import probe failed");
                Err(reason)
            }
            Err(e) => {
                tracing::debug!(module = import_path, error = %e, "import probe did not spawn");
                Err(e.to_string())
            }
        }
    }
}
