//! Python interpreter discovery.
//!
//! The pipeline's Python may live in a virtualenv that is not active in the
//! shell vimax-doctor was launched from, or behind a `python3` name that a
//! bare `python` lookup would miss. Discovery walks a fixed resolution
//! order and takes the first hit:
//!
//! 1. `$VIRTUAL_ENV/bin/python` when a virtualenv is active.
//! 2. `python3`, then `python`, resolved against `PATH`.
//!
//! The `--python` flag (and its `VIMAX_PYTHON` env fallback) bypasses
//! discovery entirely; that override is handled in the CLI layer.
//!
//! All environment access goes through an injected lookup function so tests
//! can run against a synthetic environment.

use std::env::VarError;
use std::path::{Path, PathBuf};

/// Interpreter names probed on PATH, in order.
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Locate the project's Python interpreter from the real environment.
///
/// Returns `None` when no candidate resolves; callers treat that as an
/// ordinary failed-check outcome, not an error.
pub fn locate_python() -> Option<PathBuf> {
    locate_python_with_env(|key| std::env::var(key))
}

/// Locate the interpreter using the given environment lookup.
pub fn locate_python_with_env(
    env: impl Fn(&str) -> Result<String, VarError>,
) -> Option<PathBuf> {
    if let Ok(venv) = env("VIRTUAL_ENV") {
        let candidate = venv_python(Path::new(&venv));
        if is_executable(&candidate) {
            tracing::debug!(path = %candidate.display(), "using active virtualenv interpreter");
            return Some(candidate);
        }
    }

    let path_var = env("PATH").ok()?;
    let dirs: Vec<PathBuf> = std::env::split_paths(&path_var).collect();
    for name in PATH_CANDIDATES {
        if let Some(resolved) = resolve_on_path(name, &dirs) {
            tracing::debug!(path = %resolved.display(), "found {} on PATH", name);
            return Some(resolved);
        }
    }

    tracing::debug!("no Python interpreter candidate resolved");
    None
}

/// The interpreter path inside a virtualenv root.
fn venv_python(venv_root: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        venv_root.join("Scripts").join("python.exe")
    }
    #[cfg(not(windows))]
    {
        venv_root.join("bin").join("python")
    }
}

/// Resolve a binary name against a list of PATH directories.
fn resolve_on_path(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(format!("{name}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
