//! Python interpreter discovery and probing.
//!
//! The checks in this crate run against the project's Python environment,
//! not against vimax-doctor's own process. This module finds the right
//! interpreter and provides the probe surface the checks use:
//!
//! - [`locate`] - Interpreter discovery (virtualenv, PATH)
//! - [`runtime`] - [`PythonRuntime`] probe trait and its subprocess impl
//! - [`version`] - Version triple parsing and the `>=3.12` requirement

pub mod locate;
pub mod runtime;
pub mod version;

pub use locate::locate_python;
pub use runtime::{PythonRuntime, SystemPython};
pub use version::VersionTriple;
