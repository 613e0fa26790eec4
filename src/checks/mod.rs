//! The three environment checks and the aggregated report.
//!
//! Each check prints its own status lines as it runs and returns plain
//! data; nothing in here errors out for an anticipated failure. The check
//! command folds the three results into a [`CheckReport`] that decides the
//! process exit code.
//!
//! - [`version`] - Interpreter version check (`>=3.12`, major exactly 3)
//! - [`packages`] - Importability of the required Python packages
//! - [`configs`] - Presence and API-key sanity of the pipeline config files
//! - [`report`] - Aggregation and JSON rendering

pub mod configs;
pub mod packages;
pub mod report;
pub mod version;

pub use configs::{check_config_files, CONFIG_FILES};
pub use packages::{check_packages, PackageReport, PackageSpec, REQUIRED_PACKAGES};
pub use report::CheckReport;
pub use version::{check_version, VersionCheckResult};
