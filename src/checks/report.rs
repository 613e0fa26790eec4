//! Aggregated check report.

use serde::Serialize;

use crate::checks::packages::PackageReport;
use crate::checks::version::VersionCheckResult;
use crate::error::{DoctorError, Result};

/// Everything one run of the checks produced.
///
/// The report decides the process exit code and is what `--json` renders.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
    /// Discovered interpreter path, if any.
    pub interpreter: Option<String>,
    pub version: VersionCheckResult,
    pub packages: PackageReport,
    pub config_issues: Vec<String>,
}

impl CheckReport {
    /// Assemble a report from the three check results.
    pub fn new(
        interpreter: Option<String>,
        version: VersionCheckResult,
        packages: PackageReport,
        config_issues: Vec<String>,
    ) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            interpreter,
            version,
            packages,
            config_issues,
        }
    }

    /// All three categories passed.
    pub fn passed(&self) -> bool {
        self.version.ok && self.packages.all_installed() && self.config_issues.is_empty()
    }

    /// Process exit code: 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DoctorError::ReportSerialization {
            message: e.to_string(),
        })
    }
}
