//! Check command implementation.
//!
//! `vimax-doctor check` (also the default command) runs the three
//! environment checks in fixed order and prints the full report: banner,
//! one numbered section per check, then a summary listing every failing
//! category. All three checks always run to completion so the user sees
//! the whole picture in one pass.

use std::path::{Path, PathBuf};

use crate::checks::{
    check_config_files, check_packages, check_version, CheckReport,
};
use crate::cli::args::CheckArgs;
use crate::error::{DoctorError, Result};
use crate::interpreter::{locate_python, PythonRuntime, SystemPython};
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    python: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, python: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            python,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run all three checks in order, printing each section as it runs.
    fn run_checks(&self, ui: &mut dyn UserInterface) -> CheckReport {
        let interpreter = self
            .python
            .clone()
            .or_else(locate_python)
            .map(SystemPython::new);
        let py: Option<&dyn PythonRuntime> =
            interpreter.as_ref().map(|p| p as &dyn PythonRuntime);

        ui.show_header("ViMax 项目环境检查");
        ui.message("");

        ui.message("1. Python 版本检查:");
        if ui.output_mode().is_verbose() {
            if let Some(py) = &interpreter {
                ui.message(&format!("  解释器: {}", py.path().display()));
            }
        }
        let version = check_version(py, ui);
        ui.message("");

        ui.message("2. 依赖包检查:");
        let packages = check_packages(py, ui);
        ui.message("");
        ui.message(&format!(
            "   已安装: {}/{}",
            packages.installed.len(),
            packages.total()
        ));
        ui.message(&format!("   缺失: {}", packages.missing.len()));
        ui.message("");

        ui.message("3. 配置文件检查:");
        let config_issues = check_config_files(&self.project_root, ui);
        ui.message("");

        CheckReport::new(
            interpreter.map(|p| p.display_path()),
            version,
            packages,
            config_issues,
        )
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(DoctorError::ProjectRootInvalid {
                path: self.project_root.clone(),
            });
        }

        if self.args.json {
            // The human report is suppressed; the JSON document is the output.
            let mut silent = NonInteractiveUI::new(OutputMode::Silent);
            let report = self.run_checks(&mut silent);
            println!("{}", report.to_json()?);
            return Ok(if report.passed() {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        let report = self.run_checks(ui);

        ui.show_header("检查总结:");
        if report.passed() {
            ui.success("所有检查通过！项目可以启动。");
            Ok(CommandResult::success())
        } else {
            ui.warning("发现问题:");
            if !report.version.ok {
                ui.message("  - Python 版本不满足要求");
            }
            if !report.packages.all_installed() {
                ui.message(&format!("  - 缺少 {} 个依赖包", report.packages.missing.len()));
                ui.message("    需要运行: uv sync 或 pip install -r requirements.txt");
            }
            if !report.config_issues.is_empty() {
                ui.message("  - 配置文件问题:");
                for issue in &report.config_issues {
                    ui.message(&format!("    • {issue}"));
                }
            }
            Ok(CommandResult::failure(1))
        }
    }
}
