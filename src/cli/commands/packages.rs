//! Packages command implementation.
//!
//! `vimax-doctor packages` lists the requirement table the check probes,
//! without touching the interpreter. Useful for keeping the project's
//! dependency files in sync with what the doctor expects.

use crate::checks::REQUIRED_PACKAGES;
use crate::cli::args::PackagesArgs;
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The packages command implementation.
pub struct PackagesCommand {
    args: PackagesArgs,
}

impl PackagesCommand {
    /// Create a new packages command.
    pub fn new(args: PackagesArgs) -> Self {
        Self { args }
    }
}

impl Command for PackagesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(REQUIRED_PACKAGES).map_err(|e| {
                DoctorError::ReportSerialization {
                    message: e.to_string(),
                }
            })?;
            println!("{json}");
            return Ok(CommandResult::success());
        }

        ui.message("ViMax 依赖包清单:");
        for spec in REQUIRED_PACKAGES {
            if spec.name == spec.import_path {
                ui.detail(&format!("  {}", spec.name));
            } else {
                ui.detail(&format!("  {} (import {})", spec.name, spec.import_path));
            }
        }
        ui.message(&format!("共 {} 个依赖包", REQUIRED_PACKAGES.len()));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_package_once() {
        let cmd = PackagesCommand::new(PackagesArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        // Header line + one line per package + count line.
        assert_eq!(ui.messages().len(), REQUIRED_PACKAGES.len() + 2);
        assert!(ui.messages().iter().any(|m| m == "  langchain"));
    }

    #[test]
    fn renamed_packages_show_their_import_path() {
        let cmd = PackagesCommand::new(PackagesArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui
            .messages()
            .iter()
            .any(|m| m == "  opencv-python (import cv2)"));
        assert!(ui
            .messages()
            .iter()
            .any(|m| m == "  google-genai (import google.genai)"));
    }

    #[test]
    fn json_mode_prints_nothing_to_ui() {
        let cmd = PackagesCommand::new(PackagesArgs { json: true });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
    }
}
