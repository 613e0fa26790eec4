//! Integration tests for the vimax-doctor CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A config file with its API key filled in.
const CONFIGURED: &str = "llm:\n  api_key: sk-abc123\n  model: gpt-4o\n";

/// Create a project directory with both pipeline config files.
fn setup_project(idea: &str, script: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let configs = temp.path().join("configs");
    fs::create_dir_all(&configs).unwrap();
    fs::write(configs.join("idea2video.yaml"), idea).unwrap();
    fs::write(configs.join("script2video.yaml"), script).unwrap();
    temp
}

/// Install a stub interpreter script and return its path.
#[cfg(unix)]
fn install_stub_python(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("python");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stub that reports a passing version and imports everything.
#[cfg(unix)]
const HEALTHY_PYTHON: &str = "#!/bin/sh\necho '3.12.1'\nexit 0\n";

/// Stub that answers the version probe but fails every import.
#[cfg(unix)]
const NO_PACKAGES_PYTHON: &str = r#"#!/bin/sh
case "$2" in
  *version_info*) echo '3.12.0'; exit 0 ;;
  *) echo "ModuleNotFoundError" >&2; exit 1 ;;
esac
"#;

fn doctor() -> Command {
    Command::new(cargo_bin("vimax-doctor"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pre-flight environment checks"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_packages_lists_requirement_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.arg("packages");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("opencv-python (import cv2)"))
        .stdout(predicate::str::contains("共 13 个依赖包"));
    Ok(())
}

#[test]
fn cli_packages_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.args(["packages", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let table: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(table.as_array().unwrap().len(), 13);
    assert_eq!(table[0]["name"], "langchain");
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vimax-doctor"));
    Ok(())
}

#[test]
fn cli_invalid_project_root_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.args(["check", "--project", "/no/such/dir"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Project root is not a directory"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn healthy_project_passes_with_exit_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);
    let python = install_stub_python(temp.path(), HEALTHY_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ViMax 项目环境检查"))
        .stdout(predicate::str::contains("✓ Python 版本: 3.12.1"))
        .stdout(predicate::str::contains("已安装: 13/13"))
        .stdout(predicate::str::contains("所有检查通过！项目可以启动。"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn old_interpreter_fails_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);
    let python = install_stub_python(temp.path(), "#!/bin/sh\necho '3.11.9'\nexit 0\n");

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ Python 版本不满足要求，需要 >=3.12"))
        .stdout(predicate::str::contains("- Python 版本不满足要求"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_packages_print_remediation_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);
    let python = install_stub_python(temp.path(), NO_PACKAGES_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ langchain - 未安装"))
        .stdout(predicate::str::contains("缺少 13 个依赖包"))
        .stdout(predicate::str::contains(
            "需要运行: uv sync 或 pip install -r requirements.txt",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn unconfigured_api_key_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("llm:\n  api_key:\n\n", CONFIGURED);
    let python = install_stub_python(temp.path(), HEALTHY_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    // The --python flag is equivalent to the VIMAX_PYTHON variable.
    cmd.args(["check", "--python"]).arg(&python);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("配置文件问题:"))
        .stdout(predicate::str::contains(
            "• configs/idea2video.yaml 中的 API key 可能未配置",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_config_files_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let python = install_stub_python(temp.path(), HEALTHY_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("✗ configs/idea2video.yaml 不存在"))
        .stdout(predicate::str::contains("✗ configs/script2video.yaml 不存在"));
    Ok(())
}

#[test]
fn no_interpreter_anywhere_still_produces_full_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env_remove("VIMAX_PYTHON");
    cmd.env_remove("VIRTUAL_ENV");
    cmd.env_remove("PATH");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ 未找到 Python 解释器"))
        .stdout(predicate::str::contains("已安装: 0/13"))
        .stdout(predicate::str::contains("检查总结:"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn json_report_replaces_human_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);
    let python = install_stub_python(temp.path(), HEALTHY_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.args(["check", "--json"]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(!stdout.contains("ViMax 项目环境检查"));
    let report: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(report["version"]["ok"], true);
    assert_eq!(report["packages"]["missing"].as_array().unwrap().len(), 0);
    assert_eq!(report["config_issues"].as_array().unwrap().len(), 0);
    Ok(())
}

#[cfg(unix)]
#[test]
fn quiet_mode_hides_per_item_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIGURED, CONFIGURED);
    let python = install_stub_python(temp.path(), HEALTHY_PYTHON);

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.env("VIMAX_PYTHON", &python);
    cmd.args(["check", "--quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  ✓ langchain").not())
        .stdout(predicate::str::contains("所有检查通过！项目可以启动。"));
    Ok(())
}
