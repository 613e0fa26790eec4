//! Process environment helpers.

/// Check if running in a CI environment.
///
/// Detection is based on the environment variables set by the common CI
/// providers. Used to pick the non-interactive UI automatically.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
