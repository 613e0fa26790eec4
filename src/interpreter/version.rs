//! Interpreter version triples and the pipeline's version requirement.

use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The major Python version the pipeline requires.
pub const REQUIRED_MAJOR: u32 = 3;

/// The minimum minor Python version the pipeline requires.
pub const REQUIRED_MINOR: u32 = 12;

/// A `major.minor.micro` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl VersionTriple {
    /// Create a version triple.
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Whether this version satisfies the pipeline requirement.
    ///
    /// The requirement is exact on the major version: only 3.x qualifies,
    /// with minor >= 12. A hypothetical 4.0 does not pass.
    pub fn meets_requirement(&self) -> bool {
        self.major == REQUIRED_MAJOR && self.minor >= REQUIRED_MINOR
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Extract a version triple from interpreter output.
///
/// Matches the first `X.Y.Z` group anywhere in the text, so both the bare
/// `3.12.1` printed by the version probe snippet and a `Python 3.12.1`
/// banner parse the same way.
pub fn parse_version_output(output: &str) -> Option<VersionTriple> {
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid");
    let caps = re.captures(output)?;
    let part = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    Some(VersionTriple::new(part(1)?, part(2)?, part(3)?))
}
