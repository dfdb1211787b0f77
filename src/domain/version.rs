use crate::domain::pattern::IncrementDecision;
use crate::error::{Result, VersionError};
use regex::Regex;
use semver::Version;
use std::fmt;

/// A single version component increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Parse a base version (e.g., "v1.2.3" -> 1.2.3)
///
/// One leading 'v' or 'V' is tolerated, and a partial core is padded with
/// zeros ("1.2" -> 1.2.0, "v2" -> 2.0.0).
pub fn parse_base(input: &str) -> Result<Version> {
    let clean = input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input);

    Version::parse(&pad_core(clean)).map_err(|source| VersionError::VersionParse {
        input: input.to_string(),
        source,
    })
}

/// Fill in missing minor/patch components of a numeric core
fn pad_core(version: &str) -> String {
    let split = version.find(|c: char| c == '-' || c == '+').unwrap_or(version.len());
    let (core, rest) = version.split_at(split);

    let parts = core.split('.').count();
    let numeric = core
        .split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if !numeric || parts >= 3 {
        return version.to_string();
    }

    format!("{}{}{}", core, ".0".repeat(3 - parts), rest)
}

/// Apply one standard increment.
///
/// Every increment clears pre-release and build metadata:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1, unless the version is a pre-release, which is
///   released as-is (1.2.3-rc -> 1.2.3)
///
/// Fails with [VersionError::Overflow] when the component is already `u64::MAX`.
pub fn bump_version(version: &Version, bump: VersionBump) -> Result<Version> {
    let overflow = || VersionError::Overflow {
        input: version.to_string(),
    };

    let mut next = Version::new(version.major, version.minor, version.patch);
    match bump {
        VersionBump::Major => {
            next.major = next.major.checked_add(1).ok_or_else(overflow)?;
            next.minor = 0;
            next.patch = 0;
        }
        VersionBump::Minor => {
            next.minor = next.minor.checked_add(1).ok_or_else(overflow)?;
            next.patch = 0;
        }
        VersionBump::Patch => {
            if version.pre.is_empty() {
                next.patch = next.patch.checked_add(1).ok_or_else(overflow)?;
            }
        }
    }
    Ok(next)
}

/// Apply every selected increment in major → minor → patch order.
///
/// Increments stack: `3.0.0` with all three selected becomes `4.1.1`.
pub fn apply_decision(version: &Version, decision: IncrementDecision) -> Result<Version> {
    let steps = [
        (decision.major, VersionBump::Major),
        (decision.minor, VersionBump::Minor),
        (decision.patch, VersionBump::Patch),
    ];

    steps
        .iter()
        .filter(|(selected, _)| *selected)
        .try_fold(version.clone(), |current, (_, bump)| {
            bump_version(&current, *bump)
        })
}

/// Dot-separated, non-empty identifiers of `[0-9A-Za-z-]`
fn is_identifier_list(value: &str) -> bool {
    if let Ok(re) = Regex::new(r"^[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*$") {
        return re.is_match(value);
    }
    false
}

/// The incremented version plus the pre-release and metadata to print with it.
///
/// Pre-release and metadata are kept as checked text rather than
/// `semver::Prerelease`, so numeric identifiers with leading zeros
/// (`rc.01`) come out exactly as they went in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    core: Version,
    pre: String,
    build: String,
}

impl NextVersion {
    /// Start from the `MAJOR.MINOR.PATCH` of `version`
    pub fn new(version: &Version) -> Self {
        NextVersion {
            core: Version::new(version.major, version.minor, version.patch),
            pre: String::new(),
            build: String::new(),
        }
    }

    /// Replace the pre-release; an empty value removes it
    pub fn with_prerelease(mut self, prerelease: &str) -> Result<Self> {
        if !prerelease.is_empty() && !is_identifier_list(prerelease) {
            return Err(VersionError::PreRelease {
                value: prerelease.to_string(),
            });
        }
        self.pre = prerelease.to_string();
        Ok(self)
    }

    /// Replace the build metadata; an empty value removes it
    pub fn with_metadata(mut self, metadata: &str) -> Result<Self> {
        if !metadata.is_empty() && !is_identifier_list(metadata) {
            return Err(VersionError::Metadata {
                value: metadata.to_string(),
            });
        }
        self.build = metadata.to_string();
        Ok(self)
    }
}

impl fmt::Display for NextVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.core)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
