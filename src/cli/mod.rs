//! Command-line surface
//!
//! Every setting can come from a flag or from the environment variable named
//! after it (`version_base`, `version_pattern`, ...). Flags win.

pub mod orchestration;

use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_bool, Backend, Overrides};

#[derive(Debug, Clone, clap::Parser)]
#[command(
    name = "tag-version",
    version,
    about = "Compute the next semantic version from git tags"
)]
pub struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, env = "version_base", help = "Base version, used with --ignore-previous")]
    pub base: Option<String>,

    #[arg(
        long,
        env = "version_ignorePrevious",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Use --base instead of the latest tag"
    )]
    pub ignore_previous: Option<String>,

    #[arg(long, env = "version_pattern", help = "Increment pattern, e.g. '*.^.*'")]
    pub pattern: Option<String>,

    #[arg(
        long,
        env = "version_prerelease",
        help = "Pre-release label; derived from the tag's age when unset"
    )]
    pub prerelease: Option<String>,

    #[arg(long, env = "version_metadata", help = "Build metadata appended after '+'")]
    pub metadata: Option<String>,

    #[arg(long, env = "version_prefix", help = "Text prepended to the version, e.g. 'v'")]
    pub prefix: Option<String>,

    #[arg(
        long,
        env = "version_tagPattern",
        help = "Tag naming pattern with a {version} placeholder"
    )]
    pub tag_pattern: Option<String>,

    #[arg(long, env = "version_repo", help = "Path inside the repository to read")]
    pub repo: Option<PathBuf>,

    #[arg(long, env = "version_backend", value_enum, help = "How to read the repository")]
    pub backend: Option<Backend>,

    #[arg(short, long, help = "Log resolution steps to stderr")]
    pub verbose: bool,
}

impl Args {
    /// Parse from the process arguments and environment
    pub fn from_env() -> Self {
        Args::parse()
    }

    /// Settings given on the command line or in the environment
    pub fn overrides(&self) -> Overrides {
        let ignore_previous = self
            .ignore_previous
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                parse_bool(raw).unwrap_or_else(|| {
                    tracing::warn!(value = raw, "unrecognised boolean for ignore previous, using false");
                    false
                })
            });

        Overrides {
            base: self.base.clone(),
            ignore_previous,
            pattern: self.pattern.clone(),
            prerelease: self.prerelease.clone(),
            metadata: self.metadata.clone(),
            prefix: self.prefix.clone(),
            tag_pattern: self.tag_pattern.clone(),
            backend: self.backend,
            repo: self.repo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::try_parse_from([
            "tag-version",
            "--base",
            "3.0.0",
            "--ignore-previous",
            "--pattern",
            "^.*.*",
            "--backend",
            "cli",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.base.as_deref(), Some("3.0.0"));
        assert_eq!(overrides.ignore_previous, Some(true));
        assert_eq!(overrides.pattern.as_deref(), Some("^.*.*"));
        assert_eq!(overrides.backend, Some(Backend::Cli));
    }

    #[test]
    fn test_ignore_previous_takes_a_value() {
        let args = Args::try_parse_from(["tag-version", "--ignore-previous=0"]).unwrap();
        assert_eq!(args.overrides().ignore_previous, Some(false));

        let args = Args::try_parse_from(["tag-version", "--ignore-previous=maybe"]).unwrap();
        assert_eq!(args.overrides().ignore_previous, Some(false));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Args::try_parse_from(["tag-version", "--backend", "svn"]).is_err());
    }
}
