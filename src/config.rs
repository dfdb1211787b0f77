use crate::error::{Result, VersionError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tag-version.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE_NAME: &str = ".tag-version.toml";

/// How repository metadata is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process libgit2
    #[default]
    Git2,
    /// The `git` executable on PATH
    Cli,
}

/// Settings as they may appear in a configuration file.
///
/// Every key is optional; anything left out falls back to the built-in
/// default. Unknown keys are rejected so typos don't pass silently.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base: Option<String>,
    pub ignore_previous: Option<bool>,
    pub pattern: Option<String>,
    pub prerelease: Option<String>,
    pub metadata: Option<String>,
    pub prefix: Option<String>,
    pub tag_pattern: Option<String>,
    pub backend: Option<Backend>,
    pub repo: Option<PathBuf>,
}

/// Settings supplied by the environment or command line.
///
/// Same shape as [FileConfig]; a value given here wins over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub base: Option<String>,
    pub ignore_previous: Option<bool>,
    pub pattern: Option<String>,
    pub prerelease: Option<String>,
    pub metadata: Option<String>,
    pub prefix: Option<String>,
    pub tag_pattern: Option<String>,
    pub backend: Option<Backend>,
    pub repo: Option<PathBuf>,
}

/// Everything the version engine needs, fixed for the whole run.
///
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionConfig {
    /// Explicit base version, only used with `ignore_previous`
    pub base: String,
    /// Use `base` instead of the latest repository tag
    pub ignore_previous: bool,
    /// Increment pattern, e.g. `*.^.*`
    pub pattern: String,
    /// Pre-release override; derived from the tag's age when empty
    pub prerelease: String,
    /// Build metadata appended after `+`
    pub metadata: String,
    /// Literal text glued in front of the rendered version
    pub prefix: String,
    /// Pattern used to pull the version out of tag names, e.g. `release-{version}`
    pub tag_pattern: Option<String>,
}

/// Where and how to read the repository
#[derive(Debug, Clone, PartialEq)]
pub struct RepoOptions {
    pub backend: Backend,
    pub path: PathBuf,
}

impl Default for RepoOptions {
    fn default() -> Self {
        RepoOptions {
            backend: Backend::default(),
            path: PathBuf::from("."),
        }
    }
}

/// Parse a boolean the way `strconv.ParseBool`-style tooling does.
///
/// Returns `None` for anything outside the accepted spellings.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tag-version.toml` in current directory
/// 3. `.tag-version.toml` in the user config directory
/// 4. Default (empty) configuration if no file found
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            VersionError::config(format!("cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    let config: FileConfig = toml::from_str(&config_str)?;
    Ok(config)
}

/// Layer overrides on top of file settings and split the result.
///
/// Empty override strings count as "not given", so a blank environment
/// variable doesn't hide a value from the file.
pub fn resolve(file: FileConfig, overrides: Overrides) -> (VersionConfig, RepoOptions) {
    fn pick(over: Option<String>, file: Option<String>) -> Option<String> {
        over.filter(|s| !s.is_empty())
            .or_else(|| file.filter(|s| !s.is_empty()))
    }

    let version = VersionConfig {
        base: pick(overrides.base, file.base).unwrap_or_default(),
        ignore_previous: overrides
            .ignore_previous
            .or(file.ignore_previous)
            .unwrap_or(false),
        pattern: pick(overrides.pattern, file.pattern).unwrap_or_default(),
        prerelease: pick(overrides.prerelease, file.prerelease).unwrap_or_default(),
        metadata: pick(overrides.metadata, file.metadata).unwrap_or_default(),
        prefix: pick(overrides.prefix, file.prefix).unwrap_or_default(),
        tag_pattern: pick(overrides.tag_pattern, file.tag_pattern),
    };

    let defaults = RepoOptions::default();
    let repo = RepoOptions {
        backend: overrides
            .backend
            .or(file.backend)
            .unwrap_or(defaults.backend),
        path: overrides.repo.or(file.repo).unwrap_or(defaults.path),
    };

    (version, repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Some(true), "{}", value);
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Some(false), "{}", value);
        }
        for value in ["", "yes", "tRuE", " true"] {
            assert_eq!(parse_bool(value), None, "{}", value);
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let (version, repo) = resolve(FileConfig::default(), Overrides::default());
        assert_eq!(version, VersionConfig::default());
        assert_eq!(repo, RepoOptions::default());
        assert_eq!(repo.backend, Backend::Git2);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = FileConfig {
            base: Some("1.0.0".to_string()),
            prefix: Some("v".to_string()),
            ignore_previous: Some(true),
            backend: Some(Backend::Cli),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            base: Some("2.0.0".to_string()),
            ignore_previous: Some(false),
            ..Overrides::default()
        };

        let (version, repo) = resolve(file, overrides);
        assert_eq!(version.base, "2.0.0");
        assert_eq!(version.prefix, "v");
        assert!(!version.ignore_previous);
        assert_eq!(repo.backend, Backend::Cli);
    }

    #[test]
    fn test_empty_override_does_not_hide_file_value() {
        let file = FileConfig {
            pattern: Some("*.*.^".to_string()),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            pattern: Some(String::new()),
            ..Overrides::default()
        };

        let (version, _) = resolve(file, overrides);
        assert_eq!(version.pattern, "*.*.^");
    }

    #[test]
    fn test_empty_tag_pattern_is_unset() {
        let overrides = Overrides {
            tag_pattern: Some(String::new()),
            ..Overrides::default()
        };
        let (version, _) = resolve(FileConfig::default(), overrides);
        assert_eq!(version.tag_pattern, None);
    }

    #[test]
    fn test_file_config_from_toml() {
        let config: FileConfig = toml::from_str(
            r#"
pattern = "^.*.*"
ignore_previous = true
backend = "cli"
"#,
        )
        .unwrap();
        assert_eq!(config.pattern.as_deref(), Some("^.*.*"));
        assert_eq!(config.ignore_previous, Some(true));
        assert_eq!(config.backend, Some(Backend::Cli));
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("patern = \"^.*.*\"");
        assert!(result.is_err());
    }
}
