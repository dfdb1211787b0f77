use thiserror::Error;

/// Unified error type for tag-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("version parse failed [{source}]: '{input}' is not a valid semantic version")]
    VersionParse {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("error appending pre-release data: '{value}' is not a dot-separated list of [0-9A-Za-z-] identifiers")]
    PreRelease { value: String },

    #[error("error appending metadata: '{value}' is not a dot-separated list of [0-9A-Za-z-] identifiers")]
    Metadata { value: String },

    #[error("version component overflow incrementing '{input}'")]
    Overflow { input: String },

    /// A repository query that should have answered did not.
    #[error("Repository lookup failed: {0}")]
    Lookup(String),

    /// The repository or its tooling cannot give us what we need to go on.
    #[error("{0}")]
    Environment(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in tag-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        VersionError::Environment(msg.into())
    }

    /// Create a repository lookup error with context
    pub fn lookup(msg: impl Into<String>) -> Self {
        VersionError::Lookup(msg.into())
    }

    /// Whether this error should end the process without the `ERROR:` report.
    pub fn is_fatal(&self) -> bool {
        matches!(self, VersionError::Environment(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_version_parse_error_keeps_input_and_cause() {
        let source = semver::Version::parse("not-a-version").unwrap_err();
        let err = VersionError::VersionParse {
            input: "not-a-version".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("'not-a-version'"));
        assert!(msg.starts_with("version parse failed ["));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_environment_error_is_raw() {
        let err = VersionError::environment("Unable to determine current commit");
        assert_eq!(err.to_string(), "Unable to determine current commit");
    }

    #[test]
    fn test_only_environment_is_fatal() {
        let parse_source = semver::Version::parse("x").unwrap_err();
        let errors = vec![
            VersionError::config("x"),
            VersionError::VersionParse {
                input: "x".to_string(),
                source: parse_source,
            },
            VersionError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")),
            VersionError::Overflow {
                input: "x".to_string(),
            },
            VersionError::lookup("x"),
        ];

        for err in errors {
            assert!(!err.is_fatal(), "{} should not be fatal", err);
        }
        assert!(VersionError::environment("x").is_fatal());
    }

    #[test]
    fn test_pre_release_and_metadata_messages() {
        let pre = VersionError::PreRelease {
            value: "bad!".to_string(),
        };
        assert!(pre.to_string().starts_with("error appending pre-release data"));
        assert!(pre.to_string().contains("'bad!'"));

        let meta = VersionError::Metadata {
            value: "bad!".to_string(),
        };
        assert!(meta.to_string().starts_with("error appending metadata"));
    }

    #[test]
    fn test_overflow_and_lookup_messages() {
        let overflow = VersionError::Overflow {
            input: "18446744073709551615.0.0".to_string(),
        };
        assert_eq!(
            overflow.to_string(),
            "version component overflow incrementing '18446744073709551615.0.0'"
        );

        let lookup = VersionError::lookup("unknown commit 'abc'");
        assert_eq!(lookup.to_string(), "Repository lookup failed: unknown commit 'abc'");
    }
}
