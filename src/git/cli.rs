use crate::error::{Result, VersionError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the `git` executable for each query
///
/// Behaves exactly like the shell steps it replaces: a non-zero exit from
/// `git` means the value is unavailable.
pub struct GitCliRepository {
    workdir: PathBuf,
}

/// Captured result of one `git` invocation
struct GitOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

impl GitCliRepository {
    /// Run git commands from `workdir`
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        GitCliRepository {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        tracing::debug!(?args, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    /// Run a query where a failed `git` call means "no answer"
    fn query(&self, args: &[&str]) -> Result<Option<String>> {
        let output = self.run(args)?;
        if output.success {
            Ok(Some(output.stdout))
        } else {
            tracing::debug!(?args, stderr = %output.stderr, "git query had no answer");
            Ok(None)
        }
    }
}

impl super::Repository for GitCliRepository {
    fn current_commit(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "HEAD"]).map_err(|e| {
            VersionError::environment(format!("Unable to determine current commit SHA {}", e))
        })?;

        if !output.success {
            return Err(VersionError::environment(format!(
                "Unable to determine current commit SHA\n{}",
                output.stderr
            )));
        }

        Ok(output.stdout)
    }

    fn latest_tag(&self, commit: &str) -> Result<Option<String>> {
        self.query(&["describe", "--tags", "--abbrev=0", commit])
    }

    fn commit_of_tag(&self, tag: &str) -> Result<Option<String>> {
        self.query(&["rev-list", "-n", "1", tag])
    }

    fn commit_timestamp(&self, commit: &str) -> Result<String> {
        let output = self.run(&["log", "--pretty=%cI", "-n", "1", commit])?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(VersionError::lookup(format!(
                "git log failed for '{}': {}",
                commit, output.stderr
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_current_commit_outside_repository_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let repo = GitCliRepository::new(dir.path());

        let err = repo.current_commit().unwrap_err();
        assert!(err.is_fatal());
        assert!(err
            .to_string()
            .starts_with("Unable to determine current commit SHA"));
    }

    #[test]
    fn test_commit_timestamp_failure_is_a_lookup_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = GitCliRepository::new(dir.path());

        // Either `git log` fails inside the empty directory, or `git` is missing
        match repo.commit_timestamp("0.0.0") {
            Err(VersionError::Lookup(msg)) => assert!(msg.contains("'0.0.0'"), "{}", msg),
            Err(VersionError::Io(_)) => {}
            other => panic!("expected a lookup error, got {:?}", other),
        }
    }
}
