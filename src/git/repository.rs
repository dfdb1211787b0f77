use crate::error::{Result, VersionError};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn find_commit(&self, spec: &str) -> std::result::Result<git2::Commit<'_>, git2::Error> {
        self.repo.revparse_single(spec)?.peel_to_commit()
    }
}

impl super::Repository for Git2Repository {
    fn current_commit(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| {
                VersionError::environment(format!("Unable to determine current commit: {}", e))
            })?;

        Ok(head.id().to_string())
    }

    fn latest_tag(&self, commit: &str) -> Result<Option<String>> {
        let object = self.repo.revparse_single(commit)?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match object.describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(Some(describe.format(Some(&format))?))
    }

    fn commit_of_tag(&self, tag: &str) -> Result<Option<String>> {
        match self.find_commit(tag) {
            Ok(commit) => Ok(Some(commit.id().to_string())),
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn commit_timestamp(&self, commit: &str) -> Result<String> {
        let commit = self.find_commit(commit)?;
        let time = commit.time();

        let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
            VersionError::lookup(format!(
                "Commit {} has an out of range time offset: {} minutes",
                commit.id(),
                time.offset_minutes()
            ))
        })?;
        let utc = DateTime::<Utc>::from_timestamp(time.seconds(), 0).ok_or_else(|| {
            VersionError::lookup(format!(
                "Commit {} has an out of range timestamp: {}",
                commit.id(),
                time.seconds()
            ))
        })?;

        Ok(utc
            .with_timezone(&offset)
            .to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_empty_repository_has_no_current_commit() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repository::from_git2(Git2Repo::init(dir.path()).unwrap());

        let err = repo.current_commit().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().starts_with("Unable to determine current commit"));
    }

    #[test]
    fn test_missing_tag_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repository::from_git2(Git2Repo::init(dir.path()).unwrap());

        assert_eq!(repo.commit_of_tag("v9.9.9").unwrap(), None);
    }
}
