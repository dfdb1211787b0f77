use crate::error::{Result, VersionError};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head: Option<String>,
    nearest_tags: HashMap<String, String>,
    tags: HashMap<String, String>,
    timestamps: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository (no HEAD, no tags)
    pub fn new() -> Self {
        MockRepository {
            head: None,
            nearest_tags: HashMap::new(),
            tags: HashMap::new(),
            timestamps: HashMap::new(),
        }
    }

    /// Set the current commit
    pub fn set_head(&mut self, commit: impl Into<String>) {
        self.head = Some(commit.into());
    }

    /// Add a tag pointing to a commit
    ///
    /// The tag also becomes the nearest tag of that commit.
    pub fn add_tag(&mut self, name: impl Into<String>, commit: impl Into<String>) {
        let name = name.into();
        let commit = commit.into();
        self.nearest_tags.insert(commit.clone(), name.clone());
        self.tags.insert(name, commit);
    }

    /// Set the nearest tag reachable from a commit
    pub fn set_nearest_tag(&mut self, commit: impl Into<String>, tag: impl Into<String>) {
        self.nearest_tags.insert(commit.into(), tag.into());
    }

    /// Set the raw timestamp text reported for a commit
    pub fn set_timestamp(&mut self, commit: impl Into<String>, timestamp: impl Into<String>) {
        self.timestamps.insert(commit.into(), timestamp.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_commit(&self) -> Result<String> {
        self.head.clone().ok_or_else(|| {
            VersionError::environment("Unable to determine current commit: no HEAD in mock")
        })
    }

    fn latest_tag(&self, commit: &str) -> Result<Option<String>> {
        Ok(self.nearest_tags.get(commit).cloned())
    }

    fn commit_of_tag(&self, tag: &str) -> Result<Option<String>> {
        Ok(self.tags.get(tag).cloned())
    }

    fn commit_timestamp(&self, commit: &str) -> Result<String> {
        self.timestamps
            .get(commit)
            .cloned()
            .ok_or_else(|| VersionError::lookup(format!("unknown commit '{}'", commit)))
    }
}
