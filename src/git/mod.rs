//! Read-only repository queries
//!
//! This module provides a trait-based abstraction over the handful of git
//! lookups tag-version needs, allowing for multiple implementations including
//! real repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: in-process libgit2 via the `git2` crate
//! - [cli::GitCliRepository]: runs the `git` executable and parses its output
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use tag_version::git::{Repository, NO_TAG};
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.current_commit()?;
//! let tag = repo.latest_tag(&head)?.unwrap_or_else(|| NO_TAG.to_string());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCliRepository;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag name used when no tag can be resolved. Not an error condition.
pub const NO_TAG: &str = "0.0.0";

/// Read access to repository metadata
///
/// Lookups that can legitimately miss (`latest_tag`, `commit_of_tag`) return
/// `Ok(None)`; callers turn a miss into [NO_TAG].
pub trait Repository {
    /// Get the id of the commit currently checked out (HEAD)
    ///
    /// # Returns
    /// * `Ok(String)` - Full commit id
    /// * `Err` - If the repository cannot report a current commit
    fn current_commit(&self) -> Result<String>;

    /// Find the nearest tag reachable from `commit`
    ///
    /// Both lightweight and annotated tags count; the closest one by ancestry
    /// wins, the same answer `git describe --tags --abbrev=0` gives.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Name of the nearest tag
    /// * `Ok(None)` - If no tag is reachable
    /// * `Err` - If the lookup itself failed
    fn latest_tag(&self, commit: &str) -> Result<Option<String>>;

    /// Get the id of the commit a tag points to (annotated tags are peeled)
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Commit id
    /// * `Ok(None)` - If the tag does not exist
    /// * `Err` - If the lookup itself failed
    fn commit_of_tag(&self, tag: &str) -> Result<Option<String>>;

    /// Get the committer time of `commit` as RFC 3339 text
    ///
    /// The text is returned as-is so callers decide how to treat a malformed
    /// answer.
    fn commit_timestamp(&self, commit: &str) -> Result<String>;
}
