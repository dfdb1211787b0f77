//! Default pre-release labels derived from the age of the base tag
//!
//! The label is `b` followed by the number of seconds since the tag's commit,
//! zero-padded to nine digits (`b000123456`) so that labels of the same width
//! sort lexically in time order.

use crate::error::{Result, VersionError};
use crate::git::{Repository, NO_TAG};
use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Render an elapsed duration as a pre-release label.
///
/// Seconds are rounded to the nearest whole second. A negative duration (a
/// commit dated in the future) keeps its sign inside the padding.
pub fn elapsed_label(elapsed: Duration) -> String {
    let millis = elapsed.num_milliseconds();
    let seconds = (millis as f64 / 1000.0).round() as i64;
    format!("b{:09}", seconds)
}

/// Parse the RFC 3339 text a repository reports for a commit
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| {
        VersionError::environment(format!(
            "Git did not return expected time format or there was a failure parsing the time [{}] {}",
            raw, e
        ))
    })
}

/// Build the default pre-release label for `tag` as seen at `now`.
///
/// Uses the commit the tag points at; when that can't be resolved (including
/// the [NO_TAG] sentinel) the current commit's time is used instead. A
/// timestamp that still doesn't parse is an environment failure.
pub fn label_since_tag<R: Repository + ?Sized>(
    repo: &R,
    tag: &str,
    now: DateTime<Utc>,
) -> Result<String> {
    let tag_commit = match repo.commit_of_tag(tag) {
        Ok(Some(commit)) => commit,
        Ok(None) => NO_TAG.to_string(),
        Err(e) => {
            tracing::debug!(tag, error = %e, "tag commit lookup failed");
            NO_TAG.to_string()
        }
    };

    let raw = match repo.commit_timestamp(&tag_commit) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(
                commit = %tag_commit,
                error = %e,
                "falling back to the current commit's timestamp"
            );
            let head = repo.current_commit()?;
            match repo.commit_timestamp(&head) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(commit = %head, error = %e, "current commit has no timestamp");
                    return Err(VersionError::environment(format!(
                        "Git did not return expected time format or there was a failure parsing the time [] {}",
                        e
                    )));
                }
            }
        }
    };

    let committed = parse_timestamp(raw.trim())?;
    Ok(elapsed_label(now.signed_duration_since(committed)))
}
