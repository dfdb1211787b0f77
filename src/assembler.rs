//! Version assembly
//!
//! Turns a [VersionConfig] and a [Repository] into the final version string:
//! resolve the base, increment it, attach pre-release and metadata, then glue
//! on the prefix. Every step either succeeds or aborts the whole run.

use chrono::{DateTime, Utc};

use crate::config::VersionConfig;
use crate::domain::{
    apply_decision, label_since_tag, parse_base, IncrementPattern, NextVersion, TagPattern,
};
use crate::error::{Result, VersionError};
use crate::git::{Repository, NO_TAG};

/// Assemble the next version using the current time
pub fn assemble<R: Repository + ?Sized>(config: &VersionConfig, repo: &R) -> Result<String> {
    assemble_at(config, repo, Utc::now())
}

/// Assemble the next version as seen at `now`
///
/// # Returns
/// * `Ok(String)` - The rendered version, prefix included
/// * `Err` - The first stage that failed; [VersionError::is_fatal] tells
///   environment failures apart from bad input
pub fn assemble_at<R: Repository + ?Sized>(
    config: &VersionConfig,
    repo: &R,
    now: DateTime<Utc>,
) -> Result<String> {
    // Always resolved: it also seeds the default pre-release label
    let head = repo.current_commit()?;
    let latest_tag = resolve_latest_tag(repo, &head);
    tracing::debug!(commit = %head, tag = %latest_tag, "resolved latest tag");

    let base = effective_base(config, &latest_tag)?;

    let prerelease = if config.prerelease.is_empty() {
        label_since_tag(repo, &latest_tag, now)?
    } else {
        config.prerelease.clone()
    };

    let current = parse_base(&base)?;

    let decision = IncrementPattern::parse(&config.pattern).decision();
    tracing::debug!(base = %current, pattern = %config.pattern, %decision, "incrementing");
    let next = apply_decision(&current, decision)?;

    let next = NextVersion::new(&next).with_prerelease(&prerelease)?;
    let next = if config.metadata.is_empty() {
        next
    } else {
        next.with_metadata(&config.metadata)?
    };

    Ok(format!("{}{}", config.prefix, next))
}

/// Nearest tag from `commit`, or [NO_TAG] when there is none
fn resolve_latest_tag<R: Repository + ?Sized>(repo: &R, commit: &str) -> String {
    match repo.latest_tag(commit) {
        Ok(Some(tag)) => tag,
        Ok(None) => {
            tracing::debug!(commit, "no reachable tag, using {}", NO_TAG);
            NO_TAG.to_string()
        }
        Err(e) => {
            tracing::debug!(commit, error = %e, "tag lookup failed, using {}", NO_TAG);
            NO_TAG.to_string()
        }
    }
}

/// Pick the version string to increment from
fn effective_base(config: &VersionConfig, latest_tag: &str) -> Result<String> {
    if config.ignore_previous {
        if config.base.is_empty() {
            return Err(VersionError::config(
                "ignore previous is true but no base version provided, please check input",
            ));
        }
        tracing::debug!(base = %config.base, "using configured base version");
        return Ok(config.base.clone());
    }

    let base = match &config.tag_pattern {
        Some(pattern) => {
            let pattern = TagPattern::new(pattern.as_str())?;
            match pattern.extract(latest_tag) {
                Some(version) => version.to_string(),
                None => {
                    tracing::debug!(
                        tag = latest_tag,
                        pattern = pattern.as_str(),
                        "tag does not match pattern, using it as-is"
                    );
                    latest_tag.to_string()
                }
            }
        }
        None => latest_tag.to_string(),
    };
    Ok(base)
}
