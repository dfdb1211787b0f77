//! Domain logic - pure version rules independent of how git is queried

pub mod pattern;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use pattern::{IncrementDecision, IncrementPattern, INCREMENT_MARKER};
pub use prerelease::{elapsed_label, label_since_tag};
pub use tag::TagPattern;
pub use version::{apply_decision, bump_version, parse_base, NextVersion, VersionBump};
