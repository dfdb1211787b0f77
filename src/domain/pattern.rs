//! Increment patterns such as `^.*.*` or `*.*.^`
//!
//! A pattern is read slot by slot: the first three dot-separated slots stand for
//! major, minor and patch, and a slot equal to [INCREMENT_MARKER] selects that
//! component. Anything else in a slot, including nothing at all, leaves it
//! alone. Slots past the third are ignored.

use std::fmt;

/// Slot value that selects a component for incrementing
pub const INCREMENT_MARKER: &str = "^";

/// Which components a pattern selected, before any defaulting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncrementPattern {
    slots: [bool; 3],
}

/// Which components to increment, in major → minor → patch order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementDecision {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl IncrementPattern {
    /// Parse a pattern string. Never fails.
    pub fn parse(pattern: &str) -> Self {
        let mut slots = [false; 3];
        for (slot, token) in slots.iter_mut().zip(pattern.split('.')) {
            *slot = token == INCREMENT_MARKER;
        }
        IncrementPattern { slots }
    }

    /// True when no slot carries the marker
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|&selected| selected)
    }

    /// The decision to apply; minor-only when the pattern selects nothing.
    pub fn decision(&self) -> IncrementDecision {
        if self.is_empty() {
            return IncrementDecision::MINOR;
        }

        let [major, minor, patch] = self.slots;
        IncrementDecision {
            major,
            minor,
            patch,
        }
    }
}

impl IncrementDecision {
    /// Default when a pattern selects nothing
    pub const MINOR: IncrementDecision = IncrementDecision {
        major: false,
        minor: true,
        patch: false,
    };
}

impl fmt::Display for IncrementDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |selected: bool| if selected { INCREMENT_MARKER } else { "*" };
        write!(
            f,
            "{}.{}.{}",
            slot(self.major),
            slot(self.minor),
            slot(self.patch)
        )
    }
}
