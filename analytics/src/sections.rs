//! Section visibility.
//!
//! Each observed section is recorded the first time it is at least half
//! visible. The viewed set keeps first-seen order so `session_end` reports
//! sections in the order the visitor reached them.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::HashSet;

/// Fraction of a section that must be visible for it to count as viewed.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Slack for intersection ratios reported just under the threshold at the
/// moment of crossing.
const RATIO_TOLERANCE: f64 = 0.01;

/// One intersection observation for a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility<'a> {
    pub section_id: &'a str,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<'a> Visibility<'a> {
    #[must_use]
    pub fn new(section_id: &'a str, is_intersecting: bool, ratio: f64) -> Self {
        Self { section_id, is_intersecting, ratio }
    }

    /// Whether this observation crosses the viewed threshold.
    #[must_use]
    pub fn counts_as_viewed(&self) -> bool {
        !self.section_id.is_empty()
            && self.is_intersecting
            && self.ratio + RATIO_TOLERANCE >= VISIBILITY_THRESHOLD
    }
}

/// Insertion-ordered, append-only set of viewed section identifiers.
#[derive(Clone, Debug, Default)]
pub struct SectionsViewed {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl SectionsViewed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section. Returns `true` only the first time `id` is seen.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_owned());
        self.order.push(id.to_owned());
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Viewed identifiers in first-seen order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}
