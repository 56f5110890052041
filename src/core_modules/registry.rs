// THEORY:
// The `registry` module holds the results of a scan. A `Crewmate` is created
// only after a candidate has passed every validator check, and is immutable
// from then on. The `MatchRegistry` is an insertion-ordered, append-only
// list: horizontal-pass matches precede vertical-pass matches, and within a
// pass matches appear in scan order. No deduplication happens here - a pixel
// region matched by both passes is recorded twice by design.

use crate::core_modules::geometry::Offset;
use crate::core_modules::surface::Color;

/// One confirmed silhouette match: where it sits and what color its body is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crewmate {
    pub offset: Offset,
    pub color: Color,
}

/// The accumulated matches of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRegistry {
    crewmates: Vec<Crewmate>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a confirmed match, preserving scan order.
    pub fn push(&mut self, crewmate: Crewmate) {
        self.crewmates.push(crewmate);
    }

    /// Appends every match from `other` after this registry's own, so a
    /// per-pass accumulation merges back into the sequential pass order.
    pub fn merge(&mut self, other: MatchRegistry) {
        self.crewmates.extend(other.crewmates);
    }

    pub fn len(&self) -> usize {
        self.crewmates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crewmates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crewmate> {
        self.crewmates.iter()
    }

    pub fn as_slice(&self) -> &[Crewmate] {
        &self.crewmates
    }
}
