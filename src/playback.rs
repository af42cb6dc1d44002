//! Playback Controller — deterministic, seekable replay of a step timeline.
//!
//! DESIGN
//! ======
//! The whole machine is one index into the normalized timeline. Everything
//! the renderer asks ("is this node current", "was this node visited") is
//! derived from that index and the normalized result on every query; there
//! are no separately maintained flags that can drift apart between the
//! matrix highlighting, the node coloring, and the step list.

use std::collections::HashSet;

use crate::normalize::{Normalized, ResultDetail, Step};

/// Seekable replay state over a normalized execution result.
pub struct Playback {
    timeline: Vec<Step>,
    detail: ResultDetail,
    current: usize,
}

impl Playback {
    /// Start a new replay at step zero.
    #[must_use]
    pub fn new(normalized: Normalized) -> Self {
        Self { timeline: normalized.timeline, detail: normalized.detail, current: 0 }
    }

    #[must_use]
    pub fn timeline(&self) -> &[Step] {
        &self.timeline
    }

    #[must_use]
    pub fn detail(&self) -> &ResultDetail {
        &self.detail
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Current playhead position; 0 when the timeline is empty.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// The step at the playhead, when the timeline is non-empty.
    #[must_use]
    pub fn step(&self) -> Option<&Step> {
        self.timeline.get(self.current)
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Advance one step. Saturates at the last step (never wraps); returns
    /// whether the position moved.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.timeline.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Saturates at the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Seek to `index`. Out-of-range seeks are rejected without clamping, so
    /// a scrubber never lands somewhere it did not ask for; returns whether
    /// the seek was applied.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.timeline.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Rewind to step zero. Idempotent.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    // =========================================================================
    // DERIVED QUERIES
    // =========================================================================

    /// The single node the playhead step visits, if any. Empty timelines and
    /// MST edge steps have no current node.
    #[must_use]
    pub fn current_node(&self) -> Option<usize> {
        self.step().and_then(|s| s.visit_order_node)
    }

    /// Nodes visited strictly before the playhead. For traversal results
    /// this is the node projection of `timeline[0..current)`; for MST
    /// results it is every endpoint touched by the edges applied so far.
    #[must_use]
    pub fn visited(&self) -> HashSet<usize> {
        match &self.detail {
            ResultDetail::Mst { edges, .. } => edges
                .iter()
                .take(self.current)
                .flat_map(|e| [e.from, e.to])
                .collect(),
            _ => self
                .timeline
                .iter()
                .take(self.current)
                .filter_map(|s| s.visit_order_node)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "playback_test.rs"]
mod tests;
