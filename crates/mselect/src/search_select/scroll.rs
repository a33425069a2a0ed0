//! Edge detection for "scrolled to the bottom".

use mselect_widgets::selection::ScrollMetrics;

/// Fires once per transition from "not at bottom" to "at bottom".
#[derive(Debug, Clone)]
pub struct BottomEdge {
    at_bottom: bool,
}

impl Default for BottomEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl BottomEdge {
    /// Starts as if at the bottom, so an initial position there does not
    /// count as reaching it.
    pub fn new() -> Self {
        Self { at_bottom: true }
    }

    /// Feed a scroll position. Returns `true` when the bottom was just
    /// reached.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> bool {
        let at_bottom = metrics.at_bottom();
        let reached = at_bottom && !self.at_bottom;
        self.at_bottom = at_bottom;
        reached
    }

    /// Adopt a position without reporting an edge. Used when the content
    /// changed underneath the viewport rather than the user scrolling.
    pub fn settle(&mut self, metrics: ScrollMetrics) {
        self.at_bottom = metrics.at_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            content_height: 40,
            viewport_height: 16,
        }
    }

    #[test]
    fn fires_once_per_arrival() {
        let mut edge = BottomEdge::new();
        edge.settle(at(0));
        assert!(!edge.observe(at(10)));
        assert!(edge.observe(at(24)));
        assert!(!edge.observe(at(24)), "resting at the bottom");
        assert!(!edge.observe(at(20)));
        assert!(edge.observe(at(24)), "came back");
    }

    #[test]
    fn bottom_includes_overscroll() {
        let mut edge = BottomEdge::new();
        edge.settle(at(0));
        assert!(edge.observe(at(30)));
    }

    #[test]
    fn settle_swallows_the_edge() {
        let mut edge = BottomEdge::new();
        edge.settle(at(0));
        edge.settle(at(24));
        assert!(!edge.observe(at(24)));
    }
}
