//! State behind the vertical "why choose us" tree.
//!
//! Scroll/resize events feed geometry into [`TreeState::on_scroll`], which
//! updates the progress target and the visibility set. The animation loop calls
//! [`TreeState::on_frame`] independently; the two are only eventually consistent.

use crate::progress::{ContainerGeometry, ScrollProgress};
use crate::visibility::VisibilitySet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Side::Left => "node-left",
            Side::Right => "node-right",
        }
    }

    /// Branch curve from the trunk out to the card.
    pub fn branch_path(self) -> &'static str {
        match self {
            Side::Left => "M 100 30 Q 70 30, 50 30 T 0 30",
            Side::Right => "M 0 30 Q 30 30, 50 30 T 100 30",
        }
    }
}

/// Index carried by a node row; rows without a valid one are not tracked.
pub fn parse_node_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

#[derive(Clone, Debug)]
pub struct TreeState {
    pub progress: ScrollProgress,
    pub visible: VisibilitySet,
    node_count: usize,
}

impl TreeState {
    pub fn new(node_count: usize) -> Self {
        Self {
            progress: ScrollProgress::new(),
            visible: VisibilitySet::new(),
            node_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the nodes revealed by this event.
    pub fn on_scroll<I>(&mut self, geom: &ContainerGeometry, node_tops: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let newly = self.visible.update(node_tops, geom.viewport_height);
        self.progress.set_target(geom);
        newly
    }

    pub fn on_frame(&mut self) -> f64 {
        self.progress.step()
    }

    pub fn end_dot_visible(&self) -> bool {
        self.visible.is_complete(self.node_count)
    }
}
