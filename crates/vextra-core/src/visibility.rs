use crate::constants::NODE_REVEAL_VIEWPORT_FRACTION;
use fnv::FnvHashSet;

/// Node indices revealed so far. Grows monotonically for the lifetime of a mount.
#[derive(Clone, Debug, Default)]
pub struct VisibilitySet {
    revealed: FnvHashSet<usize>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal every node whose top edge has crossed the reveal line.
    ///
    /// `node_tops` yields `(index, top)` pairs in viewport pixels. Returns the
    /// indices that were newly revealed by this call, in input order.
    pub fn update<I>(&mut self, node_tops: I, viewport_height: f64) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let line = viewport_height * NODE_REVEAL_VIEWPORT_FRACTION;
        let mut newly = Vec::new();
        for (index, top) in node_tops {
            if top < line && self.revealed.insert(index) {
                newly.push(index);
            }
        }
        newly
    }

    pub fn contains(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// True once every one of `total` nodes has been revealed.
    pub fn is_complete(&self, total: usize) -> bool {
        total > 0 && (0..total).all(|i| self.revealed.contains(&i))
    }

    pub fn indices(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.revealed.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
