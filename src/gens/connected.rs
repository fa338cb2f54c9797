use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// Random connected simple graph: a [`RandomTree`] followed by uniformly random extra edges.
///
/// Extra edges are rejected if they are loops or already present. The number of edges is
/// clamped to `[n - 1, n(n - 1)/2]`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomConnected {
    n: NumNodes,
    m: NumEdges,
}

impl RandomConnected {
    /// Creates a new generator with `n = m = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of edges that will actually be generated
    pub fn number_of_edges(&self) -> NumEdges {
        let n = self.n as u64;
        let max_edges = n * n.saturating_sub(1) / 2;

        (self.m as u64).clamp(n.saturating_sub(1), max_edges) as NumEdges
    }
}

impl NumNodesGen for RandomConnected {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for RandomConnected {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for RandomConnected {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let m = self.number_of_edges();
        if m != self.m {
            debug!(requested = self.m, m, n = self.n, "clamped number of edges");
        }

        RandomConnectedStream {
            rng,
            n: self.n,
            tree: TreeGrowth::new(self.n),
            present: FxHashSet::default(),
            remaining: m,
        }
    }
}

struct RandomConnectedStream<'a, R: Rng> {
    rng: &'a mut R,
    n: NumNodes,
    tree: TreeGrowth,
    present: FxHashSet<Edge>,
    remaining: NumEdges,
}

impl<R: Rng> Iterator for RandomConnectedStream<'_, R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if let Some(edge) = self.tree.next_edge(self.rng) {
            self.present.insert(edge.normalized());
            return Some(edge);
        }

        loop {
            let edge = Edge(
                self.rng.random_range(0..self.n),
                self.rng.random_range(0..self.n),
            );

            if !edge.is_loop() && self.present.insert(edge.normalized()) {
                return Some(edge);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}
