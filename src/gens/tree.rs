/*!
# Random Spanning Trees

Grows a tree from node `0` by repeatedly attaching a uniformly chosen unconnected node to a
uniformly chosen node of the tree. The result is connected and has exactly `n - 1` edges.
*/

use super::*;

/// Generator for a random spanning tree on `n` nodes.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
}

impl RandomTree {
    /// Creates a new tree generator with `n = 0`
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        RandomTreeStream {
            rng,
            state: TreeGrowth::new(self.n),
        }
    }
}

/// Connected and unconnected nodes of a partially grown tree
#[derive(Debug, Clone)]
pub(super) struct TreeGrowth {
    connected: Vec<Node>,
    not_connected: Vec<Node>,
}

impl TreeGrowth {
    pub(super) fn new(n: NumNodes) -> Self {
        Self {
            connected: Vec::from_iter((n > 0).then_some(0)),
            not_connected: (1..n).collect(),
        }
    }

    /// Attaches one more node and returns the new tree edge (tree node first)
    pub(super) fn next_edge<R: Rng>(&mut self, rng: &mut R) -> Option<Edge> {
        if self.not_connected.is_empty() {
            return None;
        }

        let u = self.connected[rng.random_range(0..self.connected.len())];
        let v = self
            .not_connected
            .swap_remove(rng.random_range(0..self.not_connected.len()));

        self.connected.push(v);
        Some(Edge(u, v))
    }
}

struct RandomTreeStream<'a, R: Rng> {
    rng: &'a mut R,
    state: TreeGrowth,
}

impl<R: Rng> Iterator for RandomTreeStream<'_, R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.next_edge(self.rng)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.state.not_connected.len();
        (len, Some(len))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::Traversal;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn tree_is_spanning() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [1, 2, 3, 10, 100] {
            for _ in 0..5 {
                let edges = RandomTree::new().nodes(n).generate(rng);
                assert_eq!(edges.len(), n as usize - 1);

                let graph = AdjArrayUndir::from_edges(n, edges);
                assert!(graph.is_connected());
                assert_eq!(graph.number_of_nodes_with_neighbors(), if n > 1 { n } else { 0 });
            }
        }
    }

    #[test]
    fn empty_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert!(RandomTree::new().generate(rng).is_empty());
    }

    #[test]
    fn tree_edges_attach_new_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut seen = vec![0];

        for Edge(u, v) in RandomTree::new().nodes(20).stream(rng) {
            assert!(seen.contains(&u));
            assert!(!seen.contains(&v));
            seen.push(v);
        }
        assert_eq!(seen.len(), 20);
    }
}
