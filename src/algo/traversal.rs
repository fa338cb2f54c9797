/*!
# Traversal

A stack-based depth-first search over the nodes reachable from a start node. The search
is an iterator so callers can stop early or collect the visited set via
[`DFS::into_reachable`].
*/

use super::*;

/// Iterative DFS yielding each reachable node exactly once
pub struct DFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a DFS starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(start as usize);

        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }

    /// Runs the search to completion, records every visit and returns the set of reachable nodes
    pub fn into_reachable(mut self, counter: &mut WorkCounter) -> NodeBitSet {
        for _ in self.by_ref() {
            counter.visit_node();
        }
        self.visited
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.put(v as usize) {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.stack.len(),
            Some(self.graph.len() - self.visited.count_ones(..) + self.stack.len()),
        )
    }
}

pub trait Traversal: AdjacencyList + Sized {
    /// Returns a DFS iterator starting at `start`
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns *true* if all nodes with at least one neighbor lie in the same component.
    /// Isolated nodes are ignored.
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices_with_neighbors().next() else {
            return true;
        };

        self.dfs(start).count() as NumNodes == self.number_of_nodes_with_neighbors()
    }
}

impl<G: AdjacencyList> Traversal for G {}
