/*!
# Fleury's Algorithm

Walks the graph from a start node and, at every step, leaves the current node over an edge
that is not a bridge of the remaining graph, unless it is the only edge left. Each traversed
edge is removed, so the algorithm owns its graph: pass a clone if the original is still needed.
*/

use std::fmt::Display;

use tracing::{debug, warn};

use super::*;

/// The sequence of nodes visited by a walk, where consecutive nodes are joined by a traversed edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EulerWalk(pub Vec<Node>);

impl EulerWalk {
    /// Returns the nodes of the walk in order
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Returns the number of nodes on the walk (i.e. number of traversed edges plus one)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the traversed edges in order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.0.iter().copied().tuple_windows().map(|(u, v)| Edge(u, v))
    }

    /// Returns *true* if the walk traverses every edge of `graph` exactly once.
    pub fn is_euler_walk_of<G>(&self, graph: &G) -> bool
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        if self.0.len() != graph.number_of_edges() as usize + 1 {
            return false;
        }

        let mut walked = self.edges().map(|e| e.normalized()).collect_vec();
        let mut present = graph.edges(true).collect_vec();
        walked.sort_unstable();
        present.sort_unstable();

        walked == present
    }
}

impl Display for EulerWalk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Fleury's algorithm on an owned graph using a given [`BridgeOracle`].
pub struct Fleury<G, O> {
    graph: G,
    oracle: O,
}

impl<G, O> Fleury<G, O>
where
    G: AdjacencyList + NeighborsSlice + GraphEdgeEditing,
    O: BridgeOracle<G>,
{
    /// Takes ownership of `graph`; the walk consumes its edges.
    pub fn new(graph: G, oracle: O) -> Self {
        Self { graph, oracle }
    }

    /// Walks from `start` until the current node has no incident edge left.
    /// ** Panics if `start >= n` **
    pub fn run(&mut self, start: Node) -> EulerWalk {
        let mut u = start;
        let mut walk = vec![u];

        while let Some(v) = self.next_node(u) {
            self.graph.remove_edge(u, v);
            u = v;
            walk.push(u);
        }

        debug!(start, steps = walk.len() - 1, "fleury walk finished");
        EulerWalk(walk)
    }

    /// Chooses the edge to leave `u` by; `None` if `u` is isolated.
    fn next_node(&mut self, u: Node) -> Option<Node> {
        match self.graph.degree_of(u) {
            0 => None,
            1 => Some(self.graph.ith_neighbor(u, 0)),
            degree => {
                self.oracle.begin_step(&self.graph);

                // neighbors are read by index since the naive oracle detaches and reattaches
                // edges in place, leaving the order of `u`'s neighbors unchanged
                let mut safe = None;
                for i in 0..degree {
                    let v = self.graph.ith_neighbor(u, i);
                    if !self.oracle.is_bridge(&mut self.graph, u, v) {
                        safe = Some(v);
                        break;
                    }
                }

                Some(safe.unwrap_or_else(|| {
                    warn!(u, degree, "all remaining edges are bridges, taking the first one");
                    self.graph.ith_neighbor(u, 0)
                }))
            }
        }
    }

    /// Returns the remaining graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the oracle, e.g. to inspect its work counter
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}
