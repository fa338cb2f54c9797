use super::*;

/// An undirected graph representation.
///
/// Every edge `{u, v}` is stored twice: `v` in the neighborhood of `u` and `u` in the
/// neighborhood of `v`. All editing operations maintain this symmetry. A self-loop
/// `{u, u}` is stored as two entries in the neighborhood of `u`.
///
/// `Clone` performs a deep copy, which is how independent runs of destructive
/// algorithms obtain their own graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: NeighborhoodSlice> NeighborsSlice for UndirectedGraph<Nbs> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.add_edge(u, v);
            false
        }
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.detach_edge(u, v).is_some()
    }

    fn detach_edge(&mut self, u: Node, v: Node) -> Option<DetachedEdge> {
        let pos_at_u = self.nbs[u as usize].take_neighbor(v)?;
        let pos_at_v = self.nbs[v as usize].take_neighbor(u);
        debug_assert!(pos_at_v.is_some(), "asymmetric adjacency at {}", Edge(u, v));

        self.num_edges -= 1;
        Some(DetachedEdge::new(
            Edge(u, v),
            pos_at_u,
            pos_at_v.unwrap_or_else(|| self.degree_of(v)),
        ))
    }

    fn reattach_edge(&mut self, detached: DetachedEdge) {
        let Edge(u, v) = detached.edge;
        let (pos_at_u, pos_at_v) = detached.positions();

        // reverse order of removal, so that self-loops are restored correctly
        self.nbs[v as usize].insert_neighbor_at(pos_at_v, u);
        self.nbs[u as usize].insert_neighbor_at(pos_at_u, v);
        self.num_edges += 1;
    }
}
