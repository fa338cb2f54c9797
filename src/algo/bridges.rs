use super::*;

/// Tarjan's bridge finding using a single DFS forest
pub trait Bridges: AdjacencyList + NeighborsSlice {
    /// Returns all bridges `(parent, child)` in the order their DFS subtrees are completed
    fn compute_bridges(&self) -> Vec<Edge> {
        self.compute_bridges_with(&mut WorkCounter::default())
    }

    /// Like [`Bridges::compute_bridges`] but records the work into `counter`
    fn compute_bridges_with(&self, counter: &mut WorkCounter) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: AdjacencyList + NeighborsSlice,
{
    fn compute_bridges_with(&self, counter: &mut WorkCounter) -> Vec<Edge> {
        counter.search_bridges();
        BridgeSearch::new(self, counter).compute()
    }
}

/// Bridge tests by removing an edge and checking reachability
pub trait NaiveBridges: AdjacencyList + GraphEdgeEditing {
    /// Returns *true* if removing `(u, v)` disconnects `v` from `u`.
    /// The graph is restored afterwards, including the adjacency order.
    /// A non-existing edge is not a bridge.
    fn is_bridge_naive(&mut self, u: Node, v: Node) -> bool {
        self.is_bridge_naive_with(u, v, &mut WorkCounter::default())
    }

    /// Like [`NaiveBridges::is_bridge_naive`] but records the work into `counter`
    fn is_bridge_naive_with(&mut self, u: Node, v: Node, counter: &mut WorkCounter) -> bool {
        counter.query_bridge();

        let Some(detached) = self.detach_edge(u, v) else {
            return false;
        };

        let reachable = self.dfs(u).into_reachable(counter);
        self.reattach_edge(detached);

        !reachable.contains(v as usize)
    }

    /// Tests every edge once and returns the number of bridges
    fn count_bridges_naive(&mut self, counter: &mut WorkCounter) -> NumEdges {
        let edges = self.edges(true).collect_vec();
        edges
            .into_iter()
            .filter(|&Edge(u, v)| self.is_bridge_naive_with(u, v, counter))
            .count() as NumEdges
    }
}

impl<G> NaiveBridges for G where G: AdjacencyList + GraphEdgeEditing {}

struct BridgeSearch<'a, 'c, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    counter: &'c mut WorkCounter,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    stack: Vec<Frame>,
    bridges: Vec<Edge>,
}

/// A node on the DFS stack together with the position of its next unexplored neighbor
struct Frame {
    node: Node,
    next_neighbor: NumNodes,
}

impl<'a, 'c, G> BridgeSearch<'a, 'c, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    fn new(graph: &'a G, counter: &'c mut WorkCounter) -> Self {
        Self {
            graph,
            counter,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            stack: Vec::new(),
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices_range() {
            if self.visited.put(u as usize) {
                continue;
            }

            self.compute_tree(u);
        }

        self.bridges
    }

    fn discover(&mut self, parent: Option<Node>, u: Node) {
        self.time += 1;
        self.counter.visit_node();

        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };

        self.stack.push(Frame {
            node: u,
            next_neighbor: 0,
        });
    }

    fn compute_tree(&mut self, root: Node) {
        self.discover(None, root);

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;

                if !self.visited.put(v as usize) {
                    self.discover(Some(u), v);
                } else if Some(v) != self.nodes_info[u as usize].parent {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
                continue;
            }

            self.stack.pop();

            let info_u = self.nodes_info[u as usize];
            if let Some(p) = info_u.parent {
                self.nodes_info[p as usize].update_low(info_u.low);

                if info_u.low > self.nodes_info[p as usize].discovery {
                    self.bridges.push(Edge(p, u));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Option<Node>,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
