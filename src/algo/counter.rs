use std::fmt::Display;

/// Explicit tally of the work performed by the bridge algorithms.
///
/// Algorithms receive a `&mut WorkCounter` instead of touching global state, so the
/// numbers of two runs can be compared side by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkCounter {
    node_visits: u64,
    bridge_queries: u64,
    bridge_searches: u64,
}

impl WorkCounter {
    /// A node was visited by a traversal
    pub fn visit_node(&mut self) {
        self.node_visits += 1;
    }

    /// A single edge was asked whether it is a bridge
    pub fn query_bridge(&mut self) {
        self.bridge_queries += 1;
    }

    /// A full bridge search over the whole graph was started
    pub fn search_bridges(&mut self) {
        self.bridge_searches += 1;
    }

    pub fn node_visits(&self) -> u64 {
        self.node_visits
    }

    pub fn bridge_queries(&self) -> u64 {
        self.bridge_queries
    }

    pub fn bridge_searches(&self) -> u64 {
        self.bridge_searches
    }
}

impl Display for WorkCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} node visits, {} bridge queries, {} full bridge searches",
            self.node_visits, self.bridge_queries, self.bridge_searches
        )
    }
}
