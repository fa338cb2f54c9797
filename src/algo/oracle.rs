/*!
# Bridge Oracles

Fleury's algorithm repeatedly asks whether an edge at the current node is a bridge of the
*remaining* graph. A [`BridgeOracle`] answers these questions; two implementations exist:

- [`NaiveOracle`] runs a removal-and-reachability test per queried edge,
- [`TarjanOracle`] recomputes the full bridge set once per step and answers queries by lookup.

Both do `O(V + E)` work per step, so Fleury with either oracle runs in `O(E * (V + E))`.
*/

use fxhash::FxHashSet;

use super::*;

/// Decides whether an edge of a (mutating) graph is a bridge.
pub trait BridgeOracle<G> {
    /// Called once per Fleury step before the first candidate edge of that step is queried.
    fn begin_step(&mut self, _graph: &G) {}

    /// Returns *true* if `(u, v)` is a bridge of `graph`.
    /// The graph may be modified temporarily but must be unchanged on return.
    fn is_bridge(&mut self, graph: &mut G, u: Node, v: Node) -> bool;

    /// Returns the work performed so far
    fn counter(&self) -> &WorkCounter;
}

/// Answers every query with its own edge-removal test.
#[derive(Debug, Default, Clone)]
pub struct NaiveOracle {
    counter: WorkCounter,
}

impl NaiveOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the work performed so far
    pub fn counter(&self) -> &WorkCounter {
        &self.counter
    }
}

impl<G: NaiveBridges> BridgeOracle<G> for NaiveOracle {
    fn is_bridge(&mut self, graph: &mut G, u: Node, v: Node) -> bool {
        graph.is_bridge_naive_with(u, v, &mut self.counter)
    }

    fn counter(&self) -> &WorkCounter {
        &self.counter
    }
}

/// Caches the bridge set computed by Tarjan's algorithm for the duration of a single step.
#[derive(Debug, Default, Clone)]
pub struct TarjanOracle {
    bridges: FxHashSet<Edge>,
    counter: WorkCounter,
}

impl TarjanOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the work performed so far
    pub fn counter(&self) -> &WorkCounter {
        &self.counter
    }
}

impl<G: Bridges> BridgeOracle<G> for TarjanOracle {
    fn begin_step(&mut self, graph: &G) {
        self.bridges.clear();
        self.bridges.extend(
            graph
                .compute_bridges_with(&mut self.counter)
                .into_iter()
                .map(|e| e.normalized()),
        );
    }

    fn is_bridge(&mut self, _graph: &mut G, u: Node, v: Node) -> bool {
        self.counter.query_bridge();
        self.bridges.contains(&Edge(u, v).normalized())
    }

    fn counter(&self) -> &WorkCounter {
        &self.counter
    }
}
