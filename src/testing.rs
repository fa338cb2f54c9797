//! Helpers shared by the unit tests of several modules.

use itertools::Itertools;
use rand::Rng;

use crate::{algo::EulerWalk, gens::*, prelude::*};

/// Creates a sorted list of at most `m_ub` distinct normalized edges without loops for nodes `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .sorted_unstable()
        .dedup()
        .collect_vec()
}

/// Creates a random connected graph with `n` nodes and (up to clamping) `m` edges
pub(crate) fn random_connected<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> AdjArrayUndir {
    AdjArrayUndir::from_edges(n, RandomConnected::new().nodes(n).edges(m).generate(rng))
}

/// Asserts that `walk` traverses every edge of `graph` exactly once
pub(crate) fn assert_euler_walk(graph: &AdjArrayUndir, walk: &EulerWalk) {
    assert_eq!(
        walk.len(),
        graph.number_of_edges() as usize + 1,
        "walk {walk} has wrong length"
    );
    assert!(
        walk.is_euler_walk_of(graph),
        "walk {walk} is not an Euler walk of the graph"
    );
}
