/*!
# Eulerian Feasibility and Repair

A graph admits an Euler circuit iff it is connected and every node has even degree.
Only the degree condition is checked here; connectivity is guaranteed by the graph
generators and is not re-validated.
*/

use tracing::debug;

use super::*;

/// Degree-parity queries
pub trait Eulerian: AdjacencyList {
    /// Returns *true* if every node has even degree. A graph without edges is Eulerian.
    fn is_eulerian(&self) -> bool {
        self.degrees().all(|d| d % 2 == 0)
    }

    /// Returns all nodes of odd degree in ascending order
    fn odd_degree_nodes(&self) -> Vec<Node> {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1).collect()
    }
}

impl<G: AdjacencyList> Eulerian for G {}

/// Turning a graph into an Eulerian one by adding edges
pub trait EulerianRepair: Eulerian + AdjacencyTest + GraphEdgeEditing {
    /// Tries to make every degree even by connecting odd-degree nodes pairwise.
    ///
    /// Odd nodes are paired in ascending order. If a pair is already adjacent, the first
    /// later odd node not adjacent to the first one of the pair takes the partner's place.
    ///
    /// Returns the added edges on success (empty if the graph already was Eulerian) and
    /// `None` if no valid pairing was found. Edges added before a failure remain in the graph.
    fn make_eulerian(&mut self) -> Option<Vec<Edge>> {
        let mut odds = self.odd_degree_nodes();
        if odds.len() % 2 != 0 {
            debug!(num_odd = odds.len(), "odd number of odd-degree nodes");
            return None;
        }

        let mut added = Vec::with_capacity(odds.len() / 2);
        for i in (0..odds.len()).step_by(2) {
            let u = odds[i];

            if !self.try_add_edge(u, odds[i + 1]) {
                added.push(Edge(u, odds[i + 1]));
                continue;
            }

            let Some(j) = (i + 2..odds.len()).find(|&j| !self.has_edge(u, odds[j])) else {
                debug!(u, v = odds[i + 1], "no partner left for odd-degree node");
                return None;
            };

            odds.swap(i + 1, j);
            self.add_edge(u, odds[i + 1]);
            added.push(Edge(u, odds[i + 1]));
        }

        self.is_eulerian().then_some(added)
    }

    /// Creates the complete graph on `n` nodes and, if `n` is even, removes the perfect
    /// matching `{(i, i + n/2)}` so that every node has even degree.
    fn complete_eulerian(n: NumNodes) -> Self
    where
        Self: Sized,
    {
        let mut graph = Self::new(n);
        graph.connect_clique(0..n);

        if n % 2 == 0 {
            for i in 0..n / 2 {
                graph.remove_edge(i, i + n / 2);
            }
        }

        graph
    }
}

impl<G> EulerianRepair for G where G: Eulerian + AdjacencyTest + GraphEdgeEditing {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_connected;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parity() {
        let path = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(!path.is_eulerian());
        assert_eq!(path.odd_degree_nodes(), vec![0, 3]);

        let cycle = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(cycle.is_eulerian());
        assert!(cycle.odd_degree_nodes().is_empty());

        assert!(AdjArrayUndir::new(5).is_eulerian());
    }

    #[test]
    fn repair_path_into_cycle() {
        let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

        assert_eq!(graph.make_eulerian(), Some(vec![Edge(0, 3)]));
        assert!(graph.is_eulerian());
        assert_eq!(graph.degrees().collect_vec(), vec![2, 2, 2, 2]);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn repair_is_noop_on_eulerian_graph() {
        let mut graph =
            AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let before = graph.clone();

        assert_eq!(graph.make_eulerian(), Some(Vec::new()));
        assert_eq!(graph, before);
    }

    #[test]
    fn repair_swaps_partner() {
        // 0-1 already exists, so 0 is paired with 2 and 1 with 3
        let mut graph = AdjArrayUndir::from_edges(6, [(0, 1), (2, 4), (3, 5), (4, 5)]);
        assert_eq!(graph.odd_degree_nodes(), vec![0, 1, 2, 3]);

        assert_eq!(graph.make_eulerian(), Some(vec![Edge(0, 2), Edge(1, 3)]));
        assert!(graph.is_eulerian());

        // the existing 0-1 edge is not duplicated
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
    }

    #[test]
    fn repair_fails_on_single_edge() {
        let mut graph = AdjArrayUndir::from_edges(2, [(0, 1)]);

        assert_eq!(graph.make_eulerian(), None);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn repair_random_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [3, 6, 11, 30] {
            for _ in 0..10 {
                let mut graph = random_connected(rng, n, n - 1);
                if let Some(added) = graph.make_eulerian() {
                    assert!(graph.is_eulerian());
                    assert_eq!(graph.number_of_edges(), n - 1 + added.len() as NumEdges);
                }
            }
        }
    }

    #[test]
    fn complete_eulerian_graphs() {
        for n in 1..12 {
            let graph = AdjArrayUndir::complete_eulerian(n);

            assert!(graph.is_eulerian());
            let expected_degree = if n % 2 == 0 { n - 2 } else { n - 1 };
            assert!(graph.degrees().all(|d| d == expected_degree));
            assert!(graph.is_connected());
        }

        assert!(AdjArrayUndir::complete_eulerian(2).is_singleton_graph());
        assert_eq!(AdjArrayUndir::complete_eulerian(5).number_of_edges(), 10);
        assert_eq!(AdjArrayUndir::complete_eulerian(6).number_of_edges(), 12);
    }
}
