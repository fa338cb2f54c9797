/*!
# Graph Generators

Builder-style generators for the random connected graphs the benchmark runs on, plus helpers
to add deterministic substructures (paths, cycles, cliques) to an existing graph.

The typical usage workflow is:

1. Create a generator instance (e.g., `RandomConnected::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()`.

```
use eulerbridge::{gens::*, prelude::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
let edges = RandomConnected::new().nodes(10).edges(15).generate(&mut rng);
let graph = AdjArrayUndir::from_edges(10, edges);

assert_eq!(graph.number_of_edges(), 15);
```
*/

use rand::Rng;

use crate::prelude::*;

mod connected;
mod substructures;
mod tree;

pub use connected::*;
pub use substructures::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}
