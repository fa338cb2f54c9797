/*!
`eulerbridge` compares two ways of finding **bridges** in undirected graphs and uses them to
extract Euler walks with **Fleury's algorithm**:

- a *naive* test that removes an edge and checks whether its endpoints stay connected,
- *Tarjan's* low-link algorithm that computes all bridges with a single DFS.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Graphs are undirected, so
`Edge(u, v)` is treated as equivalent to `Edge(v, u)` (although we normalize edges often).

The only representation is [`AdjArrayUndir`](crate::repr::AdjArrayUndir), which keeps
neighborhoods in insertion order. This order determines all tie-breaks of the algorithms.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as DFS (`graph.dfs(start_node)`), bridges, Eulerian repair and Fleury's algorithm,
- [`gens`] includes the random connected graph generator and deterministic substructures such as paths/cycles/cliques.

In most use-cases, `use eulerbridge::{prelude::*, algo::*};` suffices for your needs.

```
use eulerbridge::{algo::*, prelude::*};

let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
assert_eq!(graph.compute_bridges().len(), 3);

assert_eq!(graph.make_eulerian(), Some(vec![Edge(0, 3)]));
let walk = Fleury::new(graph, TarjanOracle::new()).run(0);
assert_eq!(walk.to_string(), "0 1 2 3 0");
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `eulerbridge::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
