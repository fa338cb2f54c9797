/*!
# Graph Algorithms

Bridge detection, Eulerian repair and Fleury's algorithm, built on top of the graph
representations in this crate. All algorithms are re-exported at the top level of this module:
```rust
use eulerbridge::algo::*;
```
Most functionality is provided as traits implemented on the graph itself
(`graph.compute_bridges()`, `graph.make_eulerian()`, ...).
*/

mod bridges;
mod counter;
mod eulerian;
mod fleury;
mod oracle;
mod traversal;

use crate::{gens::GeneratorSubstructures, prelude::*};
use itertools::Itertools;

pub use bridges::*;
pub use counter::*;
pub use eulerian::*;
pub use fleury::*;
pub use oracle::*;
pub use traversal::*;
