/*!
# Graph Representations

Graphs are stored as one [`Neighborhood`] per node. The only backend used here is
[`AdjArrayUndir`], an undirected graph whose neighborhoods are plain `Vec<Node>`s kept
in insertion order. Adjacency order matters: Fleury's algorithm and both bridge
oracles break ties by picking the *first* matching neighbor.
*/

use crate::prelude::*;

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
