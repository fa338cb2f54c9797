use std::{iter::Copied, slice::Iter};

use itertools::Itertools;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor at the end of the Neighborhood without checking if this neighbor exists beforehand.
    /// This might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node);

    /// Removes the first occurrence of `u` while keeping the order of all other neighbors.
    /// Returns the position `u` was stored at, or `None` if `u` was not a neighbor.
    fn take_neighbor(&mut self, u: Node) -> Option<NumNodes>;

    /// Inserts `u` at position `pos`, shifting all later neighbors back by one.
    /// ** Panics if `pos > self.num_of_neighbors()` **
    fn insert_neighbor_at(&mut self, pos: NumNodes, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        self.take_neighbor(u).is_some()
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a slice-reference of the neighborhood of a given vertex
    fn as_slice(&self) -> &[Node];
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn take_neighbor(&mut self, u: Node) -> Option<NumNodes> {
        let (pos, _) = self.0.iter().find_position(|&&x| x == u)?;
        // `remove` instead of `swap_remove`: the adjacency order is observable
        self.0.remove(pos);
        Some(pos as NumNodes)
    }

    fn insert_neighbor_at(&mut self, pos: NumNodes, u: Node) {
        self.0.insert(pos as usize, u);
    }
}

impl NeighborhoodSlice for ArrNeighborhood {
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take_keeps_order() {
        let mut nbs = ArrNeighborhood(vec![4, 2, 7, 2, 9]);

        assert_eq!(nbs.take_neighbor(2), Some(1));
        assert_eq!(nbs.as_slice(), &[4, 7, 2, 9]);

        assert_eq!(nbs.take_neighbor(5), None);
        assert_eq!(nbs.as_slice(), &[4, 7, 2, 9]);

        nbs.insert_neighbor_at(1, 2);
        assert_eq!(nbs.as_slice(), &[4, 2, 7, 2, 9]);
        assert_eq!(nbs.num_of_neighbors(), 5);
    }

    #[test]
    fn add_and_remove() {
        let mut nbs = ArrNeighborhood::new(10);
        nbs.add_neighbor(3);
        nbs.add_neighbor(3);
        assert!(nbs.has_neighbor(3));
        assert_eq!(nbs.num_of_neighbors(), 2);

        assert!(nbs.try_remove_neighbor(3));
        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
        assert_eq!(nbs.num_of_neighbors(), 0);
    }
}
