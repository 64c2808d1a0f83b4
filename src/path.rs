use crate::{Coordinate, Cost, NodeID, SearchNode};
use slab::Slab;
use std::collections::VecDeque;

/// The result of a search: every move from the start to the Tile that was close enough.
///
/// The start itself is not part of the Path, the first Node is the first move.
///
/// A Path is consumed step by step with [`next_step`](Path::next_step) (or as an
/// [`Iterator`]) and cannot be rewound. Request a new Path to start over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    steps: VecDeque<SearchNode>,
    destination: Option<Coordinate>,
    cost: Cost,
}

impl Path {
    /// Creates a Path from a sequence of Nodes, ordered from the start to the destination.
    pub fn new(steps: Vec<SearchNode>) -> Path {
        let destination = steps.last().map(SearchNode::location);
        let cost = steps.last().map_or(0.0, SearchNode::cost);
        Path {
            steps: steps.into(),
            destination,
            cost,
        }
    }

    /// Follows the parents of `last` back to the first move and reverses the chain.
    pub(crate) fn from_chain(nodes: &Slab<SearchNode>, last: NodeID) -> Path {
        let mut steps = vec![];
        let mut current = Some(last);
        while let Some(id) = current {
            let node = &nodes[id];
            steps.push(*node);
            current = node.parent;
        }
        steps.reverse();
        Path::new(steps)
    }

    /// Removes and returns the next move, or `None` once the Path is used up.
    pub fn next_step(&mut self) -> Option<SearchNode> {
        self.steps.pop_front()
    }

    /// `true` if there are no moves left
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The number of moves left
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The Tile the Path ends on. Consuming steps does not change the destination.
    ///
    /// `None` if the Path was created empty.
    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    /// The accumulated Cost of the whole Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Iterates over the remaining moves without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.steps.iter()
    }
}

impl Iterator for Path {
    type Item = SearchNode;
    fn next(&mut self) -> Option<SearchNode> {
        self.next_step()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Path {}
impl std::iter::FusedIterator for Path {}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.0}]: ", self.cost)?;
        if self.steps.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.steps[0].location())?;
            for node in self.steps.iter().skip(1) {
                write!(fmt, " -> {}", node.location())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, MovementMode};

    fn walk(x: i32, cost: Cost) -> SearchNode {
        SearchNode::new(
            Coordinate::new(x, 0, 0),
            MovementMode::Walk,
            Direction::East,
            cost,
            0.0,
        )
    }

    #[test]
    fn consume() {
        let mut path = Path::new(vec![walk(1, 100.0), walk(2, 200.0)]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(), 200.0);

        assert_eq!(path.next_step().map(|n| n.location()), Some(Coordinate::new(1, 0, 0)));
        assert_eq!(path.destination(), Some(Coordinate::new(2, 0, 0)));
        assert_eq!(path.next_step().map(|n| n.location()), Some(Coordinate::new(2, 0, 0)));
        assert!(path.is_empty());
        assert_eq!(path.next_step(), None);
        assert_eq!(path.destination(), Some(Coordinate::new(2, 0, 0)));
    }

    #[test]
    fn from_chain() {
        let mut nodes = Slab::new();
        let a = nodes.insert(walk(1, 100.0));
        let b = nodes.insert(walk(2, 200.0).with_parent(Some(a)));
        nodes.insert(walk(7, 700.0));
        let c = nodes.insert(walk(3, 300.0).with_parent(Some(b)));

        let path = Path::from_chain(&nodes, c);
        let xs: Vec<i32> = path.map(|n| n.location().x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![walk(1, 100.0), walk(2, 200.0)]);
        assert_eq!(
            &format!("{}", path),
            "Path[Cost = 200]: (1, 0, 0) -> (2, 0, 0)"
        );
    }

    #[test]
    fn display_empty() {
        let path = Path::new(vec![]);
        assert_eq!(path.destination(), None);
        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
