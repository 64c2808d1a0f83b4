use crate::{Coordinate, Cost, Direction, MovementMode};
use std::cmp::Ordering;

/// The Type used to reference a [`SearchNode`] inside the arena of a single search
pub(crate) type NodeID = usize;

/// One state of the search: a Tile and how it was reached.
///
/// Nodes are created while expanding their parent and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    location: Coordinate,
    mode: MovementMode,
    direction: Direction,
    cost: Cost,
    heuristic: Cost,
    pub(crate) parent: Option<NodeID>,
}

impl SearchNode {
    /// Creates a Node without a parent.
    ///
    /// `cost` is the accumulated Cost from the start, `heuristic` the estimated remaining Cost.
    pub fn new(
        location: Coordinate,
        mode: MovementMode,
        direction: Direction,
        cost: Cost,
        heuristic: Cost,
    ) -> SearchNode {
        debug_assert!(cost >= 0.0 && heuristic >= 0.0, "negative Cost in SearchNode");
        SearchNode {
            location,
            mode,
            direction,
            cost,
            heuristic,
            parent: None,
        }
    }

    pub(crate) fn with_parent(mut self, parent: Option<NodeID>) -> SearchNode {
        self.parent = parent;
        self
    }

    /// The Tile this Node is on
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// The mode of the move that reached this Node
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    /// The direction of the move that reached this Node
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The accumulated Cost from the start ("g")
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The estimated Cost to the target ("h")
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// `cost + heuristic` ("f"), the key of the open set
    pub fn predicted_cost(&self) -> Cost {
        self.cost + self.heuristic
    }

    /// The Tile this Node was reached from, derived from the move that reached it
    pub fn origin(&self) -> Coordinate {
        let (dx, dy) = self.direction.delta();
        let steps = self.mode.steps();
        self.location.offset(-dx * steps, -dy * steps)
    }
}

/// An entry of the open set.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the lowest predicted Cost is the
/// greatest element. Equal Costs are ordered by `seq`, first inserted first. Two entries are
/// only equal if they share `seq`, so no Node is ever treated as a duplicate of another.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub predicted: Cost,
    pub seq: u64,
    pub node: NodeID,
}

impl PartialEq for OpenEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for OpenEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.predicted
            .total_cmp(&self.predicted)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn equal_costs_are_kept() {
        let mut open = BinaryHeap::new();
        for seq in 0..4 {
            open.push(OpenEntry {
                predicted: 500.0,
                seq,
                node: seq as NodeID,
            });
        }
        open.push(OpenEntry {
            predicted: 300.0,
            seq: 4,
            node: 4,
        });

        let order: Vec<NodeID> = std::iter::from_fn(|| open.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn origin() {
        let node = SearchNode::new(
            Coordinate::new(4, 4, 0),
            MovementMode::Run,
            Direction::NorthEast,
            282.0,
            0.0,
        );
        assert_eq!(node.origin(), Coordinate::new(2, 2, 0));
        assert_eq!(node.predicted_cost(), 282.0);
        assert_eq!(node.parent, None);
    }
}
