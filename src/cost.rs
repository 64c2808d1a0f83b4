//! The contract between the search and the world it searches in.

use crate::{Coordinate, Direction};
use std::convert::Infallible;
use std::fmt;

/// a Type to represent the Cost of a move or of a whole Path
pub type Cost = f64;

/// How an entity moves from one Tile to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementMode {
    /// a single step to an adjacent Tile
    Walk,
    /// two steps in the same direction in one move, passing over the adjacent Tile
    Run,
}

impl MovementMode {
    /// Both modes
    pub const ALL: [MovementMode; 2] = [MovementMode::Walk, MovementMode::Run];

    /// The number of Tiles covered by a single move
    pub fn steps(self) -> i32 {
        match self {
            MovementMode::Walk => 1,
            MovementMode::Run => 2,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MovementMode::Walk => write!(fmt, "walk"),
            MovementMode::Run => write!(fmt, "run"),
        }
    }
}

/// The Cost returned by a [`MoveCostProvider`] for a move that cannot be made.
pub const BLOCKED: Option<Cost> = None;

/// Answers how expensive a single move is.
///
/// The search never looks at the map itself. Everything it knows about the world comes from
/// this Trait, so a Provider is free to store the map in any format, as long as it can answer
/// queries for a specific Tile when asked.
///
/// Queries only take `&self`: the search does not mutate anything a Provider reads, and a
/// Provider that is [`Sync`] can be shared between concurrent searches.
///
/// Any `Fn(Coordinate, MovementMode, Direction) -> Option<Cost>` is a Provider that never fails:
/// ```
/// # use tile_pathfinding::prelude::*;
/// let open_field = |_: Coordinate, _: MovementMode, _: Direction| Some(0.0);
///
/// let path = AStar::default().find_path(
///     &open_field,
///     Coordinate::new(0, 0, 0),
///     Coordinate::new(3, 0, 0),
///     0,
///     &Direction::ORTHOGONAL,
///     &[MovementMode::Walk],
/// );
/// assert_eq!(path.unwrap().unwrap().len(), 3);
/// ```
pub trait MoveCostProvider {
    /// The error of a failed query. Use [`Infallible`] if queries cannot fail.
    type Error;

    /// The Cost of moving from `origin` in `direction` using `mode`.
    ///
    /// For [`MovementMode::Run`] this is the Cost of the whole move over both Tiles.
    ///
    /// Returns [`BLOCKED`] (`None`) if the move is impossible. Costs must not be negative.
    fn cost(
        &self,
        origin: Coordinate,
        mode: MovementMode,
        direction: Direction,
    ) -> Result<Option<Cost>, Self::Error>;

    /// An additional Cost added to every move, sampled from the current network latency.
    ///
    /// Biases the search towards Paths with fewer moves on a laggy connection.
    /// Defaults to `0`.
    ///
    /// The penalty is read once per expanded Tile. If it changes while a search runs, the
    /// resulting Path is not guaranteed to be the cheapest one.
    fn latency_penalty(&self) -> Cost {
        0.0
    }
}

impl<F> MoveCostProvider for F
where
    F: Fn(Coordinate, MovementMode, Direction) -> Option<Cost>,
{
    type Error = Infallible;

    fn cost(
        &self,
        origin: Coordinate,
        mode: MovementMode,
        direction: Direction,
    ) -> Result<Option<Cost>, Infallible> {
        Ok(self(origin, mode, direction))
    }
}
