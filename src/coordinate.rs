//! Positions on the map and the 8 compass directions used to move between them.

use std::fmt;

/// A Tile on the map.
///
/// `x` grows to the east, `y` grows to the north and `level` is the floor/plane the Tile is on.
/// All distance metrics ignore `level`: a search never compares Tiles on different levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// the east-west position
    pub x: i32,
    /// the north-south position
    pub y: i32,
    /// the floor/plane
    pub level: i32,
}

impl Coordinate {
    /// Creates a new Coordinate
    pub const fn new(x: i32, y: i32, level: i32) -> Coordinate {
        Coordinate { x, y, level }
    }

    /// `true` if both Coordinates are on the same level
    pub fn same_level(self, other: Coordinate) -> bool {
        self.level == other.level
    }

    /// The number of single steps needed to reach `other` when diagonal moves are allowed.
    ///
    /// Also known as the [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance).
    /// ```
    /// # use tile_pathfinding::Coordinate;
    /// let a = Coordinate::new(3, 1, 0);
    /// let b = Coordinate::new(0, 0, 0);
    /// assert_eq!(a.step_distance(b), 3);
    ///
    /// let far = Coordinate::new(i32::MIN, 0, 0);
    /// assert_eq!(far.step_distance(Coordinate::new(i32::MAX, 0, 0)), u32::MAX);
    /// ```
    pub fn step_distance(self, other: Coordinate) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// The straight-line distance to `other`.
    pub fn far_distance(self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        dx.hypot(dy)
    }

    /// Returns the neighboring Coordinate in `dir`.
    ///
    /// ## Panics
    /// If the neighbor is outside the range of `i32`. See
    /// [`checked_stepped_by`](Coordinate::checked_stepped_by).
    /// ```
    /// # use tile_pathfinding::{Coordinate, Direction};
    /// let pos = Coordinate::new(3, 3, 1);
    /// assert_eq!(pos.stepped_by(Direction::NorthEast), Coordinate::new(4, 4, 1));
    /// ```
    pub fn stepped_by(self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Returns the neighboring Coordinate in `dir`, or `None` if it can't be represented.
    /// ```
    /// # use tile_pathfinding::{Coordinate, Direction};
    /// let edge: Coordinate = (i32::MAX, 0, 0).into();
    /// assert_eq!(edge.checked_stepped_by(Direction::East), None);
    /// assert_eq!(edge.checked_stepped_by(Direction::West), Some((i32::MAX - 1, 0, 0).into()));
    /// ```
    pub fn checked_stepped_by(self, dir: Direction) -> Option<Coordinate> {
        let (dx, dy) = dir.delta();
        self.checked_offset(dx, dy)
    }

    /// Returns the Coordinate moved by `(dx, dy)` on the same level.
    ///
    /// ## Panics
    /// If the result is outside the range of `i32`.
    pub fn offset(self, dx: i32, dy: i32) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy, self.level)
    }

    /// Returns the Coordinate moved by `(dx, dy)`, or `None` on overflow.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.level,
        ))
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, level): (i32, i32, i32)) -> Coordinate {
        Coordinate::new(x, y, level)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {}, {})", self.x, self.y, self.level)
    }
}

/// One of the 8 compass directions.
///
/// ```no_code
/// NW  N  NE
///   \ | /
/// W - o - E
///   / | \
/// SW  S  SE
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +y
    North = 0,
    /// +x, +y
    NorthEast = 1,
    /// +x
    East = 2,
    /// +x, -y
    SouthEast = 3,
    /// -y
    South = 4,
    /// -x, -y
    SouthWest = 5,
    /// -x
    West = 6,
    /// -x, +y
    NorthWest = 7,
}
use self::Direction::*;

const UNIT_CIRCLE: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Direction {
    /// All 8 directions, clockwise starting at North
    pub const ALL: [Direction; 8] = [
        North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];
    /// The 4 cardinal directions
    pub const ORTHOGONAL: [Direction; 4] = [North, East, South, West];
    /// The 4 diagonal directions
    pub const DIAGONAL: [Direction; 4] = [NorthEast, SouthEast, SouthWest, NorthWest];

    /// Iterates over [`Direction::ALL`]
    pub fn all() -> impl Iterator<Item = Direction> {
        Self::ALL.iter().copied()
    }

    /// The change in `(x, y)` when taking a single step in this direction
    pub fn delta(self) -> (i32, i32) {
        UNIT_CIRCLE[self.num()]
    }

    /// `true` for NorthEast, SouthEast, SouthWest and NorthWest
    pub fn is_diagonal(self) -> bool {
        self.num() % 2 == 1
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.num() + 4) % 8]
    }

    /// Splits a diagonal into its two orthogonal components, `(horizontal, vertical)`.
    ///
    /// Returns `None` for orthogonal directions.
    pub fn components(self) -> Option<(Direction, Direction)> {
        match self {
            NorthEast => Some((East, North)),
            SouthEast => Some((East, South)),
            SouthWest => Some((West, South)),
            NorthWest => Some((West, North)),
            _ => None,
        }
    }

    fn num(self) -> usize {
        self as usize
    }
}
