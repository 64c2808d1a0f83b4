use crate::{Coordinate, Cost, Direction, MoveCostProvider, MovementMode};
use std::convert::Infallible;

/// A rectangular area of a single level, stored as a dense grid of Tile Costs.
///
/// Every Tile is either open with a Cost for entering it (`0` by default) or blocked.
/// Tiles outside the area or on another level are blocked.
///
/// Moves follow the usual tile map rules:
/// - a diagonal step is only possible if both orthogonal Tiles next to it are open
/// - a Run passes over the adjacent Tile, so both Tiles have to be enterable, and it costs
///     the Cost of both Tiles
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    origin: Coordinate,
    width: usize,
    height: usize,
    tiles: Vec<Option<Cost>>,
    latency_penalty: Cost,
}

impl TileMap {
    /// Creates an open area of `width * height` Tiles with `origin` as its south-west corner.
    pub fn new(origin: Coordinate, width: usize, height: usize) -> TileMap {
        TileMap {
            origin,
            width,
            height,
            tiles: vec![Some(0.0); width * height],
            latency_penalty: 0.0,
        }
    }

    /// The size of the area as `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `true` if `pos` is part of the area
    pub fn contains(&self, pos: Coordinate) -> bool {
        self.index(pos).is_some()
    }

    /// The Cost of entering `pos`, or `None` if it is blocked or outside of the area.
    pub fn tile_cost(&self, pos: Coordinate) -> Option<Cost> {
        self.index(pos).and_then(|i| self.tiles[i])
    }

    /// Sets the Cost of entering `pos`. `None` blocks the Tile.
    ///
    /// Returns `false` if `pos` is outside of the area.
    pub fn set_tile_cost(&mut self, pos: Coordinate, cost: Option<Cost>) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i] = cost;
                true
            }
            None => false,
        }
    }

    /// Blocks `pos`. Returns `false` if `pos` is outside of the area.
    pub fn block(&mut self, pos: Coordinate) -> bool {
        self.set_tile_cost(pos, None)
    }

    /// Sets the penalty added to every move, see [`MoveCostProvider::latency_penalty`]
    pub fn set_latency_penalty(&mut self, penalty: Cost) {
        self.latency_penalty = penalty;
    }

    fn index(&self, pos: Coordinate) -> Option<usize> {
        if !pos.same_level(self.origin) {
            return None;
        }
        let x = usize::try_from(i64::from(pos.x) - i64::from(self.origin.x)).ok()?;
        let y = usize::try_from(i64::from(pos.y) - i64::from(self.origin.y)).ok()?;
        if x < self.width && y < self.height {
            Some(x + y * self.width)
        } else {
            None
        }
    }

    /// The Cost of a single step from `from` in `dir`
    fn step_cost(&self, from: Coordinate, dir: Direction) -> Option<Cost> {
        if let Some((horizontal, vertical)) = dir.components() {
            self.tile_cost(from.checked_stepped_by(horizontal)?)?;
            self.tile_cost(from.checked_stepped_by(vertical)?)?;
        }
        self.tile_cost(from.checked_stepped_by(dir)?)
    }
}

impl MoveCostProvider for TileMap {
    type Error = Infallible;

    fn cost(
        &self,
        origin: Coordinate,
        mode: MovementMode,
        direction: Direction,
    ) -> Result<Option<Cost>, Infallible> {
        let first = self.step_cost(origin, direction);
        Ok(match mode {
            MovementMode::Walk => first,
            MovementMode::Run => first.and_then(|first| {
                let second = self.step_cost(origin.checked_stepped_by(direction)?, direction)?;
                Some(first + second)
            }),
        })
    }

    fn latency_penalty(&self) -> Cost {
        self.latency_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::*;
    use crate::MovementMode::*;

    fn map() -> TileMap {
        // . . . .
        // . # . .
        // o . ~ .    o = origin, ~ = Cost 5
        let mut map = TileMap::new(Coordinate::new(10, 20, 1), 4, 3);
        map.block(Coordinate::new(11, 21, 1));
        map.set_tile_cost(Coordinate::new(12, 20, 1), Some(5.0));
        map
    }

    #[test]
    fn bounds() {
        let map = map();
        assert_eq!(map.size(), (4, 3));
        assert!(map.contains(Coordinate::new(10, 20, 1)));
        assert!(map.contains(Coordinate::new(13, 22, 1)));
        assert!(!map.contains(Coordinate::new(14, 22, 1)));
        assert!(!map.contains(Coordinate::new(9, 20, 1)));
        assert!(!map.contains(Coordinate::new(10, 20, 0)));
        assert_eq!(map.tile_cost(Coordinate::new(11, 21, 1)), None);
        assert_eq!(map.tile_cost(Coordinate::new(12, 20, 1)), Some(5.0));

        let mut single = TileMap::new(Coordinate::default(), 1, 1);
        assert!(!single.block(Coordinate::new(1, 0, 0)));
        assert!(single.block(Coordinate::new(0, 0, 0)));
        assert_eq!(single.tile_cost(Coordinate::default()), None);
    }

    #[test]
    fn walk() {
        let map = map();
        let origin = Coordinate::new(10, 20, 1);
        assert_eq!(map.cost(origin, Walk, East), Ok(Some(0.0)));
        assert_eq!(map.cost(origin, Walk, West), Ok(None));
        assert_eq!(map.cost(origin.offset(1, 0), Walk, East), Ok(Some(5.0)));
        // into the wall
        assert_eq!(map.cost(origin, Walk, NorthEast), Ok(None));
        // past the corner of the wall
        assert_eq!(map.cost(origin.offset(0, 1), Walk, SouthEast), Ok(None));
        assert_eq!(map.cost(origin.offset(2, 1), Walk, SouthEast), Ok(Some(0.0)));
    }

    #[test]
    fn run() {
        let map = map();
        let origin = Coordinate::new(10, 20, 1);
        assert_eq!(map.cost(origin, Run, East), Ok(Some(5.0)));
        assert_eq!(map.cost(origin, Run, North), Ok(Some(0.0)));
        // the second Tile is outside
        assert_eq!(map.cost(origin.offset(2, 0), Run, East), Ok(None));
        // over the wall
        assert_eq!(map.cost(origin.offset(1, 0), Run, North), Ok(None));
    }

    #[test]
    fn edges_of_the_range() {
        let corner = Coordinate::new(i32::MAX, i32::MIN, 0);
        let map = TileMap::new(corner.offset(-1, 0), 2, 2);
        assert!(map.contains(corner));
        assert!(!map.contains(Coordinate::new(i32::MIN, 0, 0)));
        assert!(!map.contains(Coordinate::new(i32::MAX, i32::MAX, 0)));

        assert_eq!(map.cost(corner, Walk, East), Ok(None));
        assert_eq!(map.cost(corner, Walk, SouthWest), Ok(None));
        assert_eq!(map.cost(corner, Walk, NorthWest), Ok(Some(0.0)));
        assert_eq!(map.cost(corner.offset(-1, 0), Run, East), Ok(None));
    }

    #[test]
    fn latency() {
        let mut map = map();
        assert_eq!(map.latency_penalty(), 0.0);
        map.set_latency_penalty(40.0);
        assert_eq!(map.latency_penalty(), 40.0);
    }
}
