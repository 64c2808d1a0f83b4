use crate::{Coordinate, Direction, MoveCostProvider, MovementMode, Path, SearchError};

/// Something that can find a [`Path`] between two Tiles.
///
/// Callers should depend on this Trait instead of a concrete search, so that a different
/// heuristic or expansion policy can be swapped in, or the search can be wrapped in
/// [`Timed`](crate::Timed).
pub trait Pathfinder {
    /// Searches a Path from `start` to any Tile within `approach_distance` steps of `end`.
    ///
    /// ## Arguments
    /// - `provider` - the Cost of every move. (See [`MoveCostProvider`])
    /// - `start` - the Tile the search starts on. It is not part of the returned Path.
    /// - `end` - the target Tile
    /// - `approach_distance` - the search ends on the first Tile with a
    ///     [step distance](Coordinate::step_distance) to `end` of at most this value.
    ///     `0` means the Path has to end on `end` itself.
    /// - `directions` - the directions that moves may go in
    /// - `modes` - the allowed movement modes
    ///
    /// ## Returns
    /// - `Ok(Some(path))` on success
    /// - `Ok(None)` if `start` and `end` are on different levels, if `start` is already within
    ///     `approach_distance` or if no Tile within `approach_distance` can be reached
    /// - `Err(_)` if the arguments are invalid (`start == end`, negative `approach_distance`,
    ///     empty `modes`), or if the `provider` failed
    fn find_path<P: MoveCostProvider + ?Sized>(
        &self,
        provider: &P,
        start: Coordinate,
        end: Coordinate,
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Result<Option<Path>, SearchError<P::Error>>;
}

impl<F: Pathfinder + ?Sized> Pathfinder for &F {
    fn find_path<P: MoveCostProvider + ?Sized>(
        &self,
        provider: &P,
        start: Coordinate,
        end: Coordinate,
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Result<Option<Path>, SearchError<P::Error>> {
        (**self).find_path(provider, start, end, approach_distance, directions, modes)
    }
}
