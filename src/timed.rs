//! Measuring how long searches take.

use crate::{
    Coordinate, Cost, Direction, MoveCostProvider, MovementMode, Path, Pathfinder, SearchError,
};
use std::fmt;
use std::time::{Duration, Instant};

/// What a single search ended with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchOutcome {
    /// a Path was found
    Found {
        /// where the Path ends
        destination: Option<Coordinate>,
        /// the number of moves in the Path
        steps: usize,
        /// the accumulated Cost of the Path
        cost: Cost,
    },
    /// the search ran but produced no Path
    NotFound,
    /// the search returned an error
    Failed {
        /// `true` if the arguments were invalid, `false` if the Provider failed
        precondition: bool,
    },
}

impl SearchOutcome {
    fn of<E>(result: &Result<Option<Path>, SearchError<E>>) -> SearchOutcome {
        match result {
            Ok(Some(path)) => SearchOutcome::Found {
                destination: path.destination(),
                steps: path.len(),
                cost: path.cost(),
            },
            Ok(None) => SearchOutcome::NotFound,
            Err(e) => SearchOutcome::Failed {
                precondition: e.is_precondition(),
            },
        }
    }
}

/// The record emitted by [`Timed`] for every search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    /// the start of the search
    pub start: Coordinate,
    /// the target of the search
    pub end: Coordinate,
    /// the approach distance of the search
    pub approach_distance: i32,
    /// the wall-clock time the search took
    pub elapsed: Duration,
    /// the result of the search
    pub outcome: SearchOutcome,
}

impl fmt::Display for SearchRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "path {} -> {} (approach {}) took {:?}: ",
            self.start, self.end, self.approach_distance, self.elapsed
        )?;
        match &self.outcome {
            SearchOutcome::Found {
                destination: Some(dest),
                steps,
                cost,
            } => write!(fmt, "{} steps to {}, cost {:.1}", steps, dest, cost),
            SearchOutcome::Found { .. } => write!(fmt, "empty path"),
            SearchOutcome::NotFound => write!(fmt, "no path"),
            SearchOutcome::Failed { precondition: true } => write!(fmt, "invalid arguments"),
            SearchOutcome::Failed { precondition: false } => write!(fmt, "move cost query failed"),
        }
    }
}

/// Receives the [`SearchRecord`]s of a [`Timed`] search.
pub trait SearchLog {
    /// Called once after every search
    fn record(&self, record: &SearchRecord);
}

impl<L: SearchLog + ?Sized> SearchLog for &L {
    fn record(&self, record: &SearchRecord) {
        (**self).record(record)
    }
}

/// A [`SearchLog`] writing every record to the [`log`] facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogSink {
    level: log::Level,
}

impl LogSink {
    /// Creates a sink logging at `level`
    pub fn new(level: log::Level) -> LogSink {
        LogSink { level }
    }
}

impl Default for LogSink {
    fn default() -> LogSink {
        LogSink::new(log::Level::Debug)
    }
}

impl SearchLog for LogSink {
    fn record(&self, record: &SearchRecord) {
        log::log!(target: "tile_pathfinding::timed", self.level, "{}", record);
    }
}

/// Wraps a [`Pathfinder`] and reports how long each search takes.
///
/// The wrapped search is called with the exact same arguments and its result (including errors)
/// is returned untouched. The only effect is one [`SearchRecord`] per call, sent to the sink.
///
/// ## Examples
/// ```
/// # use tile_pathfinding::prelude::*;
/// let map = TileMap::new(Coordinate::new(0, 0, 0), 10, 10);
///
/// // logs through the `log` crate at debug level
/// let timed = Timed::new(AStar::default());
///
/// let path = timed.find_path(
///     &map,
///     Coordinate::new(0, 0, 0),
///     Coordinate::new(4, 0, 0),
///     0,
///     &Direction::ORTHOGONAL,
///     &[MovementMode::Walk],
/// );
/// assert_eq!(path.unwrap().unwrap().cost(), 400.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Timed<F, S = LogSink> {
    inner: F,
    sink: S,
}

impl<F> Timed<F> {
    /// Wraps `inner`, logging through [`LogSink::default`]
    pub fn new(inner: F) -> Timed<F> {
        Timed::with_sink(inner, LogSink::default())
    }
}

impl<F, S> Timed<F, S> {
    /// Wraps `inner`, sending records to `sink`
    pub fn with_sink(inner: F, sink: S) -> Timed<F, S> {
        Timed { inner, sink }
    }

    /// The wrapped search
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// The sink receiving the records
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwraps the search
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: Pathfinder, S: SearchLog> Pathfinder for Timed<F, S> {
    fn find_path<P: MoveCostProvider + ?Sized>(
        &self,
        provider: &P,
        start: Coordinate,
        end: Coordinate,
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Result<Option<Path>, SearchError<P::Error>> {
        let timer = Instant::now();
        let result = self
            .inner
            .find_path(provider, start, end, approach_distance, directions, modes);
        let elapsed = timer.elapsed();

        self.sink.record(&SearchRecord {
            start,
            end,
            approach_distance,
            elapsed,
            outcome: SearchOutcome::of(&result),
        });
        result
    }
}
