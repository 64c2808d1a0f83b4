#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find walkable routes on tile maps.
//!
//! ## Introduction
//! Entities on a tile map move one Tile at a time, in any of the 8 compass directions, either
//! walking a single step or running two steps in the same direction. This crate searches the
//! cheapest sequence of such moves from a start Tile to a target using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
//!
//! The search does not need to reach the target exactly: it stops on the first Tile within an
//! *approach distance* of the target, which is what an entity that wants to talk to an NPC or
//! attack from range needs.
//!
//! The map itself is never handed to the search. Instead, a [`MoveCostProvider`] is asked how
//! expensive each individual move is, which allows the map to be stored in any format.
//!
//! ## Examples
//! ```
//! use tile_pathfinding::prelude::*;
//!
//! // . . . . .
//! // . . . . .
//! // S . # . G
//! let mut map = TileMap::new(Coordinate::new(0, 0, 0), 5, 3);
//! map.block(Coordinate::new(2, 0, 0));
//!
//! let start = Coordinate::new(0, 0, 0);
//! let goal = Coordinate::new(4, 0, 0);
//!
//! let result = AStar::default().find_path(
//!     &map,
//!     start,
//!     goal,
//!     0, // approach distance: end exactly on the goal
//!     &Direction::ALL,
//!     &[MovementMode::Walk, MovementMode::Run],
//! );
//!
//! // the arguments were valid and a Path was found
//! let mut path = result.unwrap().unwrap();
//! assert_eq!(path.destination(), Some(goal));
//!
//! while let Some(step) = path.next_step() {
//!     // move the entity to step.location() using step.mode()
//! #   assert!(step.location() != Coordinate::new(2, 0, 0));
//! }
//! assert!(path.is_empty());
//! ```
//!
//! ### Outcomes
//! A search has three kinds of results:
//! - `Ok(Some(path))`: a [`Path`] to a Tile within the approach distance
//! - `Ok(None)`: there is nothing to walk. Either the target is on another level, the start is
//!     already close enough, or nothing close enough can be reached
//! - `Err(_)`: the arguments were invalid or the [`MoveCostProvider`] failed (see [`SearchError`])
//!
//! ### Timing
//! Any [`Pathfinder`] can be wrapped in [`Timed`] to report how long every search takes, either to
//! the [`log`] crate or to a custom [`SearchLog`].
//!
//! ### Configuration
//! [`SearchConfig`] sets the distance penalties of walking and running and optional limits on
//! how long a single search may run.

/// A shorthand for the types needed to run a search
pub mod prelude {
    pub use crate::{
        AStar, Coordinate, Cost, Direction, MoveCostProvider, MovementMode, Path, Pathfinder,
        SearchConfig, SearchError, SearchNode, TileMap, Timed,
    };
}

mod coordinate;
pub use self::coordinate::{Coordinate, Direction};

mod cost;
pub use self::cost::{Cost, MoveCostProvider, MovementMode, BLOCKED};

mod node;
pub use self::node::SearchNode;
pub(crate) use self::node::NodeID;

mod path;
pub use self::path::Path;

mod error;
pub use self::error::SearchError;

mod search_config;
pub use self::search_config::SearchConfig;

mod pathfinder;
pub use self::pathfinder::Pathfinder;

mod a_star;
pub use self::a_star::AStar;

mod timed;
pub use self::timed::{LogSink, SearchLog, SearchOutcome, SearchRecord, Timed};

mod tile_map;
pub use self::tile_map::TileMap;
