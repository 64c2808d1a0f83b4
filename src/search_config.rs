use crate::Cost;
use std::time::Duration;

/// Options for configuring an [`AStar`](crate::AStar) search
///
/// Default options:
/// ```
/// # use tile_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         walk_unit: 100.0,
///         run_unit: 150.0,
///         max_expansions: None,
///         time_budget: None,
///         size_hint: 256,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// The Cost of walking a single orthogonal step, on top of what the
    /// [`MoveCostProvider`](crate::MoveCostProvider) charges (defaults to `100`).
    /// Diagonal steps cost `walk_unit * sqrt(2)`.
    ///
    /// The heuristic is measured in the same unit.
    pub walk_unit: Cost,
    /// The same as `walk_unit`, but for a single Run move over two Tiles (defaults to `150`).
    pub run_unit: Cost,
    /// `None` (default): the search runs until it reaches the target or runs out of Tiles.
    ///
    /// `Some(n)`: the search gives up and returns no Path after expanding `n` Nodes.
    ///
    /// An unreachable target in a large open area can otherwise expand every reachable Tile.
    pub max_expansions: Option<usize>,
    /// `None` (default): no time limit.
    ///
    /// `Some(t)`: the search gives up and returns no Path once it ran for `t` or longer.
    pub time_budget: Option<Duration>,
    /// How many Nodes to reserve memory for up front (defaults to `256`)
    pub size_hint: usize,
}

impl SearchConfig {
    /// The default: no limits on search effort
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        walk_unit: 100.0,
        run_unit: 150.0,
        max_expansions: None,
        time_budget: None,
        size_hint: 256,
    };

    /// an example SearchConfig for searches that run once per frame or game tick
    ///
    /// Values:
    /// ```
    /// # use tile_pathfinding::SearchConfig;
    /// # use std::time::Duration;
    /// assert_eq!(
    ///     SearchConfig {
    ///         walk_unit: 100.0,
    ///         run_unit: 150.0,
    ///         max_expansions: Some(20_000),
    ///         time_budget: Some(Duration::from_millis(20)),
    ///         size_hint: 1024,
    ///     },
    ///     SearchConfig::INTERACTIVE
    /// );
    /// ```
    pub const INTERACTIVE: SearchConfig = SearchConfig {
        walk_unit: 100.0,
        run_unit: 150.0,
        max_expansions: Some(20_000),
        time_budget: Some(Duration::from_millis(20)),
        size_hint: 1024,
    };

    /// Creates the default config with a limit on expanded Nodes
    /// ```
    /// # use tile_pathfinding::SearchConfig;
    /// let config = SearchConfig::with_max_expansions(500);
    /// assert_eq!(config.max_expansions, Some(500));
    /// assert_eq!(config.time_budget, None);
    /// ```
    pub fn with_max_expansions(max_expansions: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(max_expansions),
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
