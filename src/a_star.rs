use crate::node::OpenEntry;
use crate::{
    Coordinate, Cost, Direction, MoveCostProvider, MovementMode, NodeID, Path, Pathfinder,
    SearchConfig, SearchError, SearchNode,
};

use hashbrown::HashMap;
use slab::Slab;
use std::collections::BinaryHeap;
use std::time::Instant;

const SQRT_2: Cost = std::f64::consts::SQRT_2;

/// Searches a tile map using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The map is never accessed directly, the search only asks a [`MoveCostProvider`] how expensive
/// each move is. Every move costs what the Provider says plus a fixed distance penalty
/// ([`walk_unit`](SearchConfig::walk_unit) or [`run_unit`](SearchConfig::run_unit), times
/// `sqrt(2)` for diagonals) plus the Provider's [latency
/// penalty](MoveCostProvider::latency_penalty).
///
/// An `AStar` holds no state between searches and can be shared between threads.
///
/// ## Examples
/// Basic usage:
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let mut map = TileMap::new(Coordinate::new(0, 0, 0), 5, 5);
/// map.block(Coordinate::new(2, 0, 0));
///
/// let mut path = AStar::default()
///     .find_path(
///         &map,
///         Coordinate::new(0, 0, 0), // start
///         Coordinate::new(4, 0, 0), // end
///         0,                        // approach distance
///         &Direction::ALL,
///         &[MovementMode::Walk],
///     )
///     .unwrap() // the arguments are valid
///     .unwrap(); // a Path was found
///
/// assert_eq!(path.destination(), Some(Coordinate::new(4, 0, 0)));
/// assert_eq!(path.next_step().unwrap().location(), Coordinate::new(1, 1, 0));
/// ```
///
/// Stopping next to the target:
/// ```
/// # use tile_pathfinding::prelude::*;
/// let map = TileMap::new(Coordinate::new(0, 0, 0), 10, 10);
///
/// let path = AStar::default()
///     .find_path(
///         &map,
///         Coordinate::new(0, 0, 0),
///         Coordinate::new(8, 0, 0),
///         2, // anywhere within 2 steps of the end is good enough
///         &Direction::ORTHOGONAL,
///         &[MovementMode::Walk],
///     )
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(path.destination(), Some(Coordinate::new(6, 0, 0)));
/// assert_eq!(path.len(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    /// Creates a new search with the given config
    pub fn new(config: SearchConfig) -> AStar {
        AStar { config }
    }

    /// The config of this search
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The octile distance between `from` and `target`, in units of
    /// [`walk_unit`](SearchConfig::walk_unit).
    /// ```
    /// # use tile_pathfinding::{AStar, Coordinate};
    /// let a_star = AStar::default();
    /// let h = a_star.heuristic(Coordinate::new(0, 0, 0), Coordinate::new(3, 1, 0));
    /// assert!((h - (200.0 + 100.0 * 2f64.sqrt())).abs() < 1e-9);
    /// ```
    pub fn heuristic(&self, from: Coordinate, target: Coordinate) -> Cost {
        let dx = target.x.abs_diff(from.x);
        let dy = target.y.abs_diff(from.y);
        let (d_max, d_min) = (dx.max(dy), dx.min(dy));
        (f64::from(d_max - d_min) + f64::from(d_min) * SQRT_2) * self.config.walk_unit
    }

    /// Searches Paths from `start` to each of `goals`.
    ///
    /// Returns one result per goal, in the same order. With the `parallel` feature (default) the
    /// goals are searched on the rayon thread pool.
    pub fn find_paths<P>(
        &self,
        provider: &P,
        start: Coordinate,
        goals: &[Coordinate],
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Vec<Result<Option<Path>, SearchError<P::Error>>>
    where
        P: MoveCostProvider + Sync + ?Sized,
        P::Error: Send,
    {
        let search = |&goal: &Coordinate| {
            self.find_path(provider, start, goal, approach_distance, directions, modes)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            goals.par_iter().map(search).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            goals.iter().map(search).collect()
        }
    }

    /// Finds the goal that is the cheapest to reach from `start`, together with the Path to it.
    ///
    /// Returns `Ok(None)` if none of the goals can be reached. The first error (in the order of
    /// `goals`) is returned if any search fails.
    ///
    /// ## Examples
    /// ```
    /// # use tile_pathfinding::prelude::*;
    /// let map = TileMap::new(Coordinate::new(0, 0, 0), 10, 10);
    /// let goals = [Coordinate::new(7, 0, 0), Coordinate::new(0, 3, 0)];
    ///
    /// let (goal, path) = AStar::default()
    ///     .find_closest_goal(
    ///         &map,
    ///         Coordinate::new(0, 0, 0),
    ///         &goals,
    ///         0,
    ///         &Direction::ORTHOGONAL,
    ///         &[MovementMode::Walk],
    ///     )
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(goal, goals[1]);
    /// assert_eq!(path.cost(), 300.0);
    /// ```
    pub fn find_closest_goal<P>(
        &self,
        provider: &P,
        start: Coordinate,
        goals: &[Coordinate],
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Result<Option<(Coordinate, Path)>, SearchError<P::Error>>
    where
        P: MoveCostProvider + Sync + ?Sized,
        P::Error: Send,
    {
        let results = self.find_paths(provider, start, goals, approach_distance, directions, modes);

        let mut closest: Option<(Coordinate, Path)> = None;
        for (&goal, result) in goals.iter().zip(results) {
            if let Some(path) = result? {
                if closest.as_ref().map_or(true, |(_, best)| path.cost() < best.cost()) {
                    closest = Some((goal, path));
                }
            }
        }
        Ok(closest)
    }

    fn out_of_budget(&self, expansions: usize, timer: Instant) -> bool {
        self.config.max_expansions.is_some_and(|max| expansions >= max)
            || self.config.time_budget.is_some_and(|budget| timer.elapsed() >= budget)
    }
}

impl Pathfinder for AStar {
    /// See [`Pathfinder::find_path`].
    ///
    /// Tiles are expanded in order of their predicted Cost, and the first Tile within
    /// `approach_distance` of `end` ends the search. Tiles with equal predicted Cost are
    /// expanded in the order they were discovered.
    fn find_path<P: MoveCostProvider + ?Sized>(
        &self,
        provider: &P,
        start: Coordinate,
        end: Coordinate,
        approach_distance: i32,
        directions: &[Direction],
        modes: &[MovementMode],
    ) -> Result<Option<Path>, SearchError<P::Error>> {
        if start == end {
            return Err(SearchError::StartIsEnd);
        }
        if approach_distance < 0 {
            return Err(SearchError::NegativeApproachDistance(approach_distance));
        }
        if modes.is_empty() {
            return Err(SearchError::NoMovementModes);
        }
        if !start.same_level(end) {
            log::trace!("no path from {} to {}: different levels", start, end);
            return Ok(None);
        }
        let reach = approach_distance.unsigned_abs();
        if start.step_distance(end) <= reach {
            log::trace!(
                "no path from {} to {}: already within {} steps",
                start,
                end,
                reach
            );
            return Ok(None);
        }

        let timer = Instant::now();
        let mut search = Search::new(self, provider, end, directions, modes);
        let mut best_known: HashMap<Coordinate, NodeID> =
            HashMap::with_capacity(self.config.size_hint);

        search.expand(start, 0.0, None).map_err(SearchError::Provider)?;
        let mut expansions = 0;

        while let Some(OpenEntry { node: current_id, .. }) = search.open.pop() {
            let current = &search.nodes[current_id];
            let (location, cost) = (current.location(), current.cost());

            if location.step_distance(end) <= reach {
                let path = Path::from_chain(&search.nodes, current_id);
                log::trace!(
                    "path from {} to {}: {} steps, cost {:.1}, {} expansions, {} nodes in {:?}",
                    start,
                    end,
                    path.len(),
                    path.cost(),
                    expansions,
                    search.nodes.len(),
                    timer.elapsed()
                );
                return Ok(Some(path));
            }

            if let Some(&prev_id) = best_known.get(&location) {
                if search.nodes[prev_id].cost() <= cost {
                    continue;
                }
            }

            if self.out_of_budget(expansions, timer) {
                log::debug!(
                    "search from {} to {} gave up after {} expansions in {:?}",
                    start,
                    end,
                    expansions,
                    timer.elapsed()
                );
                return Ok(None);
            }

            best_known.insert(location, current_id);
            search
                .expand(location, cost, Some(current_id))
                .map_err(SearchError::Provider)?;
            expansions += 1;
        }

        log::trace!(
            "no path from {} to {}: exhausted after {} expansions in {:?}",
            start,
            end,
            expansions,
            timer.elapsed()
        );
        Ok(None)
    }
}

/// The state of a single call to `find_path`
struct Search<'a, P: ?Sized> {
    a_star: &'a AStar,
    provider: &'a P,
    end: Coordinate,
    directions: &'a [Direction],
    walk: bool,
    run: bool,
    nodes: Slab<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl<'a, P: MoveCostProvider + ?Sized> Search<'a, P> {
    fn new(
        a_star: &'a AStar,
        provider: &'a P,
        end: Coordinate,
        directions: &'a [Direction],
        modes: &[MovementMode],
    ) -> Self {
        let size_hint = a_star.config.size_hint;
        Search {
            a_star,
            provider,
            end,
            directions,
            walk: modes.contains(&MovementMode::Walk),
            run: modes.contains(&MovementMode::Run),
            nodes: Slab::with_capacity(size_hint),
            open: BinaryHeap::with_capacity(size_hint / 2),
            next_seq: 0,
        }
    }

    /// Pushes every move from `origin` into the open set.
    fn expand(
        &mut self,
        origin: Coordinate,
        cost: Cost,
        parent: Option<NodeID>,
    ) -> Result<(), P::Error> {
        let latency = self.provider.latency_penalty();
        let config = self.a_star.config;

        for &dir in self.directions {
            let scale = if dir.is_diagonal() { SQRT_2 } else { 1.0 };
            // moves off the edge of the Coordinate range are never queried
            let walk_to = match origin.checked_stepped_by(dir) {
                Some(walk_to) => walk_to,
                None => continue,
            };

            if self.walk {
                match self.provider.cost(origin, MovementMode::Walk, dir)? {
                    Some(move_cost) => {
                        let total = cost + move_cost + config.walk_unit * scale + latency;
                        self.push(walk_to, MovementMode::Walk, dir, total, parent);
                    }
                    // the Tile can't be entered, so it can't be run over either
                    None => continue,
                }
            }

            // never run past the end
            if !self.run || walk_to == self.end {
                continue;
            }
            let run_to = match walk_to.checked_stepped_by(dir) {
                Some(run_to) => run_to,
                None => continue,
            };
            if let Some(move_cost) = self.provider.cost(origin, MovementMode::Run, dir)? {
                let total = cost + move_cost + config.run_unit * scale + latency;
                self.push(run_to, MovementMode::Run, dir, total, parent);
            }
        }
        Ok(())
    }

    fn push(
        &mut self,
        location: Coordinate,
        mode: MovementMode,
        direction: Direction,
        cost: Cost,
        parent: Option<NodeID>,
    ) {
        let heuristic = self.a_star.heuristic(location, self.end);
        let node = SearchNode::new(location, mode, direction, cost, heuristic).with_parent(parent);
        let predicted = node.predicted_cost();
        let id = self.nodes.insert(node);
        self.open.push(OpenEntry {
            predicted,
            seq: self.next_seq,
            node: id,
        });
        self.next_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileMap;
    use std::time::Duration;

    fn open_map() -> TileMap {
        TileMap::new(Coordinate::new(-10, -10, 0), 30, 30)
    }

    #[test]
    fn heuristic() {
        let a_star = AStar::default();
        let origin = Coordinate::new(0, 0, 0);
        assert_eq!(a_star.heuristic(origin, Coordinate::new(4, 0, 0)), 400.0);
        let diagonal = a_star.heuristic(origin, Coordinate::new(-3, 3, 0));
        assert!((diagonal - 300.0 * SQRT_2).abs() < 1e-9);
        assert_eq!(a_star.heuristic(origin, origin), 0.0);

        let scaled = AStar::new(SearchConfig {
            walk_unit: 10.0,
            ..Default::default()
        });
        assert_eq!(scaled.heuristic(origin, Coordinate::new(0, -5, 0)), 50.0);
    }

    #[test]
    fn run_stops_at_end() {
        let path = AStar::default()
            .find_path(
                &open_map(),
                Coordinate::new(0, 0, 0),
                Coordinate::new(3, 0, 0),
                0,
                &Direction::ORTHOGONAL,
                &MovementMode::ALL,
            )
            .unwrap()
            .unwrap();

        let steps: Vec<_> = path.iter().map(|n| (n.location(), n.mode())).collect();
        assert_eq!(
            steps,
            vec![
                (Coordinate::new(2, 0, 0), MovementMode::Run),
                (Coordinate::new(3, 0, 0), MovementMode::Walk),
            ]
        );
        assert_eq!(path.cost(), 250.0);
    }

    #[test]
    fn run_only() {
        let path = AStar::default()
            .find_path(
                &open_map(),
                Coordinate::new(0, 0, 0),
                Coordinate::new(4, 0, 0),
                0,
                &Direction::ORTHOGONAL,
                &[MovementMode::Run],
            )
            .unwrap()
            .unwrap();

        assert_eq!(path.len(), 2);
        assert!(path.iter().all(|n| n.mode() == MovementMode::Run));
        assert_eq!(path.cost(), 300.0);
    }

    #[test]
    fn blocked_walk_prevents_run() {
        use std::cell::RefCell;

        let queries = RefCell::new(vec![]);
        let provider = |origin: Coordinate, mode: MovementMode, dir: Direction| {
            queries.borrow_mut().push((origin, mode, dir));
            if dir == Direction::East && mode == MovementMode::Walk {
                None
            } else {
                Some(0.0)
            }
        };

        let result = AStar::default()
            .find_path(
                &provider,
                Coordinate::new(0, 0, 0),
                Coordinate::new(5, 0, 0),
                0,
                &[Direction::East],
                &MovementMode::ALL,
            )
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(
            queries.into_inner(),
            vec![(Coordinate::new(0, 0, 0), MovementMode::Walk, Direction::East)]
        );
    }

    #[test]
    fn expansion_budget() {
        let mut map = open_map();
        // wall off the target
        for dir in Direction::all() {
            map.block(Coordinate::new(15, 15, 0).stepped_by(dir));
        }

        let start = Coordinate::new(-5, -5, 0);
        let end = Coordinate::new(15, 15, 0);

        let bounded = AStar::new(SearchConfig::with_max_expansions(10));
        let result = bounded.find_path(&map, start, end, 0, &Direction::ALL, &[MovementMode::Walk]);
        assert_eq!(result, Ok(None));

        let unbounded = AStar::default();
        let result =
            unbounded.find_path(&map, start, end, 0, &Direction::ALL, &[MovementMode::Walk]);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn time_budget() {
        let mut map = open_map();
        for dir in Direction::all() {
            map.block(Coordinate::new(15, 15, 0).stepped_by(dir));
        }
        let start = Coordinate::new(-5, -5, 0);
        let end = Coordinate::new(15, 15, 0);

        let out_of_time = AStar::new(SearchConfig {
            time_budget: Some(Duration::ZERO),
            ..Default::default()
        });
        let result =
            out_of_time.find_path(&map, start, end, 0, &Direction::ALL, &MovementMode::ALL);
        assert_eq!(result, Ok(None));

        // a reachable target is found well within the per-frame limits
        let interactive = AStar::new(SearchConfig::INTERACTIVE);
        let path = interactive
            .find_path(&map, start, end, 2, &Direction::ALL, &MovementMode::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(path.destination().unwrap().step_distance(end), 2);
    }

    #[test]
    fn edges_of_the_range() {
        let open = |_: Coordinate, _: MovementMode, _: Direction| Some(0.0);
        let blocked = |_: Coordinate, _: MovementMode, _: Direction| -> Option<Cost> { None };

        let start = Coordinate::new(i32::MAX, i32::MAX, 0);
        let end = Coordinate::new(i32::MAX - 3, i32::MAX, 0);
        let path = AStar::default()
            .find_path(&open, start, end, 0, &Direction::ALL, &MovementMode::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(path.destination(), Some(end));
        assert_eq!(path.cost(), 150.0 + 100.0);

        let start = Coordinate::new(i32::MIN, i32::MIN, 0);
        let end = Coordinate::new(1, 0, 0);
        let a_star = AStar::default();
        let result = a_star.find_path(&blocked, start, end, 0, &Direction::ALL, &MovementMode::ALL);
        assert_eq!(result, Ok(None));
        assert!(a_star.heuristic(start, end).is_finite());
    }

    #[test]
    fn no_directions() {
        let result = AStar::default().find_path(
            &open_map(),
            Coordinate::new(0, 0, 0),
            Coordinate::new(4, 0, 0),
            0,
            &[],
            &[MovementMode::Walk],
        );
        assert_eq!(result, Ok(None));
    }
}
