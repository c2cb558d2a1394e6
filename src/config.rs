/// The estimate used to guide single-goal searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// No estimate at all; the search behaves like Dijkstra's Algorithm.
    None,
    /// Manhattan distance to the goal, multiplied by the cheapest Tile on the Grid.
    ///
    /// Scaling by the cheapest Tile keeps the estimate below the real cost on every Grid, so
    /// the results are identical to [`Heuristic::None`]. On Grids with free (cost `0`) Tiles
    /// the scale is `0` and there is no speedup.
    Manhattan,
}

/// How a search updates Nodes that are already queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontierPolicy {
    /// Lower the priority of the queued entry in place.
    ///
    /// Finding the entry scans the heap, see
    /// [`Frontier::decrease_or_insert`](crate::frontier::Frontier::decrease_or_insert).
    DecreaseKey,
    /// Push a second entry and skip the outdated one once it is extracted.
    ///
    /// Every update is `O(log n)`, but the heap grows with every improvement.
    Lazy,
}

/// Options for configuring the [`QueryScheduler`](crate::QueryScheduler)
///
/// Default options:
/// ```
/// # use grid_shortest_paths::{FrontierPolicy, Heuristic, SolverConfig};
/// assert_eq!(
///     SolverConfig {
///         compress_regions: false,
///         heuristic: Heuristic::Manhattan,
///         frontier: FrontierPolicy::DecreaseKey,
///         parallel: true,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SolverConfig {
    /// `true`: connected areas of free (cost `0`) Tiles are merged into single Nodes before
    /// any search is run. See [`RegionMap`](crate::RegionMap).
    ///
    /// `false` (default): searches run on the Tiles directly.
    ///
    /// Merging costs one pass over the Grid when the scheduler is created, and pays off on
    /// Grids that are dominated by open terrain.
    pub compress_regions: bool,
    /// The estimate used when a search has exactly one goal (defaults to
    /// [`Heuristic::Manhattan`]). Searches for several goals never use a heuristic.
    pub heuristic: Heuristic,
    /// How queued Nodes are updated (defaults to [`FrontierPolicy::DecreaseKey`])
    pub frontier: FrontierPolicy,
    /// `true` (default): searches for different starts run on the rayon thread pool.
    ///
    /// Only has an effect if the `parallel` feature is enabled.
    pub parallel: bool,
}

impl SolverConfig {
    /// an example SolverConfig for plain Dijkstra searches on the Tiles, one after another
    ///
    /// Values:
    /// ```
    /// # use grid_shortest_paths::{FrontierPolicy, Heuristic, SolverConfig};
    /// assert_eq!(
    ///     SolverConfig {
    ///         compress_regions: false,
    ///         heuristic: Heuristic::None,
    ///         frontier: FrontierPolicy::DecreaseKey,
    ///         parallel: false,
    ///     },
    ///     SolverConfig::DIJKSTRA
    /// );
    /// ```
    pub const DIJKSTRA: SolverConfig = SolverConfig {
        compress_regions: false,
        heuristic: Heuristic::None,
        frontier: FrontierPolicy::DecreaseKey,
        parallel: false,
    };
    /// an example SolverConfig for Grids dominated by free Tiles
    ///
    /// Values:
    /// ```
    /// # use grid_shortest_paths::{FrontierPolicy, Heuristic, SolverConfig};
    /// assert_eq!(
    ///     SolverConfig {
    ///         compress_regions: true,
    ///         heuristic: Heuristic::None,
    ///         frontier: FrontierPolicy::Lazy,
    ///         parallel: true,
    ///     },
    ///     SolverConfig::OPEN_TERRAIN
    /// );
    /// ```
    pub const OPEN_TERRAIN: SolverConfig = SolverConfig {
        compress_regions: true,
        heuristic: Heuristic::None,
        frontier: FrontierPolicy::Lazy,
        parallel: true,
    };

    /// Returns a copy with [`compress_regions`](SolverConfig::compress_regions) set
    pub fn with_compression(self, compress_regions: bool) -> SolverConfig {
        SolverConfig {
            compress_regions,
            ..self
        }
    }

    /// Returns a copy with [`heuristic`](SolverConfig::heuristic) set
    pub fn with_heuristic(self, heuristic: Heuristic) -> SolverConfig {
        SolverConfig { heuristic, ..self }
    }

    /// Returns a copy with [`frontier`](SolverConfig::frontier) set
    pub fn with_frontier(self, frontier: FrontierPolicy) -> SolverConfig {
        SolverConfig { frontier, ..self }
    }

    /// Returns a copy with [`parallel`](SolverConfig::parallel) set
    pub fn with_parallel(self, parallel: bool) -> SolverConfig {
        SolverConfig { parallel, ..self }
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            compress_regions: false,
            heuristic: Heuristic::Manhattan,
            frontier: FrontierPolicy::DecreaseKey,
            parallel: true,
        }
    }
}
