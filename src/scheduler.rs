use crate::search::{Relaxer, SearchSpace, SearchStats};
use crate::{Cost, Error, GridGraph, Path, Point, RegionMap, Result, SolverConfig};

use hashbrown::HashMap;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The answer to a single query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Answer {
    /// the cost of the cheapest Path, including the cost of the start Tile
    Cost(Cost),
    /// there is no Path between the two Points.
    ///
    /// This is also the answer if the start or the finish is a wall, even when they are the
    /// same Point. A Tile with cost [`Cost::MAX`] is always a wall. Paths whose cost would
    /// exceed [`Cost::MAX`] count as missing.
    Unreachable,
}

impl Answer {
    /// The cost, or `None` if unreachable
    pub fn cost(self) -> Option<Cost> {
        match self {
            Answer::Cost(cost) => Some(cost),
            Answer::Unreachable => None,
        }
    }

    /// `true` if there is a Path
    pub fn is_reachable(self) -> bool {
        matches!(self, Answer::Cost(_))
    }
}

impl From<Option<Cost>> for Answer {
    fn from(cost: Option<Cost>) -> Answer {
        cost.map_or(Answer::Unreachable, Answer::Cost)
    }
}

/// All queries of a batch that share the same start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryGroup<Id> {
    /// the shared start
    pub start: Id,
    /// the distinct finishes, sorted
    pub finishes: Vec<Id>,
}

/// Collects queries into one [`QueryGroup`] per distinct start.
///
/// The groups are sorted by start.
pub fn group_queries<Id, I>(queries: I) -> Vec<QueryGroup<Id>>
where
    Id: Copy + Ord + Hash,
    I: IntoIterator<Item = (Id, Id)>,
{
    let mut by_start: HashMap<Id, Vec<Id>> = HashMap::new();
    for (start, finish) in queries {
        by_start.entry(start).or_default().push(finish);
    }
    let mut groups: Vec<QueryGroup<Id>> = by_start
        .into_iter()
        .map(|(start, mut finishes)| {
            finishes.sort_unstable();
            finishes.dedup();
            QueryGroup { start, finishes }
        })
        .collect();
    groups.sort_unstable_by_key(|group| group.start);
    groups
}

/// Answers batches of cost queries on a [`GridGraph`].
///
/// Queries are grouped by their start, and a single search is run for every distinct start.
/// That search stops as soon as the last finish of the group is settled, so a group of queries
/// costs about as much as its most expensive member.
///
/// ## Examples
/// ```
/// use grid_shortest_paths::{Answer, GridGraph, QueryScheduler, SolverConfig};
///
/// let grid = GridGraph::from_rows(&[
///     [1, 1, 1, 1],
///     [9, 9, 9, 1],
///     [1, 1, 1, 1],
/// ])
/// .unwrap()
/// .with_wall_threshold(9);
///
/// let scheduler = QueryScheduler::new(&grid, SolverConfig::default());
///
/// let answers = scheduler.solve(&[
///     ((0, 0), (2, 0)),
///     ((0, 0), (0, 3)),
///     ((0, 0), (1, 0)),
///     ((0, 0), (7, 7)),
/// ]);
///
/// assert_eq!(answers[0], Ok(Answer::Cost(9)));
/// assert_eq!(answers[1], Ok(Answer::Cost(4)));
/// assert_eq!(answers[2], Ok(Answer::Unreachable));
/// assert!(answers[3].is_err());
/// ```
#[derive(Clone, Debug)]
pub struct QueryScheduler<'a> {
    grid: &'a GridGraph,
    config: SolverConfig,
    regions: Option<RegionMap>,
}

impl<'a> QueryScheduler<'a> {
    /// Creates a new QueryScheduler.
    ///
    /// If [`compress_regions`](SolverConfig::compress_regions) is set, the [`RegionMap`] is built
    /// here, once for all following queries.
    pub fn new(grid: &'a GridGraph, config: SolverConfig) -> QueryScheduler<'a> {
        let regions = if config.compress_regions {
            Some(RegionMap::compress(grid))
        } else {
            None
        };
        QueryScheduler {
            grid,
            config,
            regions,
        }
    }

    /// The Grid this scheduler works on
    pub fn grid(&self) -> &GridGraph {
        self.grid
    }

    /// Returns the config used to create this QueryScheduler
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The compressed Grid, if [`compress_regions`](SolverConfig::compress_regions) is set
    pub fn regions(&self) -> Option<&RegionMap> {
        self.regions.as_ref()
    }

    /// Answers a batch of `(start, finish)` queries.
    ///
    /// The returned list has one entry per query, in the same order. A query with a Point
    /// outside of the Grid fails on its own with [`Error::OutOfBounds`] without affecting the
    /// other queries. Duplicate queries share the same search.
    ///
    /// Queries whose start or finish is a wall are [`Answer::Unreachable`], including
    /// `(a, a)` on a wall and any query touching a Tile of cost [`Cost::MAX`].
    pub fn solve(&self, queries: &[(Point, Point)]) -> Vec<Result<Answer>> {
        self.solve_with_stats(queries).0
    }

    /// Same as [`solve`](QueryScheduler::solve), but also returns the combined counters of
    /// all searches that were run.
    pub fn solve_with_stats(
        &self,
        queries: &[(Point, Point)],
    ) -> (Vec<Result<Answer>>, SearchStats) {
        match &self.regions {
            Some(regions) => self.solve_on(regions, |loc| regions.region_of(loc), queries),
            None => self.solve_on(self.grid, |loc| self.grid.check(loc), queries),
        }
    }

    /// Answers a single query.
    ///
    /// Equivalent to a batch of one, except that a search on the raw Grid may use the
    /// configured [`Heuristic`](crate::Heuristic).
    pub fn solve_one(&self, start: Point, finish: Point) -> Result<Answer> {
        let mut answers = self.solve(&[(start, finish)]);
        answers.pop().unwrap_or(Ok(Answer::Unreachable))
    }

    /// Finds the cheapest Path from `start` to `finish` on the raw Grid.
    ///
    /// Fails with [`Error::NoPath`] if `finish` cannot be reached.
    pub fn find_path(&self, start: Point, finish: Point) -> Result<Path<Point>> {
        self.grid.check(start)?;
        self.grid.check(finish)?;

        let result = self.relaxer(self.grid).run(start, &[finish]);
        result.path_to(finish).ok_or(Error::NoPath {
            from: start,
            to: finish,
        })
    }

    fn relaxer<'s, S: SearchSpace>(&self, space: &'s S) -> Relaxer<'s, S> {
        Relaxer::new(space)
            .with_heuristic(self.config.heuristic)
            .with_frontier(self.config.frontier)
    }

    fn solve_on<S, F>(
        &self,
        space: &S,
        to_id: F,
        queries: &[(Point, Point)],
    ) -> (Vec<Result<Answer>>, SearchStats)
    where
        S: SearchSpace + Sync,
        S::Id: Send + Sync,
        F: Fn(Point) -> Result<S::Id>,
    {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let resolved: Vec<Result<(S::Id, S::Id)>> = queries
            .iter()
            .map(|&(start, finish)| Ok((to_id(start)?, to_id(finish)?)))
            .collect();

        let groups = group_queries(
            resolved
                .iter()
                .filter_map(|query| query.as_ref().ok().copied()),
        );
        re_trace!("group queries", timer);

        let relaxer = self.relaxer(space);
        let relax = |group: &QueryGroup<S::Id>| {
            let result = relaxer.run(group.start, &group.finishes);
            let answers: Vec<_> = group
                .finishes
                .iter()
                .map(|&finish| ((group.start, finish), Answer::from(result.cost(finish))))
                .collect();
            (answers, result.stats())
        };

        #[cfg(feature = "parallel")]
        let relaxed: Vec<_> = if self.config.parallel {
            groups.par_iter().map(relax).collect()
        } else {
            groups.iter().map(relax).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let relaxed: Vec<_> = groups.iter().map(relax).collect();
        re_trace!("relax groups", timer);

        let mut stats = SearchStats::default();
        let mut answers = HashMap::with_capacity(queries.len());
        for (group_answers, group_stats) in relaxed {
            stats += group_stats;
            answers.extend(group_answers);
        }

        #[cfg(feature = "log")]
        log::debug!(
            "answered {} queries with {} searches: {:?}",
            queries.len(),
            groups.len(),
            stats
        );

        let results = resolved
            .into_iter()
            .map(|query| {
                let query = query?;
                Ok(answers.get(&query).copied().unwrap_or(Answer::Unreachable))
            })
            .collect();
        (results, stats)
    }
}
