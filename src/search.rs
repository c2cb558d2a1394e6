//! Single-source relaxation over anything that looks like a weighted Grid.
//!
//! The search works on Nodes rather than Tiles, so that the same code runs on the
//! [`GridGraph`](crate::GridGraph) itself and on the compressed [`RegionMap`](crate::RegionMap).

use crate::config::{FrontierPolicy, Heuristic};
use crate::frontier::Frontier;
use crate::{Cost, Path};

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A graph in which walking onto a Node has a cost.
///
/// The cost of a step is the cost of the Node that is entered, so the cost of a Path is the
/// cost of its start plus the cost of every following Node.
pub trait SearchSpace {
    /// The type used to reference a Node
    type Id: Copy + Eq + Hash + Ord + Debug;

    /// The cost of walking onto `id`.
    ///
    /// May assume that `id` is a valid Node.
    fn enter_cost(&self, id: Self::Id) -> Cost;
    /// `false` if `id` may never be walked onto
    fn is_passable(&self, id: Self::Id) -> bool;
    /// Appends all Nodes that are one step away from `id` to `target`.
    ///
    /// The order must be the same for every call with the same `id`.
    fn neighbors(&self, id: Self::Id, target: &mut Vec<Self::Id>);
    /// An estimate of the cost of reaching `goal` from `id` that never exceeds the real cost
    fn heuristic(&self, id: Self::Id, goal: Self::Id) -> Cost;
    /// The expected number of Nodes, used to size internal buffers
    fn size_hint(&self) -> usize {
        0
    }
}

/// The per-Node bookkeeping of a single search.
///
/// A Node without a Label has not been reached (yet), i.e. its cost is infinite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label<Id> {
    /// the cheapest known cost from the source
    pub g: Cost,
    /// the heuristic estimate towards the goal, `0` if no heuristic is used
    pub h: Cost,
    /// `true` while the Node is finalized. Cleared again if a cheaper way is found later.
    pub closed: bool,
    /// the previous Node on the cheapest known Path. The source is its own parent.
    pub parent: Id,
}

/// Counters collected during a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// entries taken out of the frontier, including outdated ones
    pub popped: usize,
    /// outdated entries that were skipped
    pub stale: usize,
    /// Nodes whose cost was improved
    pub relaxed: usize,
    /// closed Nodes that had to be opened again
    pub reopened: usize,
    /// the largest size the frontier reached
    pub peak_frontier: usize,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.popped += rhs.popped;
        self.stale += rhs.stale;
        self.relaxed += rhs.relaxed;
        self.reopened += rhs.reopened;
        self.peak_frontier = self.peak_frontier.max(rhs.peak_frontier);
    }
}

/// Runs searches from a single source on a [`SearchSpace`].
///
/// ## Examples
/// ```
/// use grid_shortest_paths::{GridGraph, search::Relaxer};
///
/// let grid = GridGraph::from_rows(&[
///     [1, 9, 1],
///     [1, 1, 1],
/// ]).unwrap();
///
/// let result = Relaxer::new(&grid).run((0, 0), &[(0, 2), (1, 1)]);
///
/// assert_eq!(result.cost((0, 2)), Some(5));
/// assert_eq!(result.cost((1, 1)), Some(3));
/// ```
#[derive(Debug)]
pub struct Relaxer<'a, S: SearchSpace> {
    space: &'a S,
    heuristic: Heuristic,
    policy: FrontierPolicy,
}

impl<'a, S: SearchSpace> Clone for Relaxer<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, S: SearchSpace> Copy for Relaxer<'a, S> {}

impl<'a, S: SearchSpace> Relaxer<'a, S> {
    /// Creates a Relaxer without heuristic that updates queued Nodes in place
    pub fn new(space: &'a S) -> Self {
        Relaxer {
            space,
            heuristic: Heuristic::None,
            policy: FrontierPolicy::DecreaseKey,
        }
    }

    /// Sets the heuristic used when there is exactly one target
    pub fn with_heuristic(self, heuristic: Heuristic) -> Self {
        Relaxer { heuristic, ..self }
    }

    /// Sets how queued Nodes are updated
    pub fn with_frontier(self, policy: FrontierPolicy) -> Self {
        Relaxer { policy, ..self }
    }

    /// Searches from `source` until every Node in `targets` is settled or the frontier runs dry.
    ///
    /// An empty `targets` list settles every reachable Node.
    ///
    /// A Node is settled once it is taken out of the frontier with an up-to-date priority.
    /// Targets that are never settled are unreachable. If `source` itself is impassable,
    /// nothing is reachable. Impassable targets are unreachable from the start, so if every
    /// target is impassable, the search does not run at all.
    ///
    /// Paths whose cost would exceed [`Cost::MAX`] are never taken.
    pub fn run(&self, source: S::Id, targets: &[S::Id]) -> SearchResult<S::Id> {
        let space = self.space;
        let mut stats = SearchStats::default();
        let mut labels = HashMap::with_capacity(space.size_hint().min(1 << 16));

        let mut pending: HashSet<S::Id> = targets
            .iter()
            .copied()
            .filter(|&target| space.is_passable(target))
            .collect();

        if !space.is_passable(source) || (pending.is_empty() && !targets.is_empty()) {
            return SearchResult {
                source,
                labels,
                stats,
            };
        }

        let goal = match (self.heuristic, targets) {
            (Heuristic::Manhattan, &[goal]) => Some(goal),
            _ => None,
        };
        let estimate = |id: S::Id| goal.map_or(0, |goal| space.heuristic(id, goal));

        let mut frontier = Frontier::with_capacity(space.size_hint().min(1 << 12));

        let g = space.enter_cost(source);
        let h = estimate(source);
        labels.insert(
            source,
            Label {
                g,
                h,
                closed: false,
                parent: source,
            },
        );
        frontier.insert(g.saturating_add(h), source);

        let mut all_neighbors = vec![];

        while let Some((priority, current_id)) = frontier.extract_min() {
            stats.popped += 1;
            let current = labels[&current_id];
            match priority.cmp(&current.g.saturating_add(current.h)) {
                Ordering::Greater => {
                    stats.stale += 1;
                    continue;
                }
                Ordering::Equal => {}
                Ordering::Less => unreachable!("frontier entry below its label"),
            }

            if pending.remove(&current_id) {
                if let Some(label) = labels.get_mut(&current_id) {
                    label.closed = true;
                }
                if pending.is_empty() {
                    break;
                }
            }

            all_neighbors.clear();
            space.neighbors(current_id, &mut all_neighbors);
            for &other_id in all_neighbors.iter() {
                if !space.is_passable(other_id) {
                    continue;
                }
                let other_cost = match current.g.checked_add(space.enter_cost(other_id)) {
                    Some(cost) => cost,
                    None => continue,
                };

                let other_priority = match labels.entry(other_id) {
                    Entry::Occupied(mut entry) => {
                        let label = entry.get_mut();
                        if other_cost >= label.g {
                            continue;
                        }
                        if label.closed {
                            label.closed = false;
                            stats.reopened += 1;
                        }
                        label.g = other_cost;
                        label.parent = current_id;
                        other_cost.saturating_add(label.h)
                    }
                    Entry::Vacant(entry) => {
                        let h = estimate(other_id);
                        entry.insert(Label {
                            g: other_cost,
                            h,
                            closed: false,
                            parent: current_id,
                        });
                        other_cost.saturating_add(h)
                    }
                };
                stats.relaxed += 1;

                match self.policy {
                    FrontierPolicy::DecreaseKey => {
                        frontier.decrease_or_insert(other_id, other_priority);
                    }
                    FrontierPolicy::Lazy => frontier.insert(other_priority, other_id),
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());

            if let Some(label) = labels.get_mut(&current_id) {
                label.closed = true;
            }
        }

        SearchResult {
            source,
            labels,
            stats,
        }
    }
}

/// The outcome of [`Relaxer::run`]
#[derive(Clone, Debug)]
pub struct SearchResult<Id> {
    source: Id,
    labels: HashMap<Id, Label<Id>>,
    stats: SearchStats,
}

impl<Id: Copy + Eq + Hash> SearchResult<Id> {
    /// The Node the search started from
    pub fn source(&self) -> Id {
        self.source
    }

    /// The final cost of reaching `id`, or `None` if `id` was not settled.
    ///
    /// Nodes that were reached but not settled before the search stopped also return `None`,
    /// since their cost may not be final.
    pub fn cost(&self, id: Id) -> Option<Cost> {
        self.labels
            .get(&id)
            .filter(|label| label.closed)
            .map(|label| label.g)
    }

    /// `true` if the final cost of `id` is known
    pub fn is_settled(&self, id: Id) -> bool {
        self.labels.get(&id).map_or(false, |label| label.closed)
    }

    /// The Label of `id`, if it was reached at all
    pub fn label(&self, id: Id) -> Option<&Label<Id>> {
        self.labels.get(&id)
    }

    /// Iterates over all settled Nodes and their final cost
    pub fn settled(&self) -> impl Iterator<Item = (Id, Cost)> + '_ {
        self.labels
            .iter()
            .filter(|(_, label)| label.closed)
            .map(|(&id, label)| (id, label.g))
    }

    /// Counters collected during the search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Follows the parent pointers from `goal` back to the source.
    ///
    /// Returns `None` if `goal` was not settled.
    pub fn path_to(&self, goal: Id) -> Option<Path<Id>> {
        let cost = self.cost(goal)?;

        let mut steps = vec![];
        let mut current = goal;
        while current != self.source {
            steps.push(current);
            current = self.labels.get(&current)?.parent;
        }
        steps.push(self.source);
        steps.reverse();

        Some(Path::new(steps, cost))
    }
}
