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

//! A crate to find the exact cost of many Paths on a weighted Grid.
//!
//! ## Introduction
//! Every Tile of the Grid has a cost of walking onto it. The cost of a Path is the cost of its
//! start Tile plus the cost of every Tile it walks onto, so walking from a Tile to itself costs
//! exactly that Tile. Movement is 4-connected: up, left, down and right.
//!
//! Answering a large number of queries one by one is wasteful, since queries often share their
//! start. The [`QueryScheduler`] groups a batch of queries by start and runs a single search
//! per distinct start. That search stops as soon as every requested finish of the group is
//! settled, instead of computing the cost of the entire Grid.
//!
//! Grids often contain large areas of free (cost `0`) terrain. These can optionally be
//! collapsed into a single Node each before searching (see [`RegionMap`]), which makes the
//! searched graph a lot smaller without changing any result.
//!
//! Unlike approximate pathfinding, every answer is the exact cheapest cost.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use grid_shortest_paths::prelude::*;
//!
//! let grid = GridGraph::from_rows(&[
//!     [1, 1, 1, 1],
//!     [1, 9, 9, 1],
//!     [1, 5, 1, 1],
//!     [0, 0, 0, 1],
//! ])
//! .unwrap();
//! ```
//!
//! ### Queries
//! ```
//! # use grid_shortest_paths::prelude::*;
//! # let grid = GridGraph::from_rows(&[
//! #     [1, 1, 1, 1],
//! #     [1, 9, 9, 1],
//! #     [1, 5, 1, 1],
//! #     [0, 0, 0, 1],
//! # ])
//! # .unwrap();
//! let scheduler = QueryScheduler::new(&grid, SolverConfig::default());
//!
//! let answers = scheduler.solve(&[
//!     ((0, 0), (2, 2)),
//!     ((0, 0), (0, 3)),
//!     ((3, 3), (3, 0)),
//! ]);
//!
//! assert_eq!(answers[0], Ok(Answer::Cost(4)));
//! assert_eq!(answers[1], Ok(Answer::Cost(4)));
//! assert_eq!(answers[2], Ok(Answer::Cost(1)));
//!
//! // Paths can be reconstructed as well
//! let path = scheduler.find_path((0, 0), (2, 2)).unwrap();
//! assert_eq!(path.cost(), 4);
//! assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (2, 2)]);
//! ```
//!
//! ### Walls
//! By default, every Tile can be walked onto, no matter how expensive it is. Tiles with a cost
//! at or above a threshold can be turned into walls instead:
//! ```
//! # use grid_shortest_paths::prelude::*;
//! let grid = GridGraph::from_rows(&[
//!     [1, 10_000, 1],
//!     [1, 10_000, 1],
//! ])
//! .unwrap()
//! .with_wall_threshold(10_000);
//!
//! let scheduler = QueryScheduler::new(&grid, SolverConfig::default());
//! assert_eq!(scheduler.solve_one((0, 0), (1, 0)), Ok(Answer::Cost(2)));
//! assert_eq!(scheduler.solve_one((0, 0), (0, 2)), Ok(Answer::Unreachable));
//! ```
//!
//! ### Configuration
//! The [`QueryScheduler`] can be configured using a [`SolverConfig`]:
//! ```
//! # use grid_shortest_paths::prelude::*;
//! # let grid = GridGraph::from_rows(&[[0, 0, 2], [0, 3, 0]]).unwrap();
//! let scheduler = QueryScheduler::new(
//!     &grid,
//!     SolverConfig {
//!         compress_regions: true,
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(scheduler.regions().map(|regions| regions.len()), Some(4));
//! assert_eq!(scheduler.solve_one((1, 0), (1, 2)), Ok(Answer::Cost(2)));
//! ```
//!
//! ### Input files
//! Problems can also be read from text, see [`parse_problem`].
//!
//! ## Crate Features
//! - `parallel` (default): groups of queries are searched on the `rayon` thread pool.
//! - `log`: timings and statistics are reported through the `log` crate.

#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {};
}

/// The cost of walking onto a Tile, and the total cost of a Path
pub type Cost = usize;

/// A shorthand for Points on the grid, as `(row, col)`
pub type Point = (usize, usize);

mod error;
pub use self::error::{Error, Result};

pub mod neighbors;

mod grid;
pub use self::grid::GridGraph;

pub mod frontier;

pub mod search;

mod path;
pub use self::path::Path;

mod config;
pub use self::config::{FrontierPolicy, Heuristic, SolverConfig};

mod regions;
pub use self::regions::{Region, RegionID, RegionMap};

pub mod scheduler;
pub use self::scheduler::{Answer, QueryScheduler};

mod input;
pub use self::input::{parse_problem, Problem};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, Neighborhood},
        parse_problem, Answer, Cost, Error, FrontierPolicy, GridGraph, Heuristic, Path, Point,
        Problem, QueryScheduler, RegionMap, SolverConfig,
    };
}
