use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
use crate::search::SearchSpace;
use crate::{Cost, Error, Point, Result};

/// A rectangular Grid of traversal costs.
///
/// Walking onto a Tile costs the value stored for that Tile. The Grid is immutable once it
/// has been created, so it can be shared between any number of searches.
///
/// Points are `(row, col)` and the cost matrix is stored row-major.
///
/// ## Examples
/// ```
/// use grid_shortest_paths::GridGraph;
///
/// let grid = GridGraph::from_rows(&[
///     vec![1, 2, 3],
///     vec![4, 5, 6],
/// ]).unwrap();
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.cost((1, 0)), Ok(4));
/// assert!(grid.cost((2, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    costs: Vec<Cost>,
    wall_threshold: Cost,
    min_cost: Cost,
    neighborhood: ManhattanNeighborhood,
}

impl GridGraph {
    /// Creates a Grid from a row-major cost matrix.
    ///
    /// Fails with [`Error::EmptyGrid`] if either dimension is zero and with
    /// [`Error::DimensionMismatch`] if `costs` does not contain exactly `rows * cols` entries.
    /// If `rows * cols` does not fit into a `usize`, `expected` is reported as `usize::MAX`.
    pub fn new(rows: usize, cols: usize, costs: Vec<Cost>) -> Result<GridGraph> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }
        let expected = rows.checked_mul(cols).ok_or(Error::DimensionMismatch {
            expected: Cost::MAX,
            found: costs.len(),
        })?;
        if costs.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: costs.len(),
            });
        }
        let mut grid = GridGraph {
            rows,
            cols,
            costs,
            wall_threshold: Cost::MAX,
            min_cost: 0,
            neighborhood: ManhattanNeighborhood::new(rows, cols),
        };
        grid.min_cost = grid.passable_min_cost();
        Ok(grid)
    }

    /// Creates a Grid from a list of equally long rows.
    pub fn from_rows<R: AsRef<[Cost]>>(rows: &[R]) -> Result<GridGraph> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut costs = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    expected: rows.len() * cols,
                    found: costs.len() + row.len(),
                });
            }
            costs.extend_from_slice(row);
        }
        GridGraph::new(rows.len(), cols, costs)
    }

    /// Marks every Tile with a cost of at least `threshold` as a wall.
    ///
    /// Walls are never walked onto, not even as the start of a query. Without calling this,
    /// only Tiles with a cost of [`Cost::MAX`] are walls.
    ///
    /// ```
    /// # use grid_shortest_paths::GridGraph;
    /// let grid = GridGraph::from_rows(&[[1, 10_000, 1]])
    ///     .unwrap()
    ///     .with_wall_threshold(10_000);
    ///
    /// assert!(grid.is_passable((0, 0)));
    /// assert!(!grid.is_passable((0, 1)));
    /// ```
    pub fn with_wall_threshold(mut self, threshold: Cost) -> GridGraph {
        self.wall_threshold = threshold;
        self.min_cost = self.passable_min_cost();
        self
    }

    /// The number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The total number of Tiles
    pub fn size(&self) -> usize {
        self.costs.len()
    }

    /// The cost at or above which a Tile is a wall
    pub fn wall_threshold(&self) -> Cost {
        self.wall_threshold
    }

    /// The cheapest cost of any Tile that is not a wall, or `0` if there is no such Tile.
    ///
    /// Every step of a Path costs at least this much, which makes it the scale of the
    /// Manhattan heuristic.
    pub fn min_cost(&self) -> Cost {
        self.min_cost
    }

    /// The Neighborhood used to move on this Grid
    pub fn neighborhood(&self) -> &ManhattanNeighborhood {
        &self.neighborhood
    }

    /// `true` if `loc` lies within the Grid
    pub fn contains(&self, loc: Point) -> bool {
        loc.0 < self.rows && loc.1 < self.cols
    }

    /// Rejects Points outside of the Grid with [`Error::OutOfBounds`]
    pub fn check(&self, loc: Point) -> Result<Point> {
        if self.contains(loc) {
            Ok(loc)
        } else {
            Err(Error::OutOfBounds {
                loc,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The row-major index of `loc`
    pub fn index_of(&self, loc: Point) -> Result<usize> {
        let (row, col) = self.check(loc)?;
        Ok(row * self.cols + col)
    }

    /// The Point at a row-major index
    pub fn location_of(&self, index: usize) -> Result<Point> {
        self.check((index / self.cols, index % self.cols))
    }

    /// The cost of walking onto `loc`
    pub fn cost(&self, loc: Point) -> Result<Cost> {
        self.index_of(loc).map(|index| self.costs[index])
    }

    /// `true` if `loc` is inside the Grid and not a wall
    pub fn is_passable(&self, loc: Point) -> bool {
        self.cost(loc).map_or(false, |cost| cost < self.wall_threshold)
    }

    /// Appends the in-bounds 4-neighbors of `loc` to `target`.
    ///
    /// The order is always up, left, down, right.
    pub fn neighbors(&self, loc: Point, target: &mut Vec<Point>) {
        self.neighborhood.get_all_neighbors(loc, target);
    }

    /// The row-major cost matrix
    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    /// Iterates over all Points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }

    #[inline]
    fn raw_cost(&self, loc: Point) -> Cost {
        self.costs[loc.0 * self.cols + loc.1]
    }

    fn passable_min_cost(&self) -> Cost {
        self.costs
            .iter()
            .copied()
            .filter(|&cost| cost < self.wall_threshold)
            .min()
            .unwrap_or(0)
    }
}

impl SearchSpace for GridGraph {
    type Id = Point;

    /// Only called for Points that passed [`is_passable`](SearchSpace::is_passable), which
    /// implies they are inside the Grid.
    fn enter_cost(&self, id: Point) -> Cost {
        self.raw_cost(id)
    }
    /// Points outside of the Grid are never passable.
    fn is_passable(&self, id: Point) -> bool {
        GridGraph::is_passable(self, id)
    }
    fn neighbors(&self, id: Point, target: &mut Vec<Point>) {
        self.neighborhood.get_all_neighbors(id, target);
    }
    fn heuristic(&self, id: Point, goal: Point) -> Cost {
        self.min_cost
            .saturating_mul(self.neighborhood.heuristic(id, goal))
    }
    fn size_hint(&self) -> usize {
        self.size()
    }
}
