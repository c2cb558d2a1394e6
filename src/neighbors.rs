//! The 4-connected Neighborhood used to walk the Grid

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a
/// Heuristic for how far away a goal is from a Point.
///
/// The only implementation used by this crate is [`ManhattanNeighborhood`], for Agents that
/// can move up, down, left or right.
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point
    ///
    /// The Neighbors are appended to `target`, which is **not** cleared beforehand. The order
    /// must be the same every time the function is called with the same Point.
    ///
    /// Note that it is not necessary to check weather the Tile at a Point is solid or not.
    /// That check is done later.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// Gives a Heuristic for how many steps it takes to reach `goal` from `point`.
    ///
    /// This is usually the Distance between the two Points in the Metric of your Neighborhood.
    fn heuristic(&self, point: Point, goal: Point) -> usize;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Points are `(row, col)`. Neighbors are always yielded in the order up, left, down, right,
/// skipping the ones that would leave the Grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    rows: usize,
    cols: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { rows, cols }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (row, col) = point;
        if row > 0 {
            target.push((row - 1, col));
        }
        if col > 0 {
            target.push((row, col - 1));
        }
        if row + 1 < self.rows {
            target.push((row + 1, col));
        }
        if col + 1 < self.cols {
            target.push((row, col + 1));
        }
    }
    fn heuristic(&self, point: Point, goal: Point) -> usize {
        point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(neighborhood: &ManhattanNeighborhood, point: Point) -> Vec<Point> {
        let mut target = vec![];
        neighborhood.get_all_neighbors(point, &mut target);
        target
    }

    #[test]
    fn get_all_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(
            neighbors_of(&neighborhood, (0, 2)),
            vec![(0, 1), (1, 2), (0, 3)],
        );
        assert_eq!(
            neighbors_of(&neighborhood, (2, 2)),
            vec![(1, 2), (2, 1), (3, 2), (2, 3)],
        );
        assert_eq!(neighbors_of(&neighborhood, (4, 4)), vec![(3, 4), (4, 3)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(1, 1);
        assert!(neighbors_of(&neighborhood, (0, 0)).is_empty());
    }

    #[test]
    fn appends_without_clearing() {
        let neighborhood = ManhattanNeighborhood::new(1, 3);
        let mut target = vec![(9, 9)];
        neighborhood.get_all_neighbors((0, 1), &mut target);
        assert_eq!(target, vec![(9, 9), (0, 0), (0, 2)]);
    }

    #[test]
    fn heuristic() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
        assert_eq!(neighborhood.heuristic((0, 0), (3, 1)), 3 + 1);
        assert_eq!(neighborhood.heuristic((2, 2), (2, 2)), 0);
    }
}
