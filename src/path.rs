use crate::Cost;

/// A Path through the Grid (or through the compressed Region graph).
///
/// Stores the sequence of visited Nodes, **including** both the start and the goal, and the
/// total Cost of walking it. The Cost follows the same convention as every search in this
/// crate: the cost of the start Tile is counted once, plus the cost of every Tile walked onto.
///
/// ## Examples
/// ```
/// # use grid_shortest_paths::{GridGraph, QueryScheduler, SolverConfig};
/// let grid = GridGraph::from_rows(&[[1, 1], [1, 1]]).unwrap();
/// let scheduler = QueryScheduler::new(&grid, SolverConfig::default());
///
/// let path = scheduler.find_path((0, 0), (1, 1)).unwrap();
/// assert_eq!(path.cost(), 3);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], (0, 0));
/// assert_eq!(path[2], (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// creates a new Path by copying the given Nodes
    pub fn from_slice(path: &[P], cost: Cost) -> Path<P>
    where
        P: Clone,
    {
        Path {
            path: path.to_vec(),
            cost,
        }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Nodes in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<P> {
        self.path.iter()
    }

    /// The Nodes as a slice
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }

    /// Consumes the Path, returning the Nodes
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        &self.path == rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path.as_slice() == *rhs
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.start(), Some(&4));
        assert_eq!(path.goal(), Some(&0));
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(0, 0), (0, 1)], 42);

        assert_eq!(&format!("{}", path), "Path[Cost = 42]: (0, 0) -> (0, 1)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn compare() {
        let cheap = Path::from_slice(&[1, 2, 3], 5);
        let expensive = Path::from_slice(&[1], 7);
        assert!(cheap < expensive);
        assert_eq!(cheap, vec![1, 2, 3]);
        assert_eq!(cheap, &[1, 2, 3][..]);
    }
}
