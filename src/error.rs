//! The error type shared by all fallible operations of this crate.

use crate::Point;
use thiserror::Error;

/// Everything that can go wrong while building a grid or answering a query.
///
/// Note that an unreachable goal is **not** an error: it is reported as
/// [`Answer::Unreachable`](crate::Answer::Unreachable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Point was outside of `[0, rows) × [0, cols)`.
    #[error("({}, {}) is outside of the {rows}x{cols} grid", loc.0, loc.1)]
    OutOfBounds {
        /// the offending Point
        loc: Point,
        /// number of rows of the grid
        rows: usize,
        /// number of columns of the grid
        cols: usize,
    },

    /// A Path was requested to a Point that was never reached by the search.
    #[error("no path from ({}, {}) to ({}, {})", from.0, from.1, to.0, to.1)]
    NoPath {
        /// start of the requested Path
        from: Point,
        /// end of the requested Path
        to: Point,
    },

    /// A grid needs at least one row and one column.
    #[error("grid has no cells")]
    EmptyGrid,

    /// The cost matrix does not have `rows * cols` entries.
    #[error("expected {expected} cells, found {found}")]
    DimensionMismatch {
        /// `rows * cols`
        expected: usize,
        /// length of the provided matrix
        found: usize,
    },

    /// The textual problem description could not be read.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// what was wrong with it
        message: String,
    },
}

/// A shorthand for Results with this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::OutOfBounds {
            loc: (3, 7),
            rows: 2,
            cols: 5,
        };
        assert_eq!(err.to_string(), "(3, 7) is outside of the 2x5 grid");

        let err = Error::NoPath {
            from: (0, 0),
            to: (1, 1),
        };
        assert_eq!(err.to_string(), "no path from (0, 0) to (1, 1)");

        let err = Error::Parse {
            line: 4,
            message: "expected 3 costs".into(),
        };
        assert_eq!(err.to_string(), "line 4: expected 3 costs");
    }
}
