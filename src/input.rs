//! Reading problems from the plain-text format.
//!
//! ```text
//! rows cols
//! <rows lines of cols costs>
//! q
//! <q lines of: start_row start_col finish_row finish_col>
//! ```
//!
//! Values are separated by any amount of whitespace. Blank lines are ignored.

use crate::{Answer, Error, GridGraph, Point, QueryScheduler, Result, SolverConfig};
use std::str::FromStr;

/// A Grid together with a batch of queries on it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// the Grid
    pub grid: GridGraph,
    /// the `(start, finish)` queries, in input order
    pub queries: Vec<(Point, Point)>,
}

impl Problem {
    /// Answers all queries of the Problem with the given config
    pub fn solve(&self, config: SolverConfig) -> Vec<Result<Answer>> {
        QueryScheduler::new(&self.grid, config).solve(&self.queries)
    }
}

impl FromStr for Problem {
    type Err = Error;
    fn from_str(input: &str) -> Result<Problem> {
        parse_problem(input)
    }
}

/// Parses a [`Problem`] from its textual description.
///
/// ## Examples
/// ```
/// use grid_shortest_paths::{parse_problem, Answer, SolverConfig};
///
/// let problem = parse_problem(
///     "2 3
///      1 2 3
///      4 5 6
///      2
///      0 0 1 2
///      1 1 1 1",
/// )
/// .unwrap();
///
/// assert_eq!(problem.queries, vec![((0, 0), (1, 2)), ((1, 1), (1, 1))]);
/// assert_eq!(
///     problem.solve(SolverConfig::default()),
///     vec![Ok(Answer::Cost(12)), Ok(Answer::Cost(5))]
/// );
/// ```
pub fn parse_problem(input: &str) -> Result<Problem> {
    let mut lines = Lines::new(input);

    let dims = lines.next_values("the grid size", 2)?;
    let (rows, cols) = (dims[0], dims[1]);
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyGrid);
    }

    let size = rows.checked_mul(cols).ok_or_else(|| {
        lines.error(format!("a {}x{} grid does not fit into memory", rows, cols))
    })?;

    // every value takes up at least one byte of input
    let mut costs = Vec::with_capacity(size.min(input.len()));
    for row in 0..rows {
        costs.extend(lines.next_values(&format!("row {}", row), cols)?);
    }
    let grid = GridGraph::new(rows, cols, costs)?;

    let count = lines.next_values("the number of queries", 1)?[0];
    let mut queries = Vec::with_capacity(count.min(input.len()));
    for _ in 0..count {
        let query = lines.next_values("a query", 4)?;
        queries.push(((query[0], query[1]), (query[2], query[3])));
    }

    lines.expect_end()?;

    #[cfg(feature = "log")]
    log::debug!(
        "parsed {}x{} grid with {} queries",
        rows,
        cols,
        queries.len()
    );

    Ok(Problem { grid, queries })
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Lines<'a> {
        Lines {
            inner: input.lines().enumerate(),
            line: 0,
        }
    }

    fn error(&self, message: String) -> Error {
        Error::Parse {
            line: self.line,
            message,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        for (index, text) in self.inner.by_ref() {
            self.line = index + 1;
            if !text.trim().is_empty() {
                return Some(text);
            }
        }
        None
    }

    fn next_values(&mut self, what: &str, count: usize) -> Result<Vec<usize>> {
        let text = match self.next_line() {
            Some(text) => text,
            None => {
                self.line += 1;
                return Err(self.error(format!("expected {}, found end of input", what)));
            }
        };
        let values = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| self.error(format!("invalid number {:?} in {}", token, what)))
            })
            .collect::<Result<Vec<_>>>()?;
        if values.len() != count {
            return Err(self.error(format!(
                "expected {} values for {}, found {}",
                count,
                what,
                values.len()
            )));
        }
        Ok(values)
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next_line() {
            Some(text) => Err(self.error(format!("unexpected trailing input {:?}", text.trim()))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let problem: Problem = "3 2\n\n0 1\n2 3\n4 5\n1\n2 1 0 0\n\n".parse().unwrap();
        assert_eq!(problem.grid.rows(), 3);
        assert_eq!(problem.grid.cols(), 2);
        assert_eq!(problem.grid.costs(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(problem.queries, vec![((2, 1), (0, 0))]);
    }

    #[test]
    fn no_queries() {
        let problem = parse_problem("1 1\n7\n0\n").unwrap();
        assert!(problem.queries.is_empty());
        assert!(problem.solve(SolverConfig::default()).is_empty());
    }

    #[test]
    fn errors() {
        let parse_error = |input: &str| match parse_problem(input) {
            Err(Error::Parse { line, .. }) => line,
            other => panic!("expected a parse error, got {:?}", other),
        };

        assert_eq!(parse_error(""), 1);
        assert_eq!(parse_error("2"), 1);
        assert_eq!(parse_error("2 2\n1 1\n1 x\n0"), 3);
        assert_eq!(parse_error("2 2\n1 1\n1 1 1\n0"), 3);
        assert_eq!(parse_error("2 2\n1 1\n1 -1\n0"), 3);
        assert_eq!(parse_error("2 2\n1 1\n1 1"), 4);
        assert_eq!(parse_error("2 2\n1 1\n1 1\n2\n0 0 1 1"), 6);
        assert_eq!(parse_error("2 2\n1 1\n1 1\n1\n0 0 1\n"), 5);
        assert_eq!(parse_error("1 1\n1\n0\nextra"), 4);

        assert_eq!(parse_problem("0 4\n0\n"), Err(Error::EmptyGrid));
    }

    #[test]
    fn huge_sizes_are_rejected() {
        assert_eq!(
            parse_problem("4294967296 4294967296\n1\n0\n"),
            Err(Error::Parse {
                line: 1,
                message: "a 4294967296x4294967296 grid does not fit into memory".into()
            })
        );

        // the grid size fits, but the rows are missing
        assert!(matches!(
            parse_problem("100000 100000\n1\n0\n"),
            Err(Error::Parse { line: 2, .. })
        ));

        // far more queries than there are lines
        assert!(matches!(
            parse_problem("1 1\n1\n18446744073709551615\n0 0 0 0\n"),
            Err(Error::Parse { line: 5, .. })
        ));
    }

    #[test]
    fn error_message() {
        let error = parse_problem("1 2\n3 y\n0").unwrap_err();
        assert_eq!(error.to_string(), "line 2: invalid number \"y\" in row 0");
    }

    #[test]
    fn out_of_bounds_queries_are_kept() {
        let problem = parse_problem("1 2\n1 1\n2\n0 0 0 1\n0 0 5 5").unwrap();
        let answers = problem.solve(SolverConfig::DIJKSTRA);
        assert_eq!(answers[0], Ok(Answer::Cost(2)));
        assert!(matches!(answers[1], Err(Error::OutOfBounds { .. })));
    }
}
