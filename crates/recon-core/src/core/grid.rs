use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Grid is empty, at least one point is required")]
    EmptyGrid,
    #[error("Grid value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
    #[error("Grid is not strictly ascending at index {index}: {previous} followed by {current}")]
    NotAscending {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error(
        "Legendre coefficient {coefficient_index} at energy index {energy_index} is not finite: {value}"
    )]
    NonFiniteCoefficient {
        energy_index: usize,
        coefficient_index: usize,
        value: f64,
    },
    #[error("Mismatched sequence lengths: {mu} cosines but {values} densities")]
    LengthMismatch { mu: usize, values: usize },
    #[error("Scattering cosine {0} lies outside [-1, 1]")]
    CosineOutOfDomain(f64),
    #[error("Query {name} is not finite: {value}")]
    NonFiniteQuery { name: &'static str, value: f64 },
    #[error("Unsupported LTT flag: {0}")]
    UnsupportedLtt(i32),
    #[error("LTT flag {ltt} requires a {table} table, none was supplied")]
    MissingTable { ltt: i32, table: &'static str },
}

/// Checks that `points` is a non-empty, finite, strictly ascending sequence.
pub fn validate_ascending(points: &[f64]) -> Result<(), InputError> {
    if points.is_empty() {
        return Err(InputError::EmptyGrid);
    }
    for (index, &value) in points.iter().enumerate() {
        if !value.is_finite() {
            return Err(InputError::NonFinite { index, value });
        }
        if index > 0 && points[index - 1] >= value {
            return Err(InputError::NotAscending {
                index,
                previous: points[index - 1],
                current: value,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Below,
    Above,
}

/// A pair of adjacent grid indices surrounding a query value.
///
/// `fraction` is the relative position of the query between `lower` and
/// `upper`. A degenerate bracket (`lower == upper`) always has a fraction of
/// zero; it is produced for single-point grids and for queries outside the
/// grid, in which case `clamped` records the side that was crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lower: usize,
    pub upper: usize,
    pub fraction: f64,
    pub clamped: Option<Edge>,
}

impl Bracket {
    fn degenerate(index: usize, clamped: Option<Edge>) -> Self {
        Self {
            lower: index,
            upper: index,
            fraction: 0.0,
            clamped,
        }
    }

    /// Returns the only grid index that contributes to the result, if the
    /// query sits exactly on a grid point or the bracket is degenerate.
    pub fn single(&self) -> Option<usize> {
        if self.lower == self.upper || self.fraction == 0.0 {
            Some(self.lower)
        } else if self.fraction == 1.0 {
            Some(self.upper)
        } else {
            None
        }
    }
}

/// Locates `x` within the ascending `grid` using a lower-bound binary search.
///
/// Queries outside the grid collapse onto the nearest edge point. The grid is
/// assumed to have passed [`validate_ascending`]; only emptiness is rechecked.
pub fn locate(grid: &[f64], x: f64) -> Result<Bracket, InputError> {
    let (first, last) = match (grid.first(), grid.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(InputError::EmptyGrid),
    };

    if x < first {
        return Ok(Bracket::degenerate(0, Some(Edge::Below)));
    }
    if x > last {
        return Ok(Bracket::degenerate(grid.len() - 1, Some(Edge::Above)));
    }
    if grid.len() == 1 {
        return Ok(Bracket::degenerate(0, None));
    }

    let idx = grid.partition_point(|&point| point < x);
    let upper = idx.max(1);
    let lower = upper - 1;
    let fraction = (x - grid[lower]) / (grid[upper] - grid[lower]);

    Ok(Bracket {
        lower,
        upper,
        fraction,
        clamped: None,
    })
}
