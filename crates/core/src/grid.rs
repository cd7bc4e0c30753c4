use thiserror::Error;

/// Relative tolerance, in units of the step size, allowed between any spacing
/// and the first step before a grid is considered non-uniform.
const SPACING_REL_TOL: f64 = 1e-9;

/// A uniformly spaced, strictly increasing sequence of time points.
///
/// A `Grid` always holds at least one point. Every constructor validates the
/// points, so code that receives a `&Grid` can rely on:
///
/// - all points are finite,
/// - points strictly increase,
/// - every spacing `t[i + 1] - t[i]` equals the first step `h` to within
///   floating-point rounding.
///
/// A single-point grid is valid and describes an integration with no steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

/// Reasons a sequence of points cannot form a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must contain at least one point")]
    Empty,

    #[error("grid point {index} is not finite")]
    NonFinite { index: usize },

    #[error("grid point {index} does not increase on the previous point")]
    NotIncreasing { index: usize },

    #[error("spacing before grid point {index} differs from the first step")]
    NonUniform { index: usize },

    #[error("grid bounds must be finite with start < end")]
    InvalidBounds,
}

impl Grid {
    /// Creates a grid of `count` evenly spaced points from `start` to `end`.
    ///
    /// Both endpoints are included. With `count == 1` the grid is the single
    /// point `start` and `end` is only checked for finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if `count` is zero, or
    /// [`GridError::InvalidBounds`] if either bound is non-finite or, for more
    /// than one point, `start >= end`.
    #[allow(clippy::cast_precision_loss)]
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        if count == 0 {
            return Err(GridError::Empty);
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::InvalidBounds);
        }
        if count == 1 {
            return Ok(Self {
                points: vec![start],
            });
        }
        if start >= end {
            return Err(GridError::InvalidBounds);
        }

        let last = count - 1;
        let span = end - start;
        let points = (0..count)
            .map(|i| {
                if i == last {
                    end
                } else {
                    start + span * (i as f64) / (last as f64)
                }
            })
            .collect();

        Self::from_points(points)
    }

    /// Creates a grid from explicit points, checking every grid invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] naming the first point that breaks an invariant.
    pub fn from_points(points: Vec<f64>) -> Result<Self, GridError> {
        if points.is_empty() {
            return Err(GridError::Empty);
        }
        if let Some(index) = points.iter().position(|t| !t.is_finite()) {
            return Err(GridError::NonFinite { index });
        }
        if points.len() == 1 {
            return Ok(Self { points });
        }

        let h = points[1] - points[0];
        let magnitude = points[0].abs().max(points[points.len() - 1].abs());
        let tolerance = SPACING_REL_TOL * h.abs() + 4.0 * f64::EPSILON * magnitude;

        for (offset, pair) in points.windows(2).enumerate() {
            let index = offset + 1;
            let spacing = pair[1] - pair[0];
            if spacing <= 0.0 {
                return Err(GridError::NotIncreasing { index });
            }
            if (spacing - h).abs() > tolerance {
                return Err(GridError::NonUniform { index });
            }
        }

        Ok(Self { points })
    }

    /// Returns the uniform step size `h = t[1] - t[0]`.
    ///
    /// Returns `None` for a single-point grid, which has no steps.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.points.get(1).map(|t1| t1 - self.points[0])
    }

    /// Returns the number of points, which is always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of steps between points, `len() - 1`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the first time point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Returns the last time point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Returns the time points as a slice.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns an iterator over consecutive `(t[i], t[i + 1])` pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl TryFrom<Vec<f64>> for Grid {
    type Error = GridError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl TryFrom<&[f64]> for Grid {
    type Error = GridError;

    fn try_from(points: &[f64]) -> Result<Self, Self::Error> {
        Self::from_points(points.to_vec())
    }
}

impl AsRef<[f64]> for Grid {
    fn as_ref(&self) -> &[f64] {
        &self.points
    }
}
