//! One-dimensional interpolation along a single row of the lookup table.
//!
//! Each row of a [`GridLookup`](crate::GridLookup) is a sampled function over
//! the shared x1 axis. Rather than storing one interpolant per row, a row is
//! wrapped in a borrowed [`RectilinearGrid1D`] at query time, which is cheap
//! and keeps every row bound to its own samples.

pub mod linear;

use num_traits::Float;

use crate::error::{GridError, Result};

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// The grid cell bracketing an observation point
#[derive(Clone, Copy, Debug)]
pub struct GridSample<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
    pub extrap: Extrap,
}

/// A sampled 1D function
pub trait Grid1D<T: Float> {
    /// Get the left and right values and their locations
    /// for an observation point at a given location.
    ///
    /// For observation points outside the grid, the returned
    /// locations do not bracket the observation point, and
    /// `extrap` says which side it fell off.
    fn at(&self, loc: T) -> GridSample<T>;
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<()> {
        if locs.len() != out.len() {
            return Err(GridError::DimensionMismatch {
                context: "1D evaluation output",
                expected: locs.len(),
                got: out.len(),
            });
        }

        for (o, &loc) in out.iter_mut().zip(locs) {
            *o = self.eval_one(loc);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        locs.iter().map(|&loc| self.eval_one(loc)).collect()
    }
}

/// A rectilinear grid, which may have uneven spacing.
///
/// Assumes `grid` is non-decreasing; [`GridLookup`](crate::GridLookup)
/// checks this once at construction rather than on every row access.
/// Repeated samples are allowed, and a single sample is a constant.
#[derive(Clone, Copy, Debug)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    vals: &'a [T],
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    /// # Errors
    /// * If `grid` and `vals` have different lengths
    /// * If there are no samples
    pub fn new(grid: &'a [T], vals: &'a [T]) -> Result<Self> {
        if grid.len() != vals.len() {
            return Err(GridError::DimensionMismatch {
                context: "1D grid values",
                expected: grid.len(),
                got: vals.len(),
            });
        }
        if grid.is_empty() {
            return Err(GridError::DegenerateAxis {
                axis: "x1",
                got: grid.len(),
            });
        }

        Ok(Self { grid, vals })
    }

    /// Get the index of the lower corner of the containing grid cell.
    ///
    /// Cells are closed on the left, so a location exactly on a sample
    /// resolves to the cell starting at that sample, and among repeated
    /// samples the last one is used, so an `Inside` cell never has zero
    /// width. The last sample counts as `OutsideHigh`, which lets hold-last
    /// return it unrounded.
    ///
    /// With a single sample the index is always 0.
    #[inline]
    pub fn index(&self, loc: T) -> (usize, Extrap) {
        let n = self.grid.len();
        let i = self
            .grid
            .partition_point(|v| *v <= loc)
            .saturating_sub(1)
            .min(n.saturating_sub(2));

        let extrap = match loc {
            x if x < self.grid[0] => Extrap::OutsideLow,
            x if x >= self.grid[n - 1] => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        };

        (i, extrap)
    }
}

impl<T: Float> Grid1D<T> for RectilinearGrid1D<'_, T> {
    #[inline]
    fn at(&self, loc: T) -> GridSample<T> {
        let (i, extrap) = self.index(loc);
        // Both ends of the cell are the same sample on a single-sample grid
        let j = (i + 1).min(self.grid.len() - 1);

        let (x0, x1) = (self.grid[i], self.grid[j]);
        let (y0, y1) = (self.vals[i], self.vals[j]);

        GridSample {
            x0,
            y0,
            x1,
            y1,
            extrap,
        }
    }
}
