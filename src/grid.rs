//! Two-axis lookup table with row-then-column linear interpolation.
//!
//! ```rust
//! use gridlookup::GridLookup;
//!
//! let x0 = vec![0.0_f64, 10.0];
//! let x1 = vec![0.0_f64, 1.0, 2.0];
//! let rows = vec![vec![0.0, 0.0, 0.0], vec![10.0, 20.0, 30.0]];
//!
//! let grid = GridLookup::from_rows(x0, x1, rows).unwrap();
//!
//! // Native x1 samples, halfway between the two rows
//! assert_eq!(grid.value_at(5.0, None, true).unwrap(), vec![5.0, 10.0, 15.0]);
//!
//! // Arbitrary x1 samples; x1 is held flat beyond its last sample
//! assert_eq!(grid.value_at(10.0, Some(&[0.5, 4.0]), true).unwrap(), vec![15.0, 30.0]);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Repeated_linear_interpolation
use log::{debug, trace};
use num_traits::Float;

use crate::error::{GridError, Result};
use crate::one_dim::{Interp1D, RectilinearGrid1D, linear::LinearHoldLast1D};

/// Which stored rows contribute to a query at a given x0.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RowSelection<T> {
    /// The query lands on (or is clamped to) a single stored row.
    Single(usize),
    /// The query lies strictly between rows `lo` and `lo + 1`,
    /// at fraction `t` of the way from one to the other.
    Blend { lo: usize, t: T },
}

/// A rectilinear 2D lookup table.
///
/// Rows are keyed by `x0`; every row is sampled at the same `x1` values.
/// Values are stored flat in C order (`vals[i * x1.len() + j]` is the value
/// at `(x0[i], x1[j])`).
///
/// A query first evaluates each neighbouring row along x1 with
/// piecewise-linear interpolation, holding the edge value outside the x1
/// samples, and then blends the two rows linearly along x0.
///
/// The table is immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLookup<T: Float> {
    /// Row keys, size N
    x0: Vec<T>,

    /// Column keys shared by every row, size M
    x1: Vec<T>,

    /// Values at each point, size N * M
    vals: Vec<T>,
}

impl<T: Float> GridLookup<T> {
    /// Build a lookup table from a flat, C-ordered value table.
    ///
    /// # Errors
    /// * If `x0` or `x1` is empty
    /// * If `vals.len() != x0.len() * x1.len()`
    /// * If `x0` is not strictly increasing
    /// * If `x1` is decreasing anywhere; repeated `x1` samples are allowed
    pub fn new(x0: Vec<T>, x1: Vec<T>, vals: Vec<T>) -> Result<Self> {
        if x0.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if x1.is_empty() {
            return Err(GridError::DegenerateAxis {
                axis: "x1",
                got: x1.len(),
            });
        }
        let nvals = x0.len() * x1.len();
        if vals.len() != nvals {
            return Err(GridError::DimensionMismatch {
                context: "value table",
                expected: nvals,
                got: vals.len(),
            });
        }
        // Also rejects NaN keys, which never compare as increasing
        if !monotonic(&x0, |a, b| b > a) {
            return Err(GridError::NotMonotonic { axis: "x0" });
        }
        if !monotonic(&x1, |a, b| b >= a) {
            return Err(GridError::NotMonotonic { axis: "x1" });
        }

        debug!(
            "Built {}x{} lookup table over x0 in [{:?}, {:?}]",
            x0.len(),
            x1.len(),
            x0[0].to_f64(),
            x0[x0.len() - 1].to_f64()
        );

        Ok(Self { x0, x1, vals })
    }

    /// Build a lookup table from one `Vec` of values per row.
    ///
    /// # Errors
    /// * If `rows.len() != x0.len()` or any row length differs from `x1.len()`
    /// * Any error from [`GridLookup::new`]
    pub fn from_rows(x0: Vec<T>, x1: Vec<T>, rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.len() != x0.len() {
            return Err(GridError::DimensionMismatch {
                context: "number of rows",
                expected: x0.len(),
                got: rows.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != x1.len()) {
            return Err(GridError::DimensionMismatch {
                context: "row length",
                expected: x1.len(),
                got: bad.len(),
            });
        }

        let vals = rows.into_iter().flatten().collect();
        Self::new(x0, x1, vals)
    }

    /// Native x0 values.
    pub fn x0(&self) -> &[T] {
        &self.x0
    }

    /// Native x1 values.
    pub fn x1(&self) -> &[T] {
        &self.x1
    }

    /// Owned copy of the native x0 values.
    pub fn x0_copy(&self) -> Vec<T> {
        self.x0.clone()
    }

    /// Owned copy of the native x1 values.
    pub fn x1_copy(&self) -> Vec<T> {
        self.x1.clone()
    }

    /// The flat, C-ordered value table.
    pub fn values(&self) -> &[T] {
        &self.vals
    }

    /// Stored samples for row `i`, or `None` past the last row.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i >= self.x0.len() {
            return None;
        }
        let m = self.x1.len();
        self.vals.get(i * m..(i + 1) * m)
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.x0.len(), self.x1.len())
    }

    /// Smallest and largest native x0.
    pub fn x0_span(&self) -> (T, T) {
        (self.x0[0], self.x0[self.x0.len() - 1])
    }

    /// Whether `x0` lies within the native x0 span, endpoints included.
    pub fn contains(&self, x0: T) -> bool {
        let (lo, hi) = self.x0_span();
        x0 >= lo && x0 <= hi
    }

    /// Interpolated values at row coordinate `x0` and column coordinates `x1`,
    /// allocating for the output.
    ///
    /// `x1 = None` evaluates at the native x1 values.
    ///
    /// Outside the native x0 span, returns the nearest edge row when `extend`
    /// is true and fails otherwise. Outside the native x1 span, values are
    /// always held flat at the nearest edge sample.
    ///
    /// # Errors
    /// * [`GridError::OutOfRange`] if `x0` is outside the native x0 span and
    ///   `extend` is false, or if `x0` is NaN
    pub fn value_at(&self, x0: T, x1: Option<&[T]>, extend: bool) -> Result<Vec<T>> {
        let locs = x1.unwrap_or(&self.x1);
        let mut out = vec![T::zero(); locs.len()];
        self.value_at_into(x0, Some(locs), extend, &mut out)?;
        Ok(out)
    }

    /// Interpolated value at a single point `(x0, x1)`.
    ///
    /// # Errors
    /// * Same as [`GridLookup::value_at`]
    pub fn value_at_one(&self, x0: T, x1: T, extend: bool) -> Result<T> {
        let mut out = [T::zero()];
        self.value_at_into(x0, Some(&[x1]), extend, &mut out)?;
        Ok(out[0])
    }

    /// Interpolated values at row coordinate `x0`, written to `out`,
    /// which must be the same length as the x1 query.
    ///
    /// # Errors
    /// * [`GridError::DimensionMismatch`] if `out` does not match the x1 query
    /// * Same as [`GridLookup::value_at`]
    pub fn value_at_into(
        &self,
        x0: T,
        x1: Option<&[T]>,
        extend: bool,
        out: &mut [T],
    ) -> Result<()> {
        let locs = x1.unwrap_or(&self.x1);
        if locs.len() != out.len() {
            return Err(GridError::DimensionMismatch {
                context: "query output",
                expected: locs.len(),
                got: out.len(),
            });
        }

        // Bounds check first
        if x0.is_nan() || (!extend && !self.contains(x0)) {
            let (lo, hi) = self.x0_span();
            return Err(GridError::OutOfRange {
                value: x0.to_f64().unwrap_or(f64::NAN),
                min: lo.to_f64().unwrap_or(f64::NAN),
                max: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        match self.select_rows(x0) {
            RowSelection::Single(i) => self.row_interpolant(i)?.eval(locs, out)?,
            RowSelection::Blend { lo, t } => {
                let below = self.row_interpolant(lo)?;
                let above = self.row_interpolant(lo + 1)?;
                for (o, &loc) in out.iter_mut().zip(locs) {
                    let y0 = below.eval_one(loc);
                    let y1 = above.eval_one(loc);
                    *o = y0 + t * (y1 - y0);
                }
            }
        }

        Ok(())
    }

    /// Resolve which rows contribute at `x0`, clamping to the edge rows
    /// outside the native span.
    fn select_rows(&self, x0: T) -> RowSelection<T> {
        let n = self.x0.len();

        // Bisection search; `i` is the first row not below `x0`
        let i = self.x0.partition_point(|v| *v < x0);

        let selection = if i < n && self.x0[i] == x0 {
            RowSelection::Single(i)
        } else if i == 0 {
            RowSelection::Single(0)
        } else if i == n {
            RowSelection::Single(n - 1)
        } else {
            let (xa, xb) = (self.x0[i - 1], self.x0[i]);
            RowSelection::Blend {
                lo: i - 1,
                t: (x0 - xa) / (xb - xa),
            }
        };
        match selection {
            RowSelection::Single(i) => trace!("x0 {:?} -> row {i}", x0.to_f64()),
            RowSelection::Blend { lo, t } => {
                trace!("x0 {:?} -> rows {lo}, {} at {:?}", x0.to_f64(), lo + 1, t.to_f64())
            }
        }

        selection
    }

    /// Interpolant along x1 for stored row `i`.
    fn row_interpolant(&self, i: usize) -> Result<LinearHoldLast1D<RectilinearGrid1D<'_, T>>> {
        let vals = self.row(i).ok_or_else(|| GridError::DimensionMismatch {
            context: "row index",
            expected: self.x0.len(),
            got: i,
        })?;
        Ok(LinearHoldLast1D::new(RectilinearGrid1D::new(&self.x1, vals)?))
    }
}

/// NaN-free, with `ordered(x[i], x[i + 1])` holding for every neighbouring pair
fn monotonic<T: Float>(x: &[T], ordered: impl Fn(T, T) -> bool) -> bool {
    x.iter().all(|v| !v.is_nan()) && x.windows(2).all(|w| ordered(w[0], w[1]))
}
