//! Linear interpolation over a rectilinear 2D lookup table.
//!
//! A [`GridLookup`] holds rows keyed by a scalar `x0`, each sampling a
//! function of `x1` at the same shared `x1` values. A query at `(x0, x1)`
//! interpolates each neighbouring row along `x1`, then blends the two rows
//! linearly along `x0`.
//!
//! # Edge handling
//! * Along `x1`, queries outside the samples hold the nearest edge value.
//! * Along `x0`, queries outside the rows either clamp to the nearest edge
//!   row (`extend = true`) or fail with [`GridError::OutOfRange`].
//! * A query exactly on a stored row returns that row's interpolant
//!   without blending, so native samples come back unchanged.
//!
//! Finding the rows and the x1 cell are both bisection searches, costing
//! log2(number of rows) + log2(number of columns) per observation point.
//!
//! # Example
//! ```rust
//! use gridlookup::{GridError, GridLookup, TextFormat};
//!
//! // Rows at x0 = 1 and x0 = 3, each sampled at x1 = 0, 1, 2
//! let text = "\
//! 1 0 1.0
//! 1 1 2.0
//! 1 2 4.0
//! 3 0 3.0
//! 3 1 4.0
//! 3 2 8.0
//! ";
//! let grid = GridLookup::<f64>::parse(text, TextFormat::SingleVal).unwrap();
//!
//! // Native x1 values, interpolated between rows
//! assert_eq!(grid.value_at(2.0, None, false).unwrap(), vec![2.0, 3.0, 6.0]);
//!
//! // Arbitrary x1 values
//! assert_eq!(grid.value_at(1.0, Some(&[0.5, 1.5]), false).unwrap(), vec![1.5, 3.0]);
//!
//! // Off the end of the rows
//! assert_eq!(grid.value_at(9.0, None, true).unwrap(), vec![3.0, 4.0, 8.0]);
//! assert!(matches!(
//!     grid.value_at(9.0, None, false),
//!     Err(GridError::OutOfRange { .. })
//! ));
//! ```

pub mod error;
pub use error::{GridError, Result};

pub mod grid;
pub use grid::GridLookup;

pub mod text;
pub use text::TextFormat;

pub mod one_dim;
pub use one_dim::{RectilinearGrid1D, linear::LinearHoldLast1D};

pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
