//! Piecewise-linear interpolation along one row.

use num_traits::Float;

use super::{Extrap, Grid1D, GridSample, Interp1D};

/// Linear interpolation with hold-last extrapolation;
/// holds the leftmost value when extrapolating low, and the rightmost
/// value when extrapolating high.
#[derive(Clone, Copy, Debug)]
pub struct LinearHoldLast1D<G> {
    grid: G,
}

impl<G> LinearHoldLast1D<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }
}

impl<T, G> Interp1D<T> for LinearHoldLast1D<G>
where
    T: Float,
    G: Grid1D<T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        let GridSample {
            x0,
            y0,
            x1,
            y1,
            extrap,
        } = self.grid.at(loc);

        match extrap {
            Extrap::Inside => {
                let slope = (y1 - y0) / (x1 - x0);
                let dx = loc - x0;
                y0 + slope * dx
            }
            Extrap::OutsideLow => y0,
            Extrap::OutsideHigh => y1,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::one_dim::{Interp1D, RectilinearGrid1D};
    use crate::testing::{rand_increasing, randn, rng_fixed_seed};

    use super::LinearHoldLast1D;

    #[test]
    fn test_linear_hold_last_1d() {
        let rng = &mut rng_fixed_seed();

        let n = 77;
        let (start, stop) = (-3.14, 314.0);

        let vals = &randn::<f64>(rng, n)[..];
        let xs = rand_increasing(rng, n, start, stop);
        let interp = LinearHoldLast1D::new(RectilinearGrid1D::new(&xs, vals).unwrap());

        // Observations under both interpolation and extrapolation
        let mut locs = randn::<f64>(rng, 3 * n);
        locs.iter_mut()
            .for_each(|x| *x = (*x * 2.0 * (stop - start)) + 2.0 * start);

        let ys = interp.eval_alloc(&locs);

        for (&loc, &y) in locs.iter().zip(&ys) {
            if loc < xs[0] {
                assert_eq!(y, vals[0]);
                continue;
            }
            if loc > xs[n - 1] {
                assert_eq!(y, vals[n - 1]);
                continue;
            }

            let j = xs.partition_point(|v| *v < loc).saturating_sub(1);
            let (xleft, xright) = (xs[j], xs[j + 1]);
            let (yleft, yright) = (vals[j], vals[j + 1]);
            assert!(loc >= xleft && loc <= xright, "Didn't find the correct cell");

            let y_expected = yleft + (yright - yleft) / (xright - xleft) * (loc - xleft);
            assert!(y <= yleft.max(yright) + 1e-12 && y >= yleft.min(yright) - 1e-12);
            assert!((y - y_expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_samples_are_reproduced_exactly() {
        let xs = [0.0_f64, 0.1, 0.3, 0.7];
        let vals = [0.1_f64, 0.3, 0.7, 1.1];
        let interp = LinearHoldLast1D::new(RectilinearGrid1D::new(&xs, &vals).unwrap());

        let mut out = [0.0; 4];
        interp.eval(&xs, &mut out).unwrap();
        assert_eq!(out, vals);
    }

    #[test]
    fn test_eval_length_mismatch() {
        let xs = [0.0_f64, 1.0];
        let interp = LinearHoldLast1D::new(RectilinearGrid1D::new(&xs, &xs).unwrap());
        let mut out = [0.0; 3];
        assert!(interp.eval(&xs, &mut out).is_err());
    }
}
