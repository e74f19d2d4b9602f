use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::GridLookup;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Strictly increasing, unevenly spaced axis spanning exactly `[lo, hi]`
pub fn rand_increasing(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    // Positive gaps, accumulated and rescaled onto the span
    let gaps: Vec<f64> = randn::<f64>(rng, n - 1)
        .into_iter()
        .map(|g| g + 0.1)
        .collect();
    let total: f64 = gaps.iter().sum();

    let mut x = Vec::with_capacity(n);
    let mut acc = 0.0;
    x.push(lo);
    for g in &gaps[..n - 2] {
        acc += g;
        x.push(lo + (hi - lo) * acc / total);
    }
    x.push(hi);
    x
}

/// An `nrows` x `ncols` table with uneven axes and random values
pub fn rand_grid(rng: &mut StdRng, nrows: usize, ncols: usize) -> GridLookup<f64> {
    let x0 = rand_increasing(rng, nrows, -10.0, 25.0);
    let x1 = rand_increasing(rng, ncols, 300.0, 900.0);
    let y = randn::<f64>(rng, nrows * ncols);
    GridLookup::new(x0, x1, y).unwrap()
}
