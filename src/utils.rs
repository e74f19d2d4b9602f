//! Convenience methods for laying out lookup axes.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// With `n == 1` the single value is `start`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let steps = T::from(n - 1).unwrap_or_else(T::nan);
    let dx: T = (stop - start) / steps;
    (0..n - 1)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .chain(core::iter::once(stop))
        .collect()
}

#[cfg(test)]
mod test {
    use super::linspace;

    #[test]
    fn test_linspace_endpoints() {
        let x = linspace(-1.0_f64, 3.0, 5);
        assert_eq!(x, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);

        assert_eq!(linspace(2.0_f32, 9.0, 1), vec![2.0]);
        assert!(linspace(2.0_f32, 9.0, 0).is_empty());
    }
}
