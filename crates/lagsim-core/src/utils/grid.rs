//! Sample grids

/// `num` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// The last value is exactly `stop`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    if i == num - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// `num` values spaced evenly on a log scale from `10^start_exp` to `10^stop_exp`
pub fn logspace(start_exp: f64, stop_exp: f64, num: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, num)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_logspace_decades() {
        let xs = logspace(-3.0, 3.0, 7);
        let expected = [1e-3, 1e-2, 1e-1, 1.0, 1e1, 1e2, 1e3];
        for (x, e) in xs.iter().zip(expected) {
            assert_relative_eq!(*x, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_logspace_uniform_ratio() {
        let xs = logspace(-3.0, 3.0, 100);
        let ratio = xs[1] / xs[0];
        for pair in xs.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], ratio, max_relative = 1e-9);
        }
    }
}
