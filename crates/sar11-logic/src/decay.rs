//! Exponential decay demo curve: `N(t) = N0 · e^(−rate · t)`.

use crate::constants::decay::{DECAY_RATE, END_TIME, INITIAL_POPULATION, POINTS};

/// `points` evenly spaced samples over `[0, t_end]`, both ends included.
pub fn exponential_decay(initial: f64, rate: f64, t_end: f64, points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(0.0, initial)],
        n => {
            let dt = t_end / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = if i == n - 1 { t_end } else { i as f64 * dt };
                    (t, initial * (-rate * t).exp())
                })
                .collect()
        }
    }
}

/// The demo curve: 1000 cells decaying at 2% over 100 days, 1000 samples.
pub fn demo_curve() -> Vec<(f64, f64)> {
    exponential_decay(INITIAL_POPULATION, DECAY_RATE, END_TIME, POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let curve = exponential_decay(1000.0, 0.02, 100.0, 1000);
        assert_eq!(curve.len(), 1000);
        assert_eq!(curve[0], (0.0, 1000.0));
        let (t, n) = curve[999];
        assert_eq!(t, 100.0);
        // 1000 · e^-2
        assert!((n - 135.335_283_236_612_7).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_decrease() {
        let curve = demo_curve();
        assert!(curve.windows(2).all(|w| w[1].0 > w[0].0 && w[1].1 < w[0].1));
    }

    #[test]
    fn test_degenerate_point_counts() {
        assert!(exponential_decay(1000.0, 0.02, 100.0, 0).is_empty());
        assert_eq!(exponential_decay(1000.0, 0.02, 100.0, 1), vec![(0.0, 1000.0)]);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let curve = exponential_decay(50.0, 0.0, 10.0, 5);
        assert!(curve.iter().all(|&(_, n)| n == 50.0));
        assert_eq!(curve[2].0, 5.0);
    }
}
