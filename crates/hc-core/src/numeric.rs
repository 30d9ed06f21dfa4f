/// Floating point type used throughout system
pub type Real = f64;

/// Uniformly spaced points from `start` to `end` inclusive.
///
/// Returns a single-element vector when `num_points <= 1`. The final point is
/// forced to exactly `end` so sweep boundaries are hit without rounding drift.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    if num_points <= 1 {
        return vec![start];
    }

    let mut points = Vec::with_capacity(num_points);
    let delta = (end - start) / (num_points - 1) as f64;

    for i in 0..num_points {
        points.push(start + i as f64 * delta);
    }

    points[num_points - 1] = end;
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linspace_eleven_points() {
        let points = linspace(0.0, 40.0, 11);
        assert_eq!(points.len(), 11);
        assert!((points[0] - 0.0).abs() < 1e-12);
        assert!((points[5] - 20.0).abs() < 1e-12);
        assert_eq!(points[10], 40.0);
    }

    #[test]
    fn linspace_single_point() {
        let points = linspace(3.0, 7.0, 1);
        assert_eq!(points, vec![3.0]);
    }

    proptest! {
        #[test]
        fn linspace_hits_both_endpoints(start in -100.0f64..100.0, span in 0.1f64..100.0, n in 2usize..50) {
            let end = start + span;
            let points = linspace(start, end, n);
            prop_assert_eq!(points.len(), n);
            prop_assert!((points[0] - start).abs() < 1e-9);
            prop_assert_eq!(points[n - 1], end);
        }
    }
}
