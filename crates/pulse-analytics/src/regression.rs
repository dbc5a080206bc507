//! Ordinary least-squares line fit.

use serde::{Deserialize, Serialize};

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through `points` (x, y) in closed form.
///
/// With fewer than two points the slope is 0 and the intercept is the single
/// y value (or 0 when empty). A zero denominator (all x equal) also yields
/// slope 0.
pub fn fit(points: &[(f64, f64)]) -> RegressionModel {
    let n = points.len();
    if n < 2 {
        return RegressionModel {
            slope: 0.0,
            intercept: points.first().map_or(0.0, |&(_, y)| y),
        };
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / n;
    RegressionModel { slope, intercept }
}

/// Fit `values` against x = 1..=n.
pub fn fit_sequential(values: &[f64]) -> RegressionModel {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| ((i + 1) as f64, y))
        .collect();
    fit(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let model = fit(&[(1.0, 10.0), (2.0, 12.0), (3.0, 14.0)]);
        assert_eq!(model.slope, 2.0);
        assert_eq!(model.intercept, 8.0);
        assert_eq!(model.predict(4.0), 16.0);
    }

    #[test]
    fn test_sequential_matches_explicit_x() {
        assert_eq!(
            fit_sequential(&[10.0, 12.0, 14.0]),
            fit(&[(1.0, 10.0), (2.0, 12.0), (3.0, 14.0)])
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(fit(&[]), RegressionModel { slope: 0.0, intercept: 0.0 });
        assert_eq!(fit(&[(1.0, 42.0)]), RegressionModel { slope: 0.0, intercept: 42.0 });
        let vertical = fit(&[(2.0, 1.0), (2.0, 5.0)]);
        assert_eq!(vertical.slope, 0.0);
        assert_eq!(vertical.intercept, 3.0);
    }

    #[test]
    fn test_constant_series_is_flat() {
        let model = fit_sequential(&[7.0, 7.0, 7.0, 7.0]);
        assert_eq!(model.slope, 0.0);
        assert_eq!(model.intercept, 7.0);
    }
}
