//! Descriptive statistics over samples

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0 with fewer than 2 samples
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Smallest value; 0 for an empty slice
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value; 0 for an empty slice
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[70.0, 80.0, 90.0]), 80.0);
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
        assert_eq!(sample_std_dev(&[80.0, 80.0, 80.0]), 0.0);
        // deviations -10, 0, 10 -> 200 / 2 = 100 -> 10
        assert!((sample_std_dev(&[70.0, 80.0, 90.0]) - 10.0).abs() < 1e-9);
        assert!((sample_std_dev(&[2.0, 4.0]) - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[3.0, 1.5, 2.0]), 1.5);
        assert_eq!(max(&[3.0, 1.5, 2.0]), 3.0);
        assert_eq!(max(&[]), 0.0);
    }
}
