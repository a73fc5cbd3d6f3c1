//! Sample statistics

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction (divides by `n - 1`).
///
/// Returns `0.0` for fewer than two values.
pub fn stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let variance = values.iter().map(|&x| (x - avg).powi(2)).sum::<f64>() / (n - 1) as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;
    use statrs::statistics::Statistics;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[rstest]
    #[case(Vec::new(), 0.0)]
    #[case(vec![42.0], 0.0)]
    #[case(vec![-7.5], 0.0)]
    #[case(vec![1.0, 1.0, 1.0], 0.0)]
    #[case(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 2.138089935299395)]
    fn test_stdev_cases(#[case] values: Vec<f64>, #[case] expected: f64) {
        assert_relative_eq!(stdev(&values), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_stdev_matches_statrs() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2usize, 3, 10, 250] {
            let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let expected = values.iter().std_dev();
            assert_relative_eq!(stdev(&values), expected, max_relative = 1e-10);
        }
    }
}
