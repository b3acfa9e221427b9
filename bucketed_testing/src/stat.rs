//! Statistical tests for judging how evenly keys spread over buckets.
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chi2Statistic {
    pub chi2: f64,
    pub dof: usize,
    pub p_value: f64,
}

/// Calculates the chi-square statistic.
pub fn chi2(observed: &[f64], expected: &[f64], dof: Option<usize>) -> Chi2Statistic {
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    debug_assert!(observed.len() > 1, "At least 2 cells are required");

    let chi2 = observed
        .iter()
        .zip(expected)
        .fold(0.0, |acc, (&obs, &exp)| acc + (obs - exp).powi(2) / exp);

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = 1.0 - dist.cdf(chi2);

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test on observed cell counts.
pub fn chi2_uniformity(observed: &[f64]) -> Chi2Statistic {
    let total: f64 = observed.iter().sum();
    let expected = vec![total / observed.len() as f64; observed.len()];
    chi2(observed, &expected, None)
}

/// Performs a Chi-square uniformity test on the bucket sizes of a table.
pub fn bucket_uniformity<I: IntoIterator<Item = usize>>(bucket_sizes: I) -> Chi2Statistic {
    let observed: Vec<f64> = bucket_sizes.into_iter().map(|n| n as f64).collect();
    chi2_uniformity(&observed)
}
