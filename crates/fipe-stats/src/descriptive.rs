//! Summary statistics of a price sequence in sample or population mode.

use serde::{Deserialize, Serialize};

use crate::quartiles;

/// Divisor convention used for the variance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum VarianceMode {
    /// Divide by `max(1, n - 1)`.
    #[default]
    #[display("sample")]
    Sample,
    /// Divide by `N`.
    #[display("population")]
    Population,
}

/// Per-call configuration for [`SummaryStatistics::compute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    pub mode: VarianceMode,
}

impl StatsConfig {
    #[must_use]
    pub fn new(population: bool) -> Self {
        let mode = if population {
            VarianceMode::Population
        } else {
            VarianceMode::Sample
        };
        Self { mode }
    }
}

/// Summary statistics of a price sequence.
///
/// When no finite value is available every metric and intermediate sum is
/// `f64::NAN` and `count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Number of finite observations used.
    pub count: usize,
    /// Variance convention used.
    pub mode: VarianceMode,
    /// The arithmetic mean (average) of the observations.
    pub mean: f64,
    /// The middle value, or the average of the two middle values for an even count.
    pub median: f64,
    /// Sum of squared deviations divided by [`SummaryStatistics::denominator`].
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
    /// Mean absolute deviation around the mean. Always divided by `count`,
    /// whatever the [`VarianceMode`].
    pub mean_absolute_deviation: f64,
    /// Standard deviation as a percentage of the mean. Zero when the mean is zero.
    pub coefficient_of_variation: f64,
    /// `∑xi`
    pub sum: f64,
    /// `∑(xi − x̄)²`
    pub sum_of_squared_deviations: f64,
    /// `∑|xi − x̄|`
    pub sum_of_absolute_deviations: f64,
}

impl SummaryStatistics {
    /// Computes summary statistics from unsorted values.
    ///
    /// Non-finite values are dropped and the remaining values are sorted in a
    /// private copy; `values` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fipe_stats::descriptive::{StatsConfig, SummaryStatistics};
    /// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    /// let stats = SummaryStatistics::compute(&values, &StatsConfig::new(true));
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.median, 4.5);
    /// assert_eq!(stats.variance, 4.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[must_use]
    pub fn compute(values: &[f64], config: &StatsConfig) -> Self {
        let sorted = quartiles::finite_sorted(values);
        Self::from_sorted(&sorted, config)
    }

    /// Computes summary statistics from pre-sorted finite values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], config: &StatsConfig) -> Self {
        let count = sorted_values.len();
        if count == 0 {
            return Self::undefined(config.mode);
        }

        let n = count as f64;
        let sum = sorted_values.iter().sum::<f64>();
        let mean = sum / n;
        let median = quartiles::median(sorted_values);

        let sum_of_squared_deviations = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>();
        let sum_of_absolute_deviations = sorted_values.iter().map(|v| (v - mean).abs()).sum::<f64>();

        let variance = sum_of_squared_deviations / denominator(count, config.mode) as f64;
        let std_dev = variance.sqrt();
        let mean_absolute_deviation = sum_of_absolute_deviations / n;
        let coefficient_of_variation = if mean == 0.0 {
            0.0
        } else {
            (std_dev / mean) * 100.0
        };

        Self {
            count,
            mode: config.mode,
            mean,
            median,
            variance,
            std_dev,
            mean_absolute_deviation,
            coefficient_of_variation,
            sum,
            sum_of_squared_deviations,
            sum_of_absolute_deviations,
        }
    }

    fn undefined(mode: VarianceMode) -> Self {
        Self {
            count: 0,
            mode,
            mean: f64::NAN,
            median: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
            mean_absolute_deviation: f64::NAN,
            coefficient_of_variation: f64::NAN,
            sum: f64::NAN,
            sum_of_squared_deviations: f64::NAN,
            sum_of_absolute_deviations: f64::NAN,
        }
    }

    /// Returns `true` if there were no finite observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The divisor used for the variance.
    ///
    /// In sample mode this is clamped to at least 1 so a single observation
    /// yields a variance of zero instead of a division by zero.
    #[must_use]
    pub fn denominator(&self) -> usize {
        denominator(self.count, self.mode)
    }

    /// Symbolic name of the variance divisor.
    #[must_use]
    pub fn denominator_label(&self) -> &'static str {
        match self.mode {
            VarianceMode::Sample => "n - 1",
            VarianceMode::Population => "N",
        }
    }

    /// Conventional symbol for the standard deviation (`s` or `σ`).
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self.mode {
            VarianceMode::Sample => "s",
            VarianceMode::Population => "σ",
        }
    }
}

fn denominator(count: usize, mode: VarianceMode) -> usize {
    match mode {
        VarianceMode::Sample => usize::max(1, count.saturating_sub(1)),
        VarianceMode::Population => count,
    }
}

/// Computes summary statistics, choosing the population convention when
/// `population` is `true`.
///
/// # Examples
///
/// ```
/// # use fipe_stats::descriptive::compute_statistics;
/// let stats = compute_statistics(&[5.0], false);
/// assert_eq!(stats.variance, 0.0);
/// ```
#[must_use]
pub fn compute_statistics(values: &[f64], population: bool) -> SummaryStatistics {
    SummaryStatistics::compute(values, &StatsConfig::new(population))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    mod degenerate_input {
        use super::*;

        #[test]
        fn test_empty_yields_nan_for_every_metric() {
            for population in [false, true] {
                let stats = compute_statistics(&[], population);
                assert_eq!(stats.count, 0);
                assert!(stats.is_empty());
                assert!(stats.mean.is_nan());
                assert!(stats.median.is_nan());
                assert!(stats.variance.is_nan());
                assert!(stats.std_dev.is_nan());
                assert!(stats.mean_absolute_deviation.is_nan());
                assert!(stats.coefficient_of_variation.is_nan());
            }
        }

        #[test]
        fn test_only_non_finite_values_is_empty() {
            let stats = compute_statistics(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY], false);
            assert!(stats.is_empty());
            assert!(stats.mean.is_nan());
        }

        #[test]
        fn test_single_value_sample_variance_is_zero() {
            let stats = compute_statistics(&[5.0], false);
            assert_eq!(stats.variance, 0.0);
            assert_eq!(stats.std_dev, 0.0);
            assert_eq!(stats.denominator(), 1);
            assert_eq!(stats.mean, 5.0);
            assert_eq!(stats.median, 5.0);
            assert_eq!(stats.coefficient_of_variation, 0.0);
        }

        #[test]
        fn test_single_value_population_variance_is_zero() {
            let stats = compute_statistics(&[5.0], true);
            assert_eq!(stats.variance, 0.0);
            assert_eq!(stats.denominator(), 1);
        }

        #[test]
        fn test_zero_mean_gives_zero_cv() {
            let stats = compute_statistics(&[-3.0, 3.0], false);
            assert_eq!(stats.mean, 0.0);
            assert!(stats.std_dev > 0.0);
            assert_eq!(stats.coefficient_of_variation, 0.0);
        }

        #[test]
        fn test_non_finite_values_are_dropped() {
            let stats = compute_statistics(&[1.0, f64::NAN, 2.0, f64::INFINITY, 3.0], false);
            assert_eq!(stats.count, 3);
            assert_eq!(stats.mean, 2.0);
            assert_eq!(stats.median, 2.0);
            assert_eq!(stats.variance, 1.0);
        }
    }

    mod metrics {
        use super::*;

        #[test]
        fn test_sample_mode() {
            let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
            let stats = compute_statistics(&values, false);
            assert_eq!(stats.mode, VarianceMode::Sample);
            assert_eq!(stats.count, 8);
            assert_eq!(stats.sum, 40.0);
            assert_eq!(stats.mean, 5.0);
            assert_eq!(stats.median, 4.5);
            assert_eq!(stats.sum_of_squared_deviations, 32.0);
            assert_eq!(stats.denominator(), 7);
            assert_close(stats.variance, 32.0 / 7.0);
            assert_close(stats.std_dev, (32.0_f64 / 7.0).sqrt());
            assert_close(stats.coefficient_of_variation, (32.0_f64 / 7.0).sqrt() / 5.0 * 100.0);
        }

        #[test]
        fn test_population_mode() {
            let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
            let stats = compute_statistics(&values, true);
            assert_eq!(stats.mode, VarianceMode::Population);
            assert_eq!(stats.denominator(), 8);
            assert_eq!(stats.variance, 4.0);
            assert_eq!(stats.std_dev, 2.0);
            assert_eq!(stats.coefficient_of_variation, 40.0);
        }

        #[test]
        fn test_mean_absolute_deviation_ignores_mode() {
            let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
            let sample = compute_statistics(&values, false);
            let population = compute_statistics(&values, true);
            // |x - 5| = 3, 1, 1, 1, 0, 0, 2, 4
            assert_eq!(sample.sum_of_absolute_deviations, 12.0);
            assert_eq!(sample.mean_absolute_deviation, 1.5);
            assert_eq!(population.mean_absolute_deviation, 1.5);
            assert_ne!(sample.variance, population.variance);
        }

        #[test]
        fn test_median_of_unsorted_input() {
            assert_eq!(compute_statistics(&[4.0, 1.0, 3.0, 2.0], false).median, 2.5);
            assert_eq!(compute_statistics(&[3.0, 1.0, 2.0], false).median, 2.0);
        }

        #[test]
        fn test_labels_follow_mode() {
            let sample = compute_statistics(&[1.0, 2.0], false);
            let population = compute_statistics(&[1.0, 2.0], true);
            assert_eq!(sample.denominator_label(), "n - 1");
            assert_eq!(sample.symbol(), "s");
            assert_eq!(population.denominator_label(), "N");
            assert_eq!(population.symbol(), "σ");
        }

        #[test]
        fn test_default_config_is_sample() {
            assert_eq!(StatsConfig::default().mode, VarianceMode::Sample);
            assert_eq!(StatsConfig::new(false), StatsConfig::default());
        }
    }

    mod purity {
        use super::*;

        #[test]
        fn test_repeated_calls_are_identical_and_input_is_unchanged() {
            let values = vec![52_000.0, 48_500.0, 61_250.0, 47_900.0, 55_100.0];
            let snapshot = values.clone();
            let first = compute_statistics(&values, false);
            let second = compute_statistics(&values, false);
            assert_eq!(first, second);
            assert_eq!(values, snapshot);
        }
    }
}
