//! Equal-width price histograms.

use std::ops::Range;

use serde::Serialize;

use crate::quartiles;

/// Equal-width frequency distribution of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// Non-finite values are ignored. When `num_bins` is `None` the square-root
    /// rule `ceil(sqrt(n))` is used. The bins span `[min, max]` with equal
    /// widths; the last bin is widened just enough to hold `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fipe_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(&values, None);
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn new(values: &[f64], num_bins: Option<usize>) -> Self {
        let sorted = quartiles::finite_sorted(values);
        let num_bins = num_bins.unwrap_or_else(|| default_bin_count(sorted.len()));
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted finite values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        let range = max - min;
        if range <= 0.0 {
            // Every value is identical
            return Self {
                bins: vec![HistogramBin {
                    range: min..max.next_up(),
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let bin_width = range / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute boundaries from `min` to avoid accumulating rounding errors
                let start = min + bin_idx as f64 * bin_width;
                let end = if bin_idx == num_bins - 1 {
                    max.next_up()
                } else {
                    min + (bin_idx + 1) as f64 * bin_width
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted in all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Square-root rule: `ceil(sqrt(n))`, at least one bin for non-empty data.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn default_bin_count(len: usize) -> usize {
    (len as f64).sqrt().ceil() as usize
}
