//! Statistics, box plot and histogram of one price sequence, computed from a single sort.

use serde::Serialize;

use crate::{
    box_plot::{BoxPlotPoint, Label},
    descriptive::{StatsConfig, SummaryStatistics},
    histogram::{self, Histogram},
    quartiles,
};

/// Everything the dashboard renders for one flat price sequence.
///
/// This structure combines:
/// - Summary statistics for the statistics cards
/// - A single box-plot point for the overall distribution chart
/// - A histogram for the frequency chart
///
/// # Examples
///
/// ```
/// use fipe_stats::{box_plot::Label, descriptive::StatsConfig, summary::PriceDistribution};
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let dist = PriceDistribution::compute(&values, &StatsConfig::default(), Label::default(), None);
///
/// assert_eq!(dist.stats.mean, 5.5);
/// assert_eq!(dist.box_plot.unwrap().median, 5.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDistribution {
    pub stats: SummaryStatistics,
    /// `None` if there is no finite value.
    pub box_plot: Option<BoxPlotPoint>,
    pub histogram: Histogram,
}

impl PriceDistribution {
    /// Computes every view of `values`, sorting a single private copy.
    ///
    /// # Arguments
    ///
    /// * `values` - Raw observations; non-finite values are dropped
    /// * `config` - Variance convention for the statistics
    /// * `label` - Label of the box-plot point
    /// * `hist_num_bins` - Number of histogram bins, or `None` for `ceil(sqrt(n))`
    #[must_use]
    pub fn compute(
        values: &[f64],
        config: &StatsConfig,
        label: Label,
        hist_num_bins: Option<usize>,
    ) -> Self {
        let sorted = quartiles::finite_sorted(values);
        let num_bins = hist_num_bins.unwrap_or_else(|| histogram::default_bin_count(sorted.len()));

        Self {
            stats: SummaryStatistics::from_sorted(&sorted, config),
            box_plot: BoxPlotPoint::from_sorted(label, &sorted),
            histogram: Histogram::from_sorted(&sorted, num_bins),
        }
    }
}
