//! Five-number summaries with Tukey-fence outliers, for one sequence or labeled groups.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::quartiles::{self, TukeyQuartiles};

/// Label used for a flat sequence when the caller does not supply one.
pub const DEFAULT_SINGLE_LABEL: &str = "All";

/// Multiplier applied to the IQR to obtain the Tukey fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Category label of a box-plot group.
///
/// Groups are ordered by the string form of their label, so `Year(2019)` and
/// `Text("2019".into())` sort identically.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Year(i64),
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Year(value)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::from(DEFAULT_SINGLE_LABEL)
    }
}

/// Input accepted by [`build_box_plot`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoxPlotInput {
    /// One implicit group.
    Flat(Vec<f64>),
    /// One group per label.
    Grouped(BTreeMap<Label, Vec<f64>>),
}

/// Five-number summary of one group, with the values outside the Tukey fences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotPoint {
    pub label: Label,
    /// Lower whisker: smallest inlier, or the group minimum when no inlier exists.
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Upper whisker: largest inlier, or the group maximum when no inlier exists.
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Values strictly outside the fences, in ascending order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outliers: Vec<f64>,
}

impl BoxPlotPoint {
    /// Builds a point from raw values.
    ///
    /// Non-finite values are dropped first. Returns `None` when nothing remains.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fipe_stats::box_plot::BoxPlotPoint;
    /// let point = BoxPlotPoint::new("All".into(), &[1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 100.0]).unwrap();
    /// assert_eq!(point.five_numbers(), [1.0, 2.0, 3.0, 4.0, 4.0]);
    /// assert_eq!(point.outliers, vec![100.0]);
    /// ```
    #[must_use]
    pub fn new(label: Label, values: &[f64]) -> Option<Self> {
        let sorted = quartiles::finite_sorted(values);
        Self::from_sorted(label, &sorted)
    }

    /// Builds a point from sorted values.
    ///
    /// Non-finite values are not filtered here. If no value passes the fences
    /// the whiskers fall back to the first and last value.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(label: Label, sorted_values: &[f64]) -> Option<Self> {
        let quartiles = TukeyQuartiles::from_sorted(sorted_values)?;
        let median = quartiles::median(sorted_values);

        let iqr = quartiles.iqr();
        let lower_fence = quartiles.q1 - FENCE_FACTOR * iqr;
        let upper_fence = quartiles.q3 + FENCE_FACTOR * iqr;

        let (inliers, outliers): (Vec<f64>, Vec<f64>) = sorted_values
            .iter()
            .partition(|&&v| lower_fence <= v && v <= upper_fence);

        let min = inliers.first().or(sorted_values.first()).copied()?;
        let max = inliers.last().or(sorted_values.last()).copied()?;

        Some(Self {
            label,
            min,
            q1: quartiles.q1,
            median,
            q3: quartiles.q3,
            max,
            lower_fence,
            upper_fence,
            outliers,
        })
    }

    /// `[min, q1, median, q3, max]`
    #[must_use]
    pub fn five_numbers(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }

    #[must_use]
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

/// Builds box-plot points for a flat sequence or a set of labeled groups.
///
/// A flat sequence becomes a single group named `single_label`. Groups without
/// any finite value are dropped. The result is ordered by the string form of
/// each label, compared lexicographically: `"10"` comes before `"2"`.
/// The comparison is plain byte order, not locale collation, so uppercase
/// text labels sort before lowercase ones (`"Zeta"` before `"alpha"`).
///
/// # Examples
///
/// ```
/// # use std::collections::BTreeMap;
/// # use fipe_stats::box_plot::{BoxPlotInput, Label, build_box_plot};
/// let groups = BTreeMap::from([
///     (Label::Year(2021), vec![51_000.0, 52_500.0]),
///     (Label::Year(2019), vec![43_000.0, 44_800.0]),
/// ]);
/// let points = build_box_plot(&BoxPlotInput::Grouped(groups), &Label::default());
/// assert_eq!(points[0].label, Label::Year(2019));
/// assert_eq!(points[1].label, Label::Year(2021));
/// ```
#[must_use]
pub fn build_box_plot(input: &BoxPlotInput, single_label: &Label) -> Vec<BoxPlotPoint> {
    match input {
        BoxPlotInput::Flat(values) => BoxPlotPoint::new(single_label.clone(), values)
            .into_iter()
            .collect(),
        BoxPlotInput::Grouped(groups) => {
            let mut points = groups
                .iter()
                .filter_map(|(label, values)| {
                    let point = BoxPlotPoint::new(label.clone(), values);
                    if point.is_none() {
                        tracing::debug!(%label, "dropping box-plot group without finite values");
                    }
                    point
                })
                .collect::<Vec<_>>();
            points.sort_by_cached_key(|point| point.label.to_string());
            points
        }
    }
}
