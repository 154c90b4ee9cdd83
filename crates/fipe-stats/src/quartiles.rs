//! Median and quartile helpers shared by the statistics engine and the box-plot builder.

use serde::Serialize;

/// Copies the finite values of `values` into a new vector sorted in ascending order.
///
/// NaN and infinite values are dropped. The input slice is never modified.
///
/// # Examples
///
/// ```
/// use fipe_stats::quartiles::finite_sorted;
///
/// let values = [3.0, f64::NAN, 1.0, f64::INFINITY, 2.0];
/// assert_eq!(finite_sorted(&values), vec![1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn finite_sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean of `values`. Returns `f64::NAN` if the input is empty.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of sorted data.
///
/// With an odd count this is the middle element; with an even count it is the
/// average of the two middle elements. No interpolation is performed.
///
/// # Returns
///
/// The median, or `f64::NAN` if the input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use fipe_stats::quartiles::median;
///
/// assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(median(&[]).is_nan());
/// ```
#[must_use]
pub fn median(sorted_values: &[f64]) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    } else {
        sorted_values[mid]
    }
}

/// First and third quartiles computed with the exclusive (Tukey) method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TukeyQuartiles {
    /// Median of the lower half.
    pub q1: f64,
    /// Median of the upper half.
    pub q3: f64,
}

impl TukeyQuartiles {
    /// Computes quartiles from sorted values.
    ///
    /// The data is split at `n / 2`. When `n` is odd the middle element belongs
    /// to neither half. A single value is its own first and third quartile.
    ///
    /// # Returns
    ///
    /// * `Some(TukeyQuartiles)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fipe_stats::quartiles::TukeyQuartiles;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    /// let quartiles = TukeyQuartiles::from_sorted(&values).unwrap();
    /// assert_eq!(quartiles.q1, 2.0);
    /// assert_eq!(quartiles.q3, 6.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        if n <= 1 {
            let only = *sorted_values.first()?;
            return Some(Self { q1: only, q3: only });
        }
        let mid = n / 2;
        let lower = &sorted_values[..mid];
        let upper = &sorted_values[mid + n % 2..];
        Some(Self {
            q1: median(lower),
            q3: median(upper),
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
