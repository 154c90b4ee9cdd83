//! Descriptive statistics and distribution summaries for vehicle price data.
//!
//! This crate provides the numeric core behind the price dashboard:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation,
//!   mean absolute deviation and coefficient of variation, in sample or
//!   population mode
//! - **Box plots**: five-number summaries with Tukey-fence outliers, for one
//!   sequence or for labeled groups such as model years
//! - **Histograms**: equal-width frequency distributions
//!
//! Every function is pure. Inputs are borrowed and never modified, non-finite
//! values are ignored, and degenerate inputs produce sentinel values instead of
//! errors.
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics
//! - [`box_plot`]: Box-plot points grouped by label
//! - [`histogram`]: Histogram construction
//! - [`quartiles`]: Median and quartile helpers shared by the above
//! - [`summary`]: All views of a single price sequence at once
//!
//! # Examples
//!
//! ## Computing summary statistics
//!
//! ```
//! use fipe_stats::descriptive::compute_statistics;
//!
//! let prices = [41_000.0, 43_500.0, 39_900.0, 44_100.0];
//! let stats = compute_statistics(&prices, false);
//! assert_eq!(stats.median, 42_250.0);
//! ```
//!
//! ## Building box plots per model year
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use fipe_stats::box_plot::{BoxPlotInput, Label, build_box_plot};
//!
//! let by_year = BTreeMap::from([
//!     (Label::Year(2020), vec![48_000.0, 49_500.0, 51_200.0]),
//!     (Label::Year(2021), vec![55_300.0]),
//! ]);
//! let points = build_box_plot(&BoxPlotInput::Grouped(by_year), &Label::default());
//! assert_eq!(points.len(), 2);
//! assert_eq!(points[0].median, 49_500.0);
//! ```

pub mod box_plot;
pub mod descriptive;
pub mod histogram;
pub mod quartiles;
pub mod summary;
