//! Vehicle price catalog data as consumed by the statistics core.
//!
//! The catalog serves one reference price per model year as a formatted
//! Brazilian real string. This crate turns such records into plain numbers and
//! model-year groups for [`fipe_stats`], and formats computed values for
//! display.
//!
//! - [`record`]: Catalog records, input files and grouping by model year
//! - [`price`]: Parsing of `"R$ 123.456,78"` strings
//! - [`format`]: Locale-aware number formatting
//!
//! # Examples
//!
//! ```
//! use fipe_catalog::record::CatalogInput;
//! use fipe_stats::descriptive::compute_statistics;
//!
//! let json = r#"[
//!     {"Valor": "R$ 40.000,00", "AnoModelo": 2019},
//!     {"Valor": "R$ 44.000,00", "AnoModelo": 2020}
//! ]"#;
//! let input: CatalogInput = serde_json::from_str(json)?;
//! let stats = compute_statistics(&input.flat_prices(), false);
//! assert_eq!(stats.mean, 42_000.0);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod format;
pub mod price;
pub mod record;
