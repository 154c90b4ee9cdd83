//! Tabular text output for box plots and histograms.

use std::io::{self, Write};

use fipe_catalog::format::DisplayConfig;
use fipe_stats::{box_plot::BoxPlotPoint, histogram::Histogram};

const HISTOGRAM_BAR_WIDTH: u64 = 40;

pub fn write_box_plot_table<W>(
    w: &mut W,
    heading: &str,
    points: &[BoxPlotPoint],
    display: &DisplayConfig,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{heading}")?;
    writeln!(w, "{}", "=".repeat(heading.chars().count()))?;
    if points.is_empty() {
        writeln!(w, "  (no data)")?;
        return Ok(());
    }
    writeln!(
        w,
        "  {:<12} {:>14} {:>14} {:>14} {:>14} {:>14}  Outliers",
        "Label", "Min", "Q1", "Median", "Q3", "Max",
    )?;
    writeln!(w, "  {}", "-".repeat(98))?;
    for point in points {
        let [min, q1, median, q3, max] = point.five_numbers().map(|v| display.format(v));
        let outliers = point
            .outliers
            .iter()
            .map(|&v| display.format(v))
            .collect::<Vec<_>>()
            .join("; ");
        writeln!(
            w,
            "  {:<12} {min:>14} {q1:>14} {median:>14} {q3:>14} {max:>14}  {outliers}",
            point.label.to_string(),
        )?;
    }
    Ok(())
}

pub fn write_histogram<W>(
    w: &mut W,
    heading: &str,
    histogram: &Histogram,
    display: &DisplayConfig,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{heading}")?;
    writeln!(w, "{}", "=".repeat(heading.chars().count()))?;
    let Some(max_count) = histogram.bins.iter().map(|bin| bin.count).max() else {
        writeln!(w, "  (no data)")?;
        return Ok(());
    };
    for bin in &histogram.bins {
        let bar_len = bar_length(bin.count, max_count);
        let range = format!(
            "[{} – {})",
            display.format(bin.range.start),
            display.format(bin.range.end)
        );
        writeln!(
            w,
            "  {range:<32} {:>6} {}",
            bin.count,
            "█".repeat(bar_len)
        )?;
    }
    Ok(())
}

#[expect(clippy::cast_possible_truncation)]
fn bar_length(count: u64, max_count: u64) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * HISTOGRAM_BAR_WIDTH).div_ceil(max_count) as usize
}
