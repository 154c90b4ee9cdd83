//! Full price report
//!
//! Renders the vehicle's prices, statistics cards, the overall and per-year
//! box plots and the histogram in one pass.

use std::io::{self, Write};

use clap::Args;
use fipe_catalog::{
    format::DisplayConfig,
    record::{CatalogInput, PriceRecord},
};
use fipe_stats::{
    box_plot::{BoxPlotPoint, DEFAULT_SINGLE_LABEL, Label},
    descriptive::StatsConfig,
    summary::PriceDistribution,
};
use serde::Serialize;

use crate::{
    command::{DisplayArg, InputArg, OutputArg, box_plot, stats::StatsReport},
    util::{self, Output},
    view::{cards, tables},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Divide the variance by N instead of n - 1
    #[arg(long)]
    pub population: bool,

    /// Number of histogram bins (default: ceil(sqrt(n)))
    #[arg(long)]
    pub bins: Option<usize>,

    #[clap(flatten)]
    pub display: DisplayArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    stats: StatsReport<'a>,
    box_plot: Option<&'a BoxPlotPoint>,
    box_plot_by_year: &'a [BoxPlotPoint],
    histogram: &'a fipe_stats::histogram::Histogram,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let input = util::read_catalog_file(&arg.input.input)?;
    let prices = input.flat_prices();
    if prices.is_empty() {
        tracing::warn!("No valid prices in {}", arg.input.input.display());
    }

    tracing::info!("Computing price distribution...");
    let dist = PriceDistribution::compute(
        &prices,
        &StatsConfig::new(arg.population),
        Label::from(DEFAULT_SINGLE_LABEL),
        arg.bins,
    );
    let by_year = box_plot::build_points(&input, true, DEFAULT_SINGLE_LABEL);
    tracing::info!("Price distribution computed ({} model years)", by_year.len());

    let mut output = Output::from_output_path(arg.output.output.as_deref())?;
    if arg.output.json {
        let report = Report {
            stats: StatsReport::new(input.vehicle_name(), &dist.stats),
            box_plot: dist.box_plot.as_ref(),
            box_plot_by_year: &by_year,
            histogram: &dist.histogram,
        };
        return output.write_json(&report);
    }

    let display = arg.display.config();
    output.write_text(|w| write_report(w, &input, &dist, &by_year, &display))
}

fn write_report<W>(
    w: &mut W,
    input: &CatalogInput,
    dist: &PriceDistribution,
    by_year: &[BoxPlotPoint],
    display: &DisplayConfig,
) -> io::Result<()>
where
    W: Write,
{
    if let Some(name) = input.vehicle_name() {
        writeln!(w, "Vehicle: {name}")?;
        writeln!(w)?;
    }
    if let CatalogInput::Records(records) = input
        && !records.is_empty()
    {
        write_price_list(w, records)?;
        writeln!(w)?;
    }
    if dist.stats.is_empty() {
        writeln!(w, "No valid prices to analyze.")?;
        return Ok(());
    }

    cards::write_cards(w, "Central Tendency", &cards::central_cards(&dist.stats, display))?;
    writeln!(w)?;
    cards::write_cards(
        w,
        "Measures of Dispersion",
        &cards::dispersion_cards(&dist.stats, display),
    )?;
    writeln!(w)?;
    tables::write_box_plot_table(
        w,
        "Price Distribution",
        dist.box_plot.as_slice(),
        display,
    )?;
    writeln!(w)?;
    tables::write_box_plot_table(w, "Price Distribution by Year", by_year, display)?;
    writeln!(w)?;
    tables::write_histogram(w, "Price Frequency", &dist.histogram, display)
}

fn write_price_list<W>(w: &mut W, records: &[PriceRecord]) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "Prices")?;
    writeln!(w, "======")?;
    writeln!(w, "  {:<10} {:>20}", "Year", "Price")?;
    writeln!(w, "  {}", "-".repeat(31))?;
    for record in records {
        writeln!(
            w,
            "  {:<10} {:>20}",
            record.year_label().to_string(),
            record.valor
        )?;
    }
    Ok(())
}
