use std::io::Write as _;

use clap::Args;
use fipe_stats::descriptive::{StatsConfig, SummaryStatistics};
use serde::Serialize;

use crate::{
    command::{DisplayArg, InputArg, OutputArg},
    util::{self, Output},
    view::cards,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct StatsArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Divide the variance by N instead of n - 1
    #[arg(long)]
    pub population: bool,

    #[clap(flatten)]
    pub display: DisplayArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

/// JSON form of the statistics, with the variance divisor spelled out
#[derive(Debug, Serialize)]
pub(crate) struct StatsReport<'a> {
    pub vehicle: Option<String>,
    pub statistics: &'a SummaryStatistics,
    pub denominator: usize,
    pub denominator_label: &'static str,
}

impl<'a> StatsReport<'a> {
    pub fn new(vehicle: Option<String>, statistics: &'a SummaryStatistics) -> Self {
        Self {
            vehicle,
            statistics,
            denominator: statistics.denominator(),
            denominator_label: statistics.denominator_label(),
        }
    }
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let input = util::read_catalog_file(&arg.input.input)?;
    let prices = input.flat_prices();
    let config = StatsConfig::new(arg.population);

    tracing::info!("Computing {} statistics over {} prices...", config.mode, prices.len());
    let stats = SummaryStatistics::compute(&prices, &config);
    if stats.is_empty() {
        tracing::warn!("No valid prices in {}", arg.input.input.display());
    }

    let mut output = Output::from_output_path(arg.output.output.as_deref())?;
    if arg.output.json {
        return output.write_json(&StatsReport::new(input.vehicle_name(), &stats));
    }

    let display = arg.display.config();
    output.write_text(|w| {
        cards::write_cards(w, "Central Tendency", &cards::central_cards(&stats, &display))?;
        writeln!(w)?;
        cards::write_cards(
            w,
            "Measures of Dispersion",
            &cards::dispersion_cards(&stats, &display),
        )
    })
}
