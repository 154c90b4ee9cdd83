use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fipe_catalog::format::{DisplayConfig, Locale};

use self::{
    box_plot::BoxPlotArg, histogram::HistogramArg, report::ReportArg, stats::StatsArg,
};

mod box_plot;
mod histogram;
mod report;
mod stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Show summary statistics of all prices
    Stats(#[clap(flatten)] StatsArg),
    /// Show five-number summaries and outliers
    BoxPlot(#[clap(flatten)] BoxPlotArg),
    /// Show the frequency distribution of prices
    Histogram(#[clap(flatten)] HistogramArg),
    /// Show every view of the price data at once
    Report(#[clap(flatten)] ReportArg),
}

/// Price data source
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to a JSON file with catalog records or bare prices
    pub input: PathBuf,
}

/// Number formatting options for text output
#[derive(Debug, Clone, Args)]
pub(crate) struct DisplayArg {
    /// Maximum number of fraction digits
    #[arg(long, default_value_t = 2)]
    pub precision: usize,

    /// Locale used to format numbers (pt-BR or en-US)
    #[arg(long, default_value_t = Locale::default())]
    pub locale: Locale,
}

impl DisplayArg {
    pub fn config(&self) -> DisplayConfig {
        DisplayConfig {
            precision: self.precision,
            locale: self.locale,
        }
    }
}

/// Output destination and format
#[derive(Debug, Clone, Args)]
pub(crate) struct OutputArg {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::BoxPlot(arg) => box_plot::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["fipe", "stats", "prices.json"]).unwrap();
        let Mode::Stats(arg) = args.mode else {
            panic!("expected stats mode");
        };
        assert!(!arg.population);
        assert_eq!(arg.display.config(), DisplayConfig::default());
        assert!(!arg.output.json);
        assert_eq!(arg.input.input, PathBuf::from("prices.json"));
    }

    #[test]
    fn test_box_plot_options() {
        let args = CommandArgs::try_parse_from([
            "fipe",
            "box-plot",
            "prices.json",
            "--by-year",
            "--label",
            "Todos",
            "--locale",
            "en-US",
            "--json",
        ])
        .unwrap();
        let Mode::BoxPlot(arg) = args.mode else {
            panic!("expected box-plot mode");
        };
        assert!(arg.by_year);
        assert_eq!(arg.label, "Todos");
        assert_eq!(arg.display.locale, Locale::EnUs);
        assert!(arg.output.json);
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let result =
            CommandArgs::try_parse_from(["fipe", "stats", "prices.json", "--locale", "xx"]);
        assert!(result.is_err());
    }
}
