use clap::Args;
use fipe_stats::histogram::Histogram;

use crate::{
    command::{DisplayArg, InputArg, OutputArg},
    util::{self, Output},
    view::tables,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Number of bins (default: ceil(sqrt(n)))
    #[arg(long)]
    pub bins: Option<usize>,

    #[clap(flatten)]
    pub display: DisplayArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let input = util::read_catalog_file(&arg.input.input)?;
    let histogram = Histogram::new(&input.flat_prices(), arg.bins);
    tracing::info!("Built histogram with {} bins", histogram.bins.len());

    let mut output = Output::from_output_path(arg.output.output.as_deref())?;
    if arg.output.json {
        return output.write_json(&histogram);
    }

    let display = arg.display.config();
    output.write_text(|w| tables::write_histogram(w, "Price Distribution", &histogram, &display))
}
