use clap::Args;
use fipe_catalog::record::CatalogInput;
use fipe_stats::box_plot::{self, BoxPlotInput, BoxPlotPoint, DEFAULT_SINGLE_LABEL, Label};

use crate::{
    command::{DisplayArg, InputArg, OutputArg},
    util::{self, Output},
    view::tables,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct BoxPlotArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// One box per model year instead of a single box
    #[arg(long)]
    pub by_year: bool,

    /// Label of the single box
    #[arg(long, default_value = DEFAULT_SINGLE_LABEL)]
    pub label: String,

    #[clap(flatten)]
    pub display: DisplayArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

/// Builds the overall box (`by_year == false`) or one box per model year.
pub(crate) fn build_points(input: &CatalogInput, by_year: bool, label: &str) -> Vec<BoxPlotPoint> {
    let box_input = if by_year {
        BoxPlotInput::Grouped(input.group_by_year())
    } else {
        BoxPlotInput::Flat(input.flat_prices())
    };
    box_plot::build_box_plot(&box_input, &Label::from(label))
}

pub(crate) fn run(arg: &BoxPlotArg) -> anyhow::Result<()> {
    let input = util::read_catalog_file(&arg.input.input)?;
    let points = build_points(&input, arg.by_year, &arg.label);
    let num_outliers = points.iter().map(|p| p.outliers.len()).sum::<usize>();
    tracing::info!(
        "Built {} box-plot points with {num_outliers} outliers",
        points.len()
    );

    let mut output = Output::from_output_path(arg.output.output.as_deref())?;
    if arg.output.json {
        return output.write_json(&points);
    }

    let heading = if arg.by_year {
        "Price Distribution by Year"
    } else {
        "Price Distribution"
    };
    let display = arg.display.config();
    output.write_text(|w| tables::write_box_plot_table(w, heading, &points, &display))
}

#[cfg(test)]
mod tests {
    use fipe_catalog::record::PriceRecord;

    use super::*;

    fn record(valor: &str, year: i64) -> PriceRecord {
        PriceRecord {
            valor: valor.to_owned(),
            ano_modelo: Some(year),
            ..PriceRecord::default()
        }
    }

    #[test]
    fn test_flat_and_grouped_points() {
        let input = CatalogInput::Records(vec![
            record("R$ 50.000,00", 2021),
            record("R$ 40.000,00", 2019),
            record("R$ 42.000,00", 2019),
            record("sem preço", 2020),
        ]);

        let flat = build_points(&input, false, "Todos");
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].label, Label::from("Todos"));
        assert_eq!(flat[0].median, 42_000.0);

        let grouped = build_points(&input, true, "Todos");
        let labels = grouped.iter().map(|p| p.label.clone()).collect::<Vec<_>>();
        assert_eq!(labels, [Label::Year(2019), Label::Year(2021)]);
        assert_eq!(grouped[0].median, 41_000.0);
    }
}
