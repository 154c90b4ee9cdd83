//! Statistics cards
//!
//! Each card shows one metric with its formula, the inputs it was computed
//! from and the calculation itself.

use std::io::{self, Write};

use fipe_catalog::format::DisplayConfig;
use fipe_stats::descriptive::SummaryStatistics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new<I>(title: &'static str, lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            title,
            lines: lines.into_iter().collect(),
        }
    }
}

/// Cards for the measures of central tendency (mean, median).
pub fn central_cards(stats: &SummaryStatistics, display: &DisplayConfig) -> Vec<StatCard> {
    let fmt = |v: f64| display.format(v);
    let n = stats.count;
    vec![
        StatCard {
            title: "Mean",
            value: fmt(stats.mean),
            sections: vec![
                Section::new("Formula", ["x̄ = (∑xi) / n".to_owned()]),
                Section::new("Where", [format!("∑xi = {}", fmt(stats.sum)), format!("n = {n}")]),
                Section::new("Result", [format!("x̄ = {}", fmt(stats.mean))]),
            ],
        },
        StatCard {
            title: "Median",
            value: fmt(stats.median),
            sections: vec![
                Section::new(
                    "Definition",
                    ["Middle value splitting the sample into two equal halves".to_owned()],
                ),
                Section::new("Result", [format!("Median = {}", fmt(stats.median))]),
            ],
        },
    ]
}

/// Cards for the measures of dispersion (variance, standard deviation, mean
/// absolute deviation, coefficient of variation).
pub fn dispersion_cards(stats: &SummaryStatistics, display: &DisplayConfig) -> Vec<StatCard> {
    let fmt = |v: f64| display.format(v);
    let sym = stats.symbol();
    let label = stats.denominator_label();
    let denom = stats.denominator();
    let n = stats.count;

    let variance_inputs = || {
        Section::new(
            "Where",
            [
                format!("x̄ = {}", fmt(stats.mean)),
                format!("{label} = {denom}"),
                format!("∑(xi − x̄)² = {}", fmt(stats.sum_of_squared_deviations)),
            ],
        )
    };

    vec![
        StatCard {
            title: "Variance",
            value: fmt(stats.variance),
            sections: vec![
                Section::new("Formula", [format!("{sym}² = ∑(xi − x̄)² / {label}")]),
                variance_inputs(),
                Section::new(
                    "Calculation",
                    [format!(
                        "{sym}² = {} / {denom} → {}",
                        fmt(stats.sum_of_squared_deviations),
                        fmt(stats.variance)
                    )],
                ),
            ],
        },
        StatCard {
            title: "Standard Deviation",
            value: fmt(stats.std_dev),
            sections: vec![
                Section::new("Formula", [format!("{sym} = √( ∑(xi − x̄)² / {label} )")]),
                variance_inputs(),
                Section::new(
                    "Calculation",
                    [format!(
                        "{sym} = √{} = {}",
                        fmt(stats.variance),
                        fmt(stats.std_dev)
                    )],
                ),
            ],
        },
        StatCard {
            title: "Mean Absolute Deviation",
            value: fmt(stats.mean_absolute_deviation),
            sections: vec![
                Section::new("Formula", ["MAD = ∑ |xi − x̄| / n".to_owned()]),
                Section::new(
                    "Where",
                    [
                        format!("x̄ = {}", fmt(stats.mean)),
                        format!("n = {n}"),
                        format!("∑ |xi − x̄| = {}", fmt(stats.sum_of_absolute_deviations)),
                    ],
                ),
                Section::new(
                    "Calculation",
                    [format!(
                        "MAD = {} / {n} → {}",
                        fmt(stats.sum_of_absolute_deviations),
                        fmt(stats.mean_absolute_deviation)
                    )],
                ),
            ],
        },
        StatCard {
            title: "Coefficient of Variation (CV)",
            value: format!("{}%", fmt(stats.coefficient_of_variation)),
            sections: vec![
                Section::new("Formula", [format!("CV = ({sym} / x̄) × 100%")]),
                Section::new(
                    "Where",
                    [
                        format!("{sym} = {}", fmt(stats.std_dev)),
                        format!("x̄ = {}", fmt(stats.mean)),
                    ],
                ),
                Section::new(
                    "Calculation",
                    [format!(
                        "CV = ({} / {}) × 100% = {}%",
                        fmt(stats.std_dev),
                        fmt(stats.mean),
                        fmt(stats.coefficient_of_variation)
                    )],
                ),
            ],
        },
    ]
}

pub fn write_cards<W>(w: &mut W, heading: &str, cards: &[StatCard]) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{heading}")?;
    writeln!(w, "{}", "=".repeat(heading.chars().count()))?;
    for card in cards {
        writeln!(w)?;
        writeln!(w, "  {}: {}", card.title, card.value)?;
        for section in &card.sections {
            writeln!(w, "    {}", section.title)?;
            for line in &section.lines {
                writeln!(w, "      {line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fipe_catalog::format::Locale;
    use fipe_stats::descriptive::compute_statistics;

    use super::*;

    #[test]
    fn test_central_cards() {
        let stats = compute_statistics(&[1_000.0, 2_000.0, 4_500.0], false);
        let cards = central_cards(&stats, &DisplayConfig::default());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Mean");
        assert_eq!(cards[0].value, "2.500");
        assert_eq!(cards[1].value, "2.000");
    }

    #[test]
    fn test_dispersion_cards_sample_mode() {
        let stats = compute_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], false);
        let cards = dispersion_cards(&stats, &DisplayConfig::default());
        let titles = cards.iter().map(|c| c.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "Variance",
                "Standard Deviation",
                "Mean Absolute Deviation",
                "Coefficient of Variation (CV)"
            ]
        );
        assert_eq!(cards[0].value, "4,57");
        assert_eq!(cards[0].sections[0].lines, ["s² = ∑(xi − x̄)² / n - 1"]);
        assert!(cards[0].sections[1].lines.contains(&"n - 1 = 7".to_owned()));
        assert_eq!(cards[2].value, "1,5");
        assert!(cards[3].value.ends_with('%'));
    }

    #[test]
    fn test_dispersion_cards_population_mode() {
        let stats = compute_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], true);
        let display = DisplayConfig {
            precision: 1,
            locale: Locale::EnUs,
        };
        let cards = dispersion_cards(&stats, &display);
        assert_eq!(cards[0].value, "4");
        assert_eq!(cards[0].sections[0].lines, ["σ² = ∑(xi − x̄)² / N"]);
        assert_eq!(cards[1].value, "2");
        assert_eq!(cards[3].value, "40%");
    }

    #[test]
    fn test_write_cards() {
        let stats = compute_statistics(&[10.0], false);
        let cards = central_cards(&stats, &DisplayConfig::default());
        let mut buf = Vec::new();
        write_cards(&mut buf, "Central Tendency", &cards).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Central Tendency\n================\n"));
        assert!(text.contains("  Mean: 10\n"));
        assert!(text.contains("      n = 1\n"));
    }
}
