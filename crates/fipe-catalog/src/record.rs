use std::collections::BTreeMap;

use fipe_stats::box_plot::Label;
use serde::{Deserialize, Serialize};

use crate::price::{self, ParsePriceError};

/// Group label used for records without a model year.
pub const MISSING_YEAR_LABEL: &str = "Sem Ano";

/// One reference price as served by the price catalog.
///
/// Field names follow the catalog's JSON (`Valor`, `AnoModelo`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceRecord {
    /// Price string, e.g. `"R$ 45.123,00"`.
    pub valor: String,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub ano_modelo: Option<i64>,
    #[serde(default)]
    pub combustivel: Option<String>,
    #[serde(default)]
    pub codigo_fipe: Option<String>,
    #[serde(default)]
    pub mes_referencia: Option<String>,
    #[serde(default)]
    pub tipo_veiculo: Option<u32>,
    #[serde(default)]
    pub sigla_combustivel: Option<String>,
}

impl PriceRecord {
    /// Parses [`Self::valor`].
    pub fn price(&self) -> Result<f64, ParsePriceError> {
        price::parse_brl(&self.valor)
    }

    /// Group label for this record's model year.
    #[must_use]
    pub fn year_label(&self) -> Label {
        self.ano_modelo
            .map_or_else(|| Label::from(MISSING_YEAR_LABEL), Label::Year)
    }

    /// `"Marca - Modelo"`, if both are known.
    #[must_use]
    pub fn vehicle_name(&self) -> Option<String> {
        let marca = self.marca.as_deref()?;
        let modelo = self.modelo.as_deref()?;
        Some(format!("{marca} - {modelo}"))
    }
}

/// Observations loaded from a file: either full catalog records or bare prices.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CatalogInput {
    Records(Vec<PriceRecord>),
    Prices(Vec<f64>),
}

impl CatalogInput {
    /// Every parseable price, in input order.
    ///
    /// Records whose price cannot be parsed are skipped.
    #[must_use]
    pub fn flat_prices(&self) -> Vec<f64> {
        match self {
            CatalogInput::Records(records) => records.iter().filter_map(parsed_price).collect(),
            CatalogInput::Prices(prices) => prices.clone(),
        }
    }

    /// Prices grouped by model year.
    ///
    /// Records without a year are grouped under [`MISSING_YEAR_LABEL`]. Bare
    /// prices carry no year, so they all land in that group.
    #[must_use]
    pub fn group_by_year(&self) -> BTreeMap<Label, Vec<f64>> {
        match self {
            CatalogInput::Records(records) => group_by_year(records),
            CatalogInput::Prices(prices) => {
                BTreeMap::from([(Label::from(MISSING_YEAR_LABEL), prices.clone())])
            }
        }
    }

    /// Name of the vehicle, taken from the first record that has one.
    #[must_use]
    pub fn vehicle_name(&self) -> Option<String> {
        match self {
            CatalogInput::Records(records) => records.iter().find_map(PriceRecord::vehicle_name),
            CatalogInput::Prices(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            CatalogInput::Records(records) => records.len(),
            CatalogInput::Prices(prices) => prices.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups the parseable prices of `records` by model year.
#[must_use]
pub fn group_by_year(records: &[PriceRecord]) -> BTreeMap<Label, Vec<f64>> {
    let mut groups = BTreeMap::<Label, Vec<f64>>::new();
    for record in records {
        let Some(price) = parsed_price(record) else {
            continue;
        };
        groups.entry(record.year_label()).or_default().push(price);
    }
    groups
}

fn parsed_price(record: &PriceRecord) -> Option<f64> {
    match record.price() {
        Ok(price) => Some(price),
        Err(e) => {
            tracing::warn!(year = ?record.ano_modelo, "skipping record: {e}");
            None
        }
    }
}
