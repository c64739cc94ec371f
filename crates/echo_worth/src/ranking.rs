use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::PresetCatalog;
use crate::scoring::{SelectionSet, evaluate};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPreset {
    pub character: String,
    pub teammates: String,
    pub worth: f64,
}

// Descending by worth, NaN last.
fn by_worth_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Scores `selection` against every preset row, best first.
///
/// Rows with equal worth stay in catalog order.
pub fn rank_presets(catalog: &PresetCatalog, selection: &SelectionSet) -> Vec<RankedPreset> {
    let mut ranked: Vec<RankedPreset> = catalog
        .rows()
        .par_iter()
        .map(|row| RankedPreset {
            character: row.character().to_string(),
            teammates: row.teammates().to_string(),
            worth: evaluate(row, selection),
        })
        .collect();
    ranked.sort_by(|a, b| by_worth_desc(a.worth, b.worth));
    ranked
}
