//! Request/response handlers for a front end.
//!
//! Every handler takes the catalog explicitly; the caller owns all state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::PresetCatalog;
use crate::data::SubstatKind;
use crate::ranking::{RankedPreset, rank_presets};
use crate::scoring::{ScoreResult, SelectionSet, compute_score};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    pub substat_kinds: Vec<String>,
    pub substat_labels: BTreeMap<String, String>,
    pub median_values: BTreeMap<String, f64>,
    pub roll_values: BTreeMap<String, Vec<f64>>,
    pub characters: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateOptionsRequest {
    #[serde(default)]
    pub character: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateOptionsResponse {
    pub character: String,
    pub teammates: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeWorthRequest {
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub teammates: String,
    #[serde(default)]
    pub selections: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeWorthResponse {
    pub result: ScoreResult,
    pub display: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankWorthRequest {
    #[serde(default)]
    pub selections: BTreeMap<String, f64>,
    #[serde(default)]
    pub top_k: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPresetResponse {
    #[serde(flatten)]
    pub preset: RankedPreset,
    pub display: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankWorthResponse {
    pub ranked: Vec<RankedPresetResponse>,
}

fn build_selection(selections: &BTreeMap<String, f64>) -> Result<SelectionSet, String> {
    SelectionSet::from_named(selections.iter().map(|(name, value)| (name, *value)))
        .map_err(|err| format!("Invalid selection: {err}"))
}

pub fn bootstrap(catalog: &PresetCatalog) -> BootstrapResponse {
    let mut substat_labels = BTreeMap::new();
    let mut median_values = BTreeMap::new();
    let mut roll_values = BTreeMap::new();

    for kind in SubstatKind::ALL {
        let column = kind.column().to_string();
        substat_labels.insert(column.clone(), kind.label().to_string());
        median_values.insert(column.clone(), kind.median());
        roll_values.insert(column, kind.roll_values().to_vec());
    }

    BootstrapResponse {
        substat_kinds: SubstatKind::ALL
            .iter()
            .map(|kind| kind.column().to_string())
            .collect(),
        substat_labels,
        median_values,
        roll_values,
        characters: catalog.characters_in_order().map(str::to_string).collect(),
    }
}

pub fn teammate_options(
    catalog: &PresetCatalog,
    payload: TeammateOptionsRequest,
) -> TeammateOptionsResponse {
    let teammates = catalog
        .teammate_options_for(&payload.character)
        .map(str::to_string)
        .collect();
    TeammateOptionsResponse {
        character: payload.character,
        teammates,
    }
}

pub fn compute_worth(
    catalog: &PresetCatalog,
    payload: ComputeWorthRequest,
) -> Result<ComputeWorthResponse, String> {
    // An incomplete key wins over a bad selection payload.
    let result = if payload.character.is_empty() || payload.teammates.is_empty() {
        ScoreResult::IncompleteSelection
    } else {
        let selection = build_selection(&payload.selections)?;
        compute_score(catalog, &payload.character, &payload.teammates, &selection)
    };
    Ok(ComputeWorthResponse {
        result,
        display: result.to_string(),
    })
}

pub fn rank_worth(
    catalog: &PresetCatalog,
    payload: RankWorthRequest,
) -> Result<RankWorthResponse, String> {
    let selection = build_selection(&payload.selections)?;
    let mut ranked = rank_presets(catalog, &selection);
    if payload.top_k > 0 {
        ranked.truncate(payload.top_k);
    }
    Ok(RankWorthResponse {
        ranked: ranked
            .into_iter()
            .map(|preset| RankedPresetResponse {
                display: ScoreResult::Worth(preset.worth).to_string(),
                preset,
            })
            .collect(),
    })
}
