mod catalog;
mod commands;
mod data;
mod ranking;
mod scoring;
mod source;

pub use catalog::{
    CHARACTER_COLUMN, CellError, LookupError, PresetCatalog, PresetRow, RawRecord,
    TEAMMATES_COLUMN, parse_cell,
};
pub use commands::{
    BootstrapResponse, ComputeWorthRequest, ComputeWorthResponse, RankWorthRequest,
    RankWorthResponse, RankedPresetResponse, TeammateOptionsRequest, TeammateOptionsResponse,
    bootstrap, compute_worth, rank_worth, teammate_options,
};
pub use data::{MEDIAN_VALUES, RollValues, SubstatData, SubstatKind, TOTAL_SUBSTAT_KINDS};
pub use ranking::{RankedPreset, rank_presets};
pub use scoring::{
    INCOMPLETE_SELECTION, PRESET_NOT_FOUND, PresetScorer, SCORE_MULTIPLIER, ScoreResult, Scorer,
    SelectionError, SelectionSet, compute_score, evaluate,
};
pub use source::{
    SourceError, load_catalog_or_empty, read_records, read_records_from_path,
    read_records_from_str,
};
