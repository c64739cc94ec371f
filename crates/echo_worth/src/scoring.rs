use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{PresetCatalog, PresetRow};
use crate::data::{SubstatKind, TOTAL_SUBSTAT_KINDS};

/// Converts the summed median ratios into a percentage. Preset multipliers are
/// fractions of one median roll, so a median roll at multiplier 1.0 is worth 100%.
pub const SCORE_MULTIPLIER: f64 = 100.0;

pub const PRESET_NOT_FOUND: &str = "Preset not found.";
pub const INCOMPLETE_SELECTION: &str = "Please select character and teammates.";

pub trait Scorer {
    /// The contribution of one substat rolled at `raw_value`.
    fn score(&self, kind: SubstatKind, raw_value: f64) -> f64;

    /// The summed contribution of every selected substat, in declared order.
    fn total(&self, selection: &SelectionSet) -> f64 {
        SubstatKind::ALL
            .into_iter()
            .map(|kind| self.score(kind, selection.get(kind)))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("unknown substat: {name}")]
    UnknownSubstat { name: String },
    #[error("invalid value for {kind}: {value}")]
    InvalidValue { kind: SubstatKind, value: f64 },
}

/// One chosen magnitude per substat; 0 means nothing is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionSet {
    values: [f64; TOTAL_SUBSTAT_KINDS],
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from `(column name, value)` pairs.
    ///
    /// Names not in the substat set and values that are negative or not finite
    /// are rejected. A later pair for the same substat replaces an earlier one.
    pub fn from_named<I, S>(pairs: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let kind = SubstatKind::from_column(name).ok_or_else(|| {
                SelectionError::UnknownSubstat {
                    name: name.to_string(),
                }
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(SelectionError::InvalidValue { kind, value });
            }
            selection.set(kind, value);
        }
        Ok(selection)
    }

    pub fn with(mut self, kind: SubstatKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    pub fn set(&mut self, kind: SubstatKind, value: f64) {
        self.values[kind.index()] = value;
    }

    pub fn get(&self, kind: SubstatKind) -> f64 {
        self.values[kind.index()]
    }

    pub fn clear(&mut self, kind: SubstatKind) {
        self.values[kind.index()] = 0.0;
    }

    pub fn clear_all(&mut self) {
        self.values = [0.0; TOTAL_SUBSTAT_KINDS];
    }

    /// True when no substat contributes.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|&v| v <= 0.0)
    }

    /// Selected substats with their values, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (SubstatKind, f64)> + '_ {
        SubstatKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|&(_, v)| v > 0.0)
    }
}

/// Scores substats against one preset's multipliers, normalized by the median table.
pub struct PresetScorer<'a> {
    row: &'a PresetRow,
}

impl<'a> PresetScorer<'a> {
    pub fn new(row: &'a PresetRow) -> Self {
        Self { row }
    }
}

impl Scorer for PresetScorer<'_> {
    fn score(&self, kind: SubstatKind, raw_value: f64) -> f64 {
        let median = kind.median();
        if raw_value > 0.0 && median > 0.0 {
            raw_value / median * self.row.multiplier(kind)
        } else {
            0.0
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Worth of `selection` under `row`, as a percentage rounded to 2 decimals.
///
/// A NaN multiplier on a selected substat makes the result NaN. Not clamped.
pub fn evaluate(row: &PresetRow, selection: &SelectionSet) -> f64 {
    let total = PresetScorer::new(row).total(selection);
    round_to_cents(total * SCORE_MULTIPLIER)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "worth", rename_all = "camelCase")]
pub enum ScoreResult {
    Worth(f64),
    NotFound,
    IncompleteSelection,
}

impl ScoreResult {
    /// What is shown after every selection has been cleared.
    pub fn cleared() -> Self {
        ScoreResult::Worth(0.0)
    }

    pub fn worth(&self) -> Option<f64> {
        match self {
            ScoreResult::Worth(worth) => Some(*worth),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreResult::Worth(worth) => write!(f, "{worth:.2}%"),
            ScoreResult::NotFound => f.write_str(PRESET_NOT_FOUND),
            ScoreResult::IncompleteSelection => f.write_str(INCOMPLETE_SELECTION),
        }
    }
}

/// Looks up the preset for `(character, teammates)` and scores `selection` against it.
///
/// An empty key short-circuits to `IncompleteSelection` before any lookup.
pub fn compute_score(
    catalog: &PresetCatalog,
    character: &str,
    teammates: &str,
    selection: &SelectionSet,
) -> ScoreResult {
    if character.is_empty() || teammates.is_empty() {
        return ScoreResult::IncompleteSelection;
    }
    match catalog.find(character, teammates) {
        Ok(row) => {
            let worth = evaluate(row, selection);
            debug!(character, teammates, worth, "computed echo worth");
            ScoreResult::Worth(worth)
        }
        Err(_) => ScoreResult::NotFound,
    }
}
