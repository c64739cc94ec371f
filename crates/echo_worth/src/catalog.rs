use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::{debug, warn};

use crate::data::{SubstatKind, TOTAL_SUBSTAT_KINDS};

pub const CHARACTER_COLUMN: &str = "Character";
pub const TEAMMATES_COLUMN: &str = "Teammates";

/// One tokenized row of the preset table: column name to raw cell text.
///
/// Column names are trimmed on insert and on lookup. Cell text is kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl AsRef<str>, value: impl Into<String>) {
        self.fields
            .insert(column.as_ref().trim().to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = RawRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    #[error("column `{column}` is missing")]
    Missing { column: &'static str },
    #[error("column `{column}` is not numeric: {value:?}")]
    NotNumeric { column: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no preset for character {character:?} with teammates {teammates:?}")]
    NotFound {
        character: String,
        teammates: String,
    },
}

pub fn parse_cell(record: &RawRecord, kind: SubstatKind) -> Result<f64, CellError> {
    let column = kind.column();
    let raw = record.get(column).ok_or(CellError::Missing { column })?;
    let not_numeric = || CellError::NotNumeric {
        column,
        value: raw.to_string(),
    };
    // `inf` and `NaN` parse as f64 but are not usable multipliers.
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(not_numeric()),
    }
}

/// Scoring profile for one (character, teammates) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRow {
    character: String,
    teammates: String,
    multipliers: [f64; TOTAL_SUBSTAT_KINDS],
    malformed: Vec<SubstatKind>,
}

impl PresetRow {
    pub fn new(
        character: impl Into<String>,
        teammates: impl Into<String>,
        multipliers: [f64; TOTAL_SUBSTAT_KINDS],
    ) -> Self {
        let malformed = SubstatKind::ALL
            .into_iter()
            .filter(|kind| multipliers[kind.index()].is_nan())
            .collect();
        Self {
            character: character.into(),
            teammates: teammates.into(),
            multipliers,
            malformed,
        }
    }

    /// Builds a row from a raw record.
    ///
    /// A cell that is missing or not numeric becomes NaN and is recorded in
    /// `malformed_columns`; the row itself is always produced.
    pub fn from_record(record: &RawRecord) -> Self {
        let character = record.get(CHARACTER_COLUMN).unwrap_or_default();
        let teammates = record.get(TEAMMATES_COLUMN).unwrap_or_default();
        if character.is_empty() || teammates.is_empty() {
            warn!(character, teammates, "preset row has an empty key column");
        }

        let mut multipliers = [f64::NAN; TOTAL_SUBSTAT_KINDS];
        let mut malformed = Vec::new();
        for kind in SubstatKind::ALL {
            match parse_cell(record, kind) {
                Ok(value) => multipliers[kind.index()] = value,
                Err(err) => {
                    warn!(character, teammates, "malformed preset cell: {err}");
                    malformed.push(kind);
                }
            }
        }

        Self {
            character: character.to_string(),
            teammates: teammates.to_string(),
            multipliers,
            malformed,
        }
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn teammates(&self) -> &str {
        &self.teammates
    }

    pub fn multiplier(&self, kind: SubstatKind) -> f64 {
        self.multipliers[kind.index()]
    }

    pub fn multipliers(&self) -> &[f64; TOTAL_SUBSTAT_KINDS] {
        &self.multipliers
    }

    /// Columns whose multiplier could not be read and hold NaN.
    pub fn malformed_columns(&self) -> &[SubstatKind] {
        &self.malformed
    }

    pub fn is_malformed(&self) -> bool {
        !self.malformed.is_empty()
    }

    fn matches(&self, character: &str, teammates: &str) -> bool {
        self.character == character && self.teammates == teammates
    }
}

/// Preset rows in source order.
///
/// Duplicate (character, teammates) keys are kept; lookups resolve to the
/// first one.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    rows: Vec<PresetRow>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut catalog = Self::new();
        catalog.load(records);
        catalog
    }

    pub fn from_rows(rows: Vec<PresetRow>) -> Self {
        Self { rows }
    }

    /// Replaces every row with the ones built from `records`.
    pub fn load<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RawRecord>,
    {
        self.rows = records
            .into_iter()
            .map(|record| PresetRow::from_record(&record))
            .collect();
        let malformed = self.rows.iter().filter(|row| row.is_malformed()).count();
        debug!(rows = self.rows.len(), malformed, "preset catalog loaded");
    }

    pub fn rows(&self) -> &[PresetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct characters in first-seen order.
    pub fn characters_in_order(&self) -> impl Iterator<Item = &str> + '_ {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(PresetRow::character)
            .filter(move |character| seen.insert(*character))
    }

    /// Distinct teammate combinations listed for `character`, in first-seen order.
    pub fn teammate_options_for<'a>(
        &'a self,
        character: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(move |row| row.character == character)
            .map(PresetRow::teammates)
            .filter(move |teammates| seen.insert(*teammates))
    }

    /// The first row, in catalog order, whose key equals `(character, teammates)`.
    pub fn find(&self, character: &str, teammates: &str) -> Result<&PresetRow, LookupError> {
        let found = self
            .rows
            .iter()
            .find(|row| row.matches(character, teammates));
        match found {
            Some(row) => Ok(row),
            None => {
                debug!(character, teammates, "preset lookup missed");
                Err(LookupError::NotFound {
                    character: character.to_string(),
                    teammates: teammates.to_string(),
                })
            }
        }
    }
}
