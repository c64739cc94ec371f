use serde::{Deserialize, Serialize};

pub const TOTAL_SUBSTAT_KINDS: usize = 13;

pub type RollValues = &'static [f64];

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubstatKind {
    Crit,
    CritDmg,
    ER,
    Attack,
    FlatATK,
    Normal,
    Heavy,
    Skill,
    Liberation,
    Health,
    FlatHP,
    Defense,
    FlatDef,
}

pub struct SubstatData {
    // Column header used by the preset table.
    pub column: &'static str,
    pub label: &'static str,
    pub roll_values: RollValues,
}

// Percentage stats are in percent (6.3 means 6.3%); flat stats store raw values.
pub const ROLLS_CRIT_RATE: RollValues = &[6.3, 6.9, 7.5, 8.1, 8.7, 9.3, 9.9, 10.5];
pub const ROLLS_CRIT_DAMAGE: RollValues = &[12.6, 13.8, 15.0, 16.2, 17.4, 18.6, 19.8, 21.0];
pub const ROLLS_ER: RollValues = &[6.8, 7.6, 8.4, 9.2, 10.0, 10.8, 11.6, 12.4];
pub const ROLLS_PERCENT: RollValues = &[6.4, 7.1, 7.9, 8.6, 9.4, 10.1, 10.9, 11.6];
pub const ROLLS_DEFENSE: RollValues = &[8.1, 9.0, 10.0, 10.9, 11.8, 12.8, 13.8, 14.7];
pub const ROLLS_ATTACK_FLAT: RollValues = &[30.0, 40.0, 50.0, 60.0];
pub const ROLLS_DEFENSE_FLAT: RollValues = &[40.0, 50.0, 60.0, 70.0];
pub const ROLLS_HP_FLAT: RollValues = &[320.0, 360.0, 390.0, 430.0, 470.0, 510.0, 540.0, 580.0];

pub static SUBSTATS: [SubstatData; TOTAL_SUBSTAT_KINDS] = [
    SubstatData {
        column: "Crit",
        label: "Crit. Rate",
        roll_values: ROLLS_CRIT_RATE,
    },
    SubstatData {
        column: "CritDmg",
        label: "Crit. DMG",
        roll_values: ROLLS_CRIT_DAMAGE,
    },
    SubstatData {
        column: "ER",
        label: "Energy Regen",
        roll_values: ROLLS_ER,
    },
    SubstatData {
        column: "Attack",
        label: "ATK%",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "FlatATK",
        label: "ATK",
        roll_values: ROLLS_ATTACK_FLAT,
    },
    SubstatData {
        column: "Normal",
        label: "Basic Attack DMG Bonus",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "Heavy",
        label: "Heavy Attack DMG Bonus",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "Skill",
        label: "Resonance Skill DMG Bonus",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "Liberation",
        label: "Resonance Liberation DMG Bonus",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "Health",
        label: "HP%",
        roll_values: ROLLS_PERCENT,
    },
    SubstatData {
        column: "FlatHP",
        label: "HP",
        roll_values: ROLLS_HP_FLAT,
    },
    SubstatData {
        column: "Defense",
        label: "DEF%",
        roll_values: ROLLS_DEFENSE,
    },
    SubstatData {
        column: "FlatDef",
        label: "DEF",
        roll_values: ROLLS_DEFENSE_FLAT,
    },
];

// Reference magnitudes a selected value is normalized against, in declared order.
pub const MEDIAN_VALUES: [f64; TOTAL_SUBSTAT_KINDS] = [
    8.1,  // Crit
    16.2, // CritDmg
    9.2,  // ER
    8.6,  // Attack
    50.0, // FlatATK
    8.6,  // Normal
    8.6,  // Heavy
    8.6,  // Skill
    8.6,  // Liberation
    8.6,  // Health
    50.0, // FlatHP
    8.6,  // Defense
    50.0, // FlatDef
];

impl SubstatKind {
    /// Every kind, in declared order. Scoring iterates in this order.
    pub const ALL: [SubstatKind; TOTAL_SUBSTAT_KINDS] = [
        SubstatKind::Crit,
        SubstatKind::CritDmg,
        SubstatKind::ER,
        SubstatKind::Attack,
        SubstatKind::FlatATK,
        SubstatKind::Normal,
        SubstatKind::Heavy,
        SubstatKind::Skill,
        SubstatKind::Liberation,
        SubstatKind::Health,
        SubstatKind::FlatHP,
        SubstatKind::Defense,
        SubstatKind::FlatDef,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn data(self) -> &'static SubstatData {
        &SUBSTATS[self.index()]
    }

    pub fn column(self) -> &'static str {
        self.data().column
    }

    pub fn label(self) -> &'static str {
        self.data().label
    }

    pub const fn median(self) -> f64 {
        MEDIAN_VALUES[self.index()]
    }

    pub fn roll_values(self) -> RollValues {
        self.data().roll_values
    }

    /// Matches a column header, ignoring surrounding whitespace.
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| kind.column() == name)
    }
}

impl std::fmt::Display for SubstatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
