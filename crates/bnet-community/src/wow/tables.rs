//! Fixed World of Warcraft lookup tables.
//!
//! The API reports classes, races, genders, factions and reputation
//! standings as integers. These types turn them into names and carry the
//! small amount of game knowledge accessors need (specs per class, PvP
//! bracket keys, raid difficulties).

use bnet_core::{ApiError, Result};
use std::fmt;
use std::str::FromStr;

/// Playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    DeathKnight,
    Shaman,
    Mage,
    Warlock,
    Monk,
    Druid,
    DemonHunter,
}

impl CharacterClass {
    pub fn from_id(id: u32) -> Option<Self> {
        Some(match id {
            1 => Self::Warrior,
            2 => Self::Paladin,
            3 => Self::Hunter,
            4 => Self::Rogue,
            5 => Self::Priest,
            6 => Self::DeathKnight,
            7 => Self::Shaman,
            8 => Self::Mage,
            9 => Self::Warlock,
            10 => Self::Monk,
            11 => Self::Druid,
            12 => Self::DemonHunter,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Paladin => "Paladin",
            Self::Hunter => "Hunter",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
            Self::DeathKnight => "Death Knight",
            Self::Shaman => "Shaman",
            Self::Mage => "Mage",
            Self::Warlock => "Warlock",
            Self::Monk => "Monk",
            Self::Druid => "Druid",
            Self::DemonHunter => "Demon Hunter",
        }
    }

    /// Lower-case specialization names available to the class.
    pub const fn specs(self) -> &'static [&'static str] {
        match self {
            Self::Warrior => &["arms", "fury", "protection"],
            Self::Paladin => &["holy", "protection", "retribution"],
            Self::Hunter => &["beast mastery", "marksmanship", "survival"],
            Self::Rogue => &["assassination", "outlaw", "subtlety"],
            Self::Priest => &["discipline", "holy", "shadow"],
            Self::DeathKnight => &["blood", "frost", "unholy"],
            Self::Shaman => &["elemental", "enhancement", "restoration"],
            Self::Mage => &["arcane", "fire", "frost"],
            Self::Warlock => &["affliction", "demonology", "destruction"],
            Self::Monk => &["brewmaster", "mistweaver", "windwalker"],
            Self::Druid => &["balance", "feral", "guardian", "restoration"],
            Self::DemonHunter => &["havoc", "vengeance"],
        }
    }

    /// Whether `spec` (any case) is one of the class's specializations.
    pub fn has_spec(self, spec: &str) -> bool {
        self.specs().iter().any(|s| s.eq_ignore_ascii_case(spec))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Race name for a race id, `None` for ids outside the known table.
pub const fn race_name(id: u32) -> Option<&'static str> {
    Some(match id {
        1 => "Human",
        2 => "Orc",
        3 => "Dwarf",
        4 => "Night Elf",
        5 => "Forsaken/Undead",
        6 => "Tauren",
        7 => "Gnome",
        8 => "Troll",
        9 => "Goblin",
        10 => "Blood Elf",
        11 => "Draenei",
        22 => "Worgen",
        24..=26 => "Pandaren",
        27 => "Nightborne",
        28 => "Highmountain Tauren",
        29 => "Void Elf",
        30 => "Lightforged Draenei",
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn from_id(id: u32) -> Self {
        if id == 0 { Self::Male } else { Self::Female }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    pub const fn from_id(id: u32) -> Self {
        if id == 0 { Self::Alliance } else { Self::Horde }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alliance => "Alliance",
            Self::Horde => "Horde",
        })
    }
}

/// Reputation standing, ordered from `Hated` to `Exalted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standing {
    Hated,
    Hostile,
    Unfriendly,
    Neutral,
    Friendly,
    Honored,
    Revered,
    Exalted,
}

impl Standing {
    const ALL: [Self; 8] = [
        Self::Hated,
        Self::Hostile,
        Self::Unfriendly,
        Self::Neutral,
        Self::Friendly,
        Self::Honored,
        Self::Revered,
        Self::Exalted,
    ];

    pub fn from_level(level: u32) -> Option<Self> {
        Self::ALL.get(level as usize).copied()
    }

    pub const fn level(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hated => "Hated",
            Self::Hostile => "Hostile",
            Self::Unfriendly => "Unfriendly",
            Self::Neutral => "Neutral",
            Self::Friendly => "Friendly",
            Self::Honored => "Honored",
            Self::Revered => "Revered",
            Self::Exalted => "Exalted",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standing {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|standing| standing.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ApiError::invalid_argument(format!("unknown reputation standing '{s}'")))
    }
}

/// Raid difficulty used by progression lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Lfr,
    Normal,
    Heroic,
    Mythic,
}

impl Difficulty {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Lfr => "lfr",
            Self::Normal => "normal",
            Self::Heroic => "heroic",
            Self::Mythic => "mythic",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Difficulty {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lfr" => Ok(Self::Lfr),
            "normal" => Ok(Self::Normal),
            "heroic" => Ok(Self::Heroic),
            "mythic" => Ok(Self::Mythic),
            _ => Err(ApiError::invalid_argument(format!(
                "unknown difficulty '{s}', expected lfr, normal, heroic or mythic"
            ))),
        }
    }
}

/// Rated PvP bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Arena2v2,
    Arena3v3,
    Rbg,
}

impl Bracket {
    /// Key of the bracket in a character's `pvp.brackets` object.
    pub const fn character_key(self) -> &'static str {
        match self {
            Self::Arena2v2 => "ARENA_BRACKET_2v2",
            Self::Arena3v3 => "ARENA_BRACKET_3v3",
            Self::Rbg => "ARENA_BRACKET_RBG",
        }
    }

    /// Path segment of the bracket's leaderboard.
    pub const fn leaderboard_segment(self) -> &'static str {
        match self {
            Self::Arena2v2 => "2v2",
            Self::Arena3v3 => "3v3",
            Self::Rbg => "rbg",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.leaderboard_segment())
    }
}

impl FromStr for Bracket {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "2v2" => Ok(Self::Arena2v2),
            "3v3" => Ok(Self::Arena3v3),
            "rbg" => Ok(Self::Rbg),
            _ => Err(ApiError::invalid_argument(format!(
                "unknown PvP bracket '{s}', expected 2v2, 3v3 or rbg"
            ))),
        }
    }
}

/// Group role of a guild member's active specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Dps,
    Tank,
    Healer,
}

impl Role {
    /// Role name as reported in `spec.role`.
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::Dps => "DPS",
            Self::Tank => "TANK",
            Self::Healer => "HEALING",
        }
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dps" => Ok(Self::Dps),
            "tank" => Ok(Self::Tank),
            "healer" | "healing" => Ok(Self::Healer),
            _ => Err(ApiError::invalid_argument(format!(
                "unknown role '{s}', expected dps, tank or healer"
            ))),
        }
    }
}
