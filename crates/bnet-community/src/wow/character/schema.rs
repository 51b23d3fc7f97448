//! Response schema for `/wow/character/{realm}/{name}` and its fields.

use bnet_core::Document;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::wow::tables::Difficulty;

/// Base character document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub battlegroup: String,
    pub class: u32,
    pub race: u32,
    #[serde(default)]
    pub gender: u32,
    pub level: u32,
    #[serde(default)]
    pub achievement_points: u64,
    #[serde(default)]
    pub faction: u32,
    #[serde(default)]
    pub total_honorable_kills: u64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub last_modified: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievements {
    pub achievements_completed: Vec<u64>,
    pub achievements_completed_timestamp: Vec<i64>,
}

/// One completed achievement with its completion time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedAchievement {
    pub id: u64,
    pub completed_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub face_variation: u32,
    pub skin_color: u32,
    pub hair_variation: u32,
    pub hair_color: u32,
    #[serde(default)]
    pub feature_variation: u32,
    #[serde(default)]
    pub show_helm: bool,
    #[serde(default)]
    pub show_cloak: bool,
}

/// Guild summary embedded in a character document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSummary {
    pub name: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub battlegroup: String,
    pub members: u32,
    pub achievement_points: u64,
    #[serde(default)]
    pub emblem: Option<Document>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunterPet {
    pub name: String,
    #[serde(default)]
    pub creature: Option<u64>,
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub family_name: Option<String>,
}

/// Equipped gear. Slot entries (`head`, `neck`, ...) are kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Items {
    pub average_item_level: u32,
    pub average_item_level_equipped: u32,
    #[serde(flatten)]
    pub slots: BTreeMap<String, Document>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLevels {
    pub average: u32,
    pub equipped: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mounts {
    #[serde(default)]
    pub num_collected: u32,
    #[serde(default)]
    pub num_not_collected: u32,
    pub collected: Vec<Mount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub name: String,
    #[serde(default)]
    pub spell_id: u64,
    #[serde(default)]
    pub creature_id: u64,
    #[serde(default)]
    pub item_id: u64,
    #[serde(default)]
    pub quality_id: u32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_ground: bool,
    #[serde(default)]
    pub is_flying: bool,
    #[serde(default)]
    pub is_aquatic: bool,
    #[serde(default)]
    pub is_jumping: bool,
}

/// Battle pet collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPets {
    pub num_collected: u64,
    pub num_not_collected: u64,
    pub collected: Vec<CollectedPet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedPet {
    pub name: String,
    #[serde(default)]
    pub spell_id: u64,
    #[serde(default, alias = "creatureID")]
    pub creature_id: u64,
    #[serde(default)]
    pub item_id: u64,
    #[serde(default)]
    pub quality_id: u32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub stats: PetStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStats {
    pub species_id: u64,
    pub breed_id: u32,
    pub pet_quality_id: u32,
    pub level: u32,
    pub health: u32,
    pub power: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Professions {
    pub primary: Vec<Profession>,
    pub secondary: Vec<Profession>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profession {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub max: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Progression {
    pub raids: Vec<RaidProgress>,
}

/// Progress in one raid. Difficulty fields are 0 (none), 1 (partial) or 2
/// (cleared).
#[derive(Debug, Clone, Deserialize)]
pub struct RaidProgress {
    pub name: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub lfr: u32,
    #[serde(default)]
    pub normal: u32,
    #[serde(default)]
    pub heroic: u32,
    #[serde(default)]
    pub mythic: u32,
    #[serde(default)]
    pub bosses: Vec<BossProgress>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossProgress {
    pub name: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub lfr_kills: u64,
    #[serde(default)]
    pub lfr_timestamp: i64,
    #[serde(default)]
    pub normal_kills: u64,
    #[serde(default)]
    pub normal_timestamp: i64,
    #[serde(default)]
    pub heroic_kills: u64,
    #[serde(default)]
    pub heroic_timestamp: i64,
    #[serde(default)]
    pub mythic_kills: u64,
    #[serde(default)]
    pub mythic_timestamp: i64,
}

impl BossProgress {
    pub const fn kills(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Lfr => self.lfr_kills,
            Difficulty::Normal => self.normal_kills,
            Difficulty::Heroic => self.heroic_kills,
            Difficulty::Mythic => self.mythic_kills,
        }
    }

    /// Time of the most recent kill in epoch milliseconds; 0 if never killed.
    pub const fn last_kill(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Lfr => self.lfr_timestamp,
            Difficulty::Normal => self.normal_timestamp,
            Difficulty::Heroic => self.heroic_timestamp,
            Difficulty::Mythic => self.mythic_timestamp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pvp {
    pub brackets: HashMap<String, PvpBracketStats>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpBracketStats {
    #[serde(default)]
    pub slug: String,
    pub rating: u32,
    #[serde(default)]
    pub weekly_played: u64,
    #[serde(default)]
    pub weekly_won: u64,
    #[serde(default)]
    pub weekly_lost: u64,
    pub season_played: u64,
    pub season_won: u64,
    #[serde(default)]
    pub season_lost: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reputation {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub standing: u32,
    pub value: i64,
    #[serde(default)]
    pub max: i64,
}

/// Talent choices of one specialization.
#[derive(Debug, Clone, Deserialize)]
pub struct TalentGroup {
    #[serde(default)]
    pub selected: bool,
    pub talents: Vec<Talent>,
    #[serde(default)]
    pub spec: Option<SpecInfo>,
}

impl TalentGroup {
    /// Specialization name, taken from the group or its first talent.
    pub fn spec_name(&self) -> Option<&str> {
        self.spec
            .as_ref()
            .or_else(|| self.talents.first().and_then(|t| t.spec.as_ref()))
            .map(|spec| spec.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Talent {
    pub tier: u32,
    #[serde(default)]
    pub column: u32,
    pub spell: SpellRef,
    #[serde(default)]
    pub spec: Option<SpecInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpellRef {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpecInfo {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Title {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}
