//! World of Warcraft battle pet catalog.

use bnet_core::{ApiError, Cached, CachedMap, Document, Endpoint, Result, Session};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Entry of the master pet list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSpecies {
    pub name: String,
    pub creature_id: u64,
    #[serde(default)]
    pub can_battle: bool,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub stats: Option<Document>,
    #[serde(default)]
    pub strong_against: Vec<String>,
    #[serde(default)]
    pub weak_against: Vec<String>,
}

/// How to find a pet in the master list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetQuery<'a> {
    /// Case-insensitive pet name
    Name(&'a str),
    CreatureId(u64),
}

impl<'a> From<&'a str> for PetQuery<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for PetQuery<'_> {
    fn from(creature_id: u64) -> Self {
        Self::CreatureId(creature_id)
    }
}

impl PetQuery<'_> {
    fn matches(self, pet: &PetSpecies) -> bool {
        match self {
            Self::Name(name) => pet.name.eq_ignore_ascii_case(name),
            Self::CreatureId(id) => pet.creature_id == id,
        }
    }
}

impl std::fmt::Display for PetQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::CreatureId(id) => write!(f, "creature {id}"),
        }
    }
}

/// Parameters of a species stats lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatsQuery {
    pub species_id: u64,
    pub level: u32,
    pub breed_id: u32,
    pub quality_id: u32,
}

impl StatsQuery {
    /// Level 1, breed 3, quality 1 (common).
    pub const fn new(species_id: u64) -> Self {
        Self {
            species_id,
            level: 1,
            breed_id: 3,
            quality_id: 1,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn breed(mut self, breed_id: u32) -> Self {
        self.breed_id = breed_id;
        self
    }

    #[must_use]
    pub const fn quality(mut self, quality_id: u32) -> Self {
        self.quality_id = quality_id;
        self
    }
}

/// Accessor for the pet master list and per-id pet documents.
#[derive(Debug)]
pub struct WowPets {
    session: Session,
    master: Cached<Vec<PetSpecies>>,
    abilities: CachedMap<u64, Document>,
    species: CachedMap<u64, Document>,
    stats: CachedMap<StatsQuery, Document>,
}

impl WowPets {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            master: Cached::new(),
            abilities: CachedMap::new(),
            species: CachedMap::new(),
            stats: CachedMap::new(),
        }
    }

    fn master_endpoint() -> Endpoint {
        Endpoint::new(["wow", "pet"]).with_trailing_slash().extract("pets")
    }

    pub async fn fetch_master_list(&mut self) -> Result<&[PetSpecies]> {
        Ok(self
            .session
            .refresh(&mut self.master, &Self::master_endpoint())
            .await?)
    }

    async fn master_list(&mut self) -> Result<&[PetSpecies]> {
        Ok(self
            .session
            .load(&mut self.master, &Self::master_endpoint())
            .await?)
    }

    pub async fn pet<'q>(&mut self, query: impl Into<PetQuery<'q>>) -> Result<Option<&PetSpecies>> {
        let query = query.into();
        Ok(self.master_list().await?.iter().find(|pet| query.matches(pet)))
    }

    pub async fn name_to_creature_id(&mut self) -> Result<BTreeMap<String, u64>> {
        Ok(self
            .master_list()
            .await?
            .iter()
            .map(|pet| (pet.name.clone(), pet.creature_id))
            .collect())
    }

    pub async fn battle_pets(&mut self) -> Result<Vec<&PetSpecies>> {
        Ok(self
            .master_list()
            .await?
            .iter()
            .filter(|pet| pet.can_battle)
            .collect())
    }

    pub async fn non_battle_pets(&mut self) -> Result<Vec<&PetSpecies>> {
        Ok(self
            .master_list()
            .await?
            .iter()
            .filter(|pet| !pet.can_battle)
            .collect())
    }

    /// Stats block of a pet from the master list.
    pub async fn pet_stats<'q>(&mut self, query: impl Into<PetQuery<'q>>) -> Result<&Document> {
        let query = query.into();
        self.master_list()
            .await?
            .iter()
            .find(|pet| query.matches(pet))
            .ok_or_else(|| ApiError::not_found("pet", query.to_string()))?
            .stats
            .as_ref()
            .ok_or_else(|| ApiError::not_found("pet stats", query.to_string()))
    }

    fn ability_endpoint(ability_id: u64) -> Endpoint {
        Endpoint::new(["wow", "pet", "ability"]).segment(ability_id)
    }

    fn species_endpoint(species_id: u64) -> Endpoint {
        Endpoint::new(["wow", "pet", "species"]).segment(species_id)
    }

    fn stats_endpoint(query: StatsQuery) -> Endpoint {
        Endpoint::new(["wow", "pet", "stats"])
            .segment(query.species_id)
            .query("level", query.level)
            .query("breedId", query.breed_id)
            .query("qualityId", query.quality_id)
    }

    pub async fn fetch_ability(&mut self, ability_id: u64) -> Result<&Document> {
        self.session
            .refresh_keyed(&mut self.abilities, ability_id, &Self::ability_endpoint(ability_id))
            .await
    }

    pub async fn ability(&mut self, ability_id: u64) -> Result<&Document> {
        self.session
            .load_keyed(&mut self.abilities, ability_id, &Self::ability_endpoint(ability_id))
            .await
    }

    pub async fn fetch_species(&mut self, species_id: u64) -> Result<&Document> {
        self.session
            .refresh_keyed(&mut self.species, species_id, &Self::species_endpoint(species_id))
            .await
    }

    pub async fn species(&mut self, species_id: u64) -> Result<&Document> {
        self.session
            .load_keyed(&mut self.species, species_id, &Self::species_endpoint(species_id))
            .await
    }

    pub async fn fetch_species_stats(&mut self, query: StatsQuery) -> Result<&Document> {
        self.session
            .refresh_keyed(&mut self.stats, query, &Self::stats_endpoint(query))
            .await
    }

    /// Stats of a species at a given level, breed and quality.
    pub async fn species_stats(&mut self, query: StatsQuery) -> Result<&Document> {
        self.session
            .load_keyed(&mut self.stats, query, &Self::stats_endpoint(query))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_query_defaults() {
        let query = StatsQuery::new(258);
        assert_eq!((query.level, query.breed_id, query.quality_id), (1, 3, 1));
        let query = query.level(25).quality(4);
        assert_eq!((query.level, query.breed_id, query.quality_id), (25, 3, 4));
    }

    #[test]
    fn test_pet_query_matching() {
        let pet: PetSpecies = serde_json::from_str(
            r#"{"name":"Mechanical Squirrel","creatureId":2671,"canBattle":true,"family":"mechanical"}"#,
        )
        .expect("Operation should succeed");
        assert!(PetQuery::from("mechanical squirrel").matches(&pet));
        assert!(PetQuery::from(2671_u64).matches(&pet));
        assert!(!PetQuery::from(1_u64).matches(&pet));
    }
}
