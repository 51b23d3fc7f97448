//! World of Warcraft character profiles.
//!
//! A [`WowCharacter`] fetches the base character document and each optional
//! field (`achievements`, `items`, `pvp`, ...) from
//! `/wow/character/{realm}/{name}`. Every field lives in its own cache slot:
//! `fetch_*` methods always hit the API and replace the slot, while the
//! derived accessors fetch a field only the first time it is needed.

mod schema;

pub use schema::{
    Achievements, Appearance, BossProgress, CharacterPets, CharacterProfile, CollectedPet,
    CompletedAchievement, GuildSummary, HunterPet, ItemLevels, Items, Mount, Mounts, PetStats,
    Profession, Professions, Progression, Pvp, PvpBracketStats, RaidProgress, Reputation, SpecInfo,
    SpellRef, Talent, TalentGroup, Title,
};

use bnet_core::{ApiError, Cached, Document, Endpoint, Result, Session, ratio};
use std::collections::BTreeMap;

use crate::wow::tables::{Bracket, CharacterClass, Difficulty, Faction, Gender, Standing, race_name};

/// Accessor for one character on one realm.
#[derive(Debug)]
pub struct WowCharacter {
    session: Session,
    realm: String,
    name: String,
    profile: Cached<CharacterProfile>,
    achievements: Cached<Achievements>,
    appearance: Cached<Appearance>,
    feed: Cached<Vec<Document>>,
    guild: Cached<GuildSummary>,
    hunter_pets: Cached<Vec<HunterPet>>,
    items: Cached<Items>,
    mounts: Cached<Mounts>,
    pets: Cached<CharacterPets>,
    professions: Cached<Professions>,
    progression: Cached<Progression>,
    pvp: Cached<Pvp>,
    reputation: Cached<Vec<Reputation>>,
    quests: Cached<Vec<u64>>,
    statistics: Cached<Document>,
    stats: Cached<Document>,
    talents: Cached<Vec<TalentGroup>>,
    titles: Cached<Vec<Title>>,
}

impl WowCharacter {
    pub fn new(session: &Session, realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            realm: realm.into(),
            name: name.into(),
            profile: Cached::new(),
            achievements: Cached::new(),
            appearance: Cached::new(),
            feed: Cached::new(),
            guild: Cached::new(),
            hunter_pets: Cached::new(),
            items: Cached::new(),
            mounts: Cached::new(),
            pets: Cached::new(),
            professions: Cached::new(),
            progression: Cached::new(),
            pvp: Cached::new(),
            reputation: Cached::new(),
            quests: Cached::new(),
            statistics: Cached::new(),
            stats: Cached::new(),
            talents: Cached::new(),
            titles: Cached::new(),
        }
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(["wow", "character", self.realm.as_str(), self.name.as_str()])
    }

    fn field_endpoint(&self, field: &'static str) -> Endpoint {
        self.endpoint().field(field)
    }

    // Base profile

    pub async fn fetch_profile(&mut self) -> Result<&CharacterProfile> {
        let endpoint = self.endpoint();
        self.session.refresh(&mut self.profile, &endpoint).await
    }

    async fn profile(&mut self) -> Result<&CharacterProfile> {
        let endpoint = self.endpoint();
        self.session.load(&mut self.profile, &endpoint).await
    }

    pub async fn class(&mut self) -> Result<CharacterClass> {
        let id = self.profile().await?.class;
        CharacterClass::from_id(id).ok_or_else(|| ApiError::not_found("class id", id.to_string()))
    }

    pub async fn race(&mut self) -> Result<&'static str> {
        let id = self.profile().await?.race;
        race_name(id).ok_or_else(|| ApiError::not_found("race id", id.to_string()))
    }

    pub async fn gender(&mut self) -> Result<Gender> {
        Ok(Gender::from_id(self.profile().await?.gender))
    }

    pub async fn level(&mut self) -> Result<u32> {
        Ok(self.profile().await?.level)
    }

    pub async fn achievement_points(&mut self) -> Result<u64> {
        Ok(self.profile().await?.achievement_points)
    }

    pub async fn faction(&mut self) -> Result<Faction> {
        Ok(Faction::from_id(self.profile().await?.faction))
    }

    pub async fn battlegroup(&mut self) -> Result<String> {
        Ok(self.profile().await?.battlegroup.clone())
    }

    pub async fn total_honorable_kills(&mut self) -> Result<u64> {
        Ok(self.profile().await?.total_honorable_kills)
    }

    // Achievements

    pub async fn fetch_achievements(&mut self) -> Result<&Achievements> {
        let endpoint = self.field_endpoint("achievements");
        self.session.refresh(&mut self.achievements, &endpoint).await
    }

    async fn achievements(&mut self) -> Result<&Achievements> {
        let endpoint = self.field_endpoint("achievements");
        self.session.load(&mut self.achievements, &endpoint).await
    }

    /// Completed achievements, oldest first.
    pub async fn completed_achievements(&mut self) -> Result<Vec<CompletedAchievement>> {
        let achievements = self.achievements().await?;
        let mut completed: Vec<_> = achievements
            .achievements_completed
            .iter()
            .zip(&achievements.achievements_completed_timestamp)
            .map(|(&id, &completed_at)| CompletedAchievement { id, completed_at })
            .collect();
        completed.sort_by_key(|a| a.completed_at);
        Ok(completed)
    }

    pub async fn has_achievement(&mut self, achievement_id: u64) -> Result<bool> {
        Ok(self
            .achievements()
            .await?
            .achievements_completed
            .contains(&achievement_id))
    }

    // Appearance

    pub async fn fetch_appearance(&mut self) -> Result<&Appearance> {
        let endpoint = self.field_endpoint("appearance");
        self.session.refresh(&mut self.appearance, &endpoint).await
    }

    async fn appearance(&mut self) -> Result<&Appearance> {
        let endpoint = self.field_endpoint("appearance");
        self.session.load(&mut self.appearance, &endpoint).await
    }

    pub async fn face_variation(&mut self) -> Result<u32> {
        Ok(self.appearance().await?.face_variation)
    }

    pub async fn skin_color(&mut self) -> Result<u32> {
        Ok(self.appearance().await?.skin_color)
    }

    pub async fn hair_variation(&mut self) -> Result<u32> {
        Ok(self.appearance().await?.hair_variation)
    }

    pub async fn hair_color(&mut self) -> Result<u32> {
        Ok(self.appearance().await?.hair_color)
    }

    // Activity feed

    pub async fn fetch_feed(&mut self) -> Result<&[Document]> {
        let endpoint = self.field_endpoint("feed");
        Ok(self.session.refresh(&mut self.feed, &endpoint).await?)
    }

    // Guild

    pub async fn fetch_guild(&mut self) -> Result<&GuildSummary> {
        let endpoint = self.field_endpoint("guild");
        self.session.refresh(&mut self.guild, &endpoint).await
    }

    async fn guild(&mut self) -> Result<&GuildSummary> {
        let endpoint = self.field_endpoint("guild");
        self.session.load(&mut self.guild, &endpoint).await
    }

    pub async fn guild_name(&mut self) -> Result<String> {
        Ok(self.guild().await?.name.clone())
    }

    pub async fn guild_member_count(&mut self) -> Result<u32> {
        Ok(self.guild().await?.members)
    }

    pub async fn guild_achievement_points(&mut self) -> Result<u64> {
        Ok(self.guild().await?.achievement_points)
    }

    // Hunter pets

    async fn ensure_hunter(&mut self) -> Result<()> {
        let class = self.class().await?;
        if class == CharacterClass::Hunter {
            Ok(())
        } else {
            Err(ApiError::invalid_argument(format!(
                "{} is a {class}, only Hunters have hunter pets",
                self.name
            )))
        }
    }

    /// Fetch the character's hunter pets. Fails without a request if the
    /// character is not a Hunter.
    pub async fn fetch_hunter_pets(&mut self) -> Result<&[HunterPet]> {
        self.ensure_hunter().await?;
        let endpoint = self.field_endpoint("hunterPets");
        Ok(self.session.refresh(&mut self.hunter_pets, &endpoint).await?)
    }

    async fn hunter_pets(&mut self) -> Result<&[HunterPet]> {
        if !self.hunter_pets.is_populated() {
            self.ensure_hunter().await?;
        }
        let endpoint = self.field_endpoint("hunterPets");
        Ok(self.session.load(&mut self.hunter_pets, &endpoint).await?)
    }

    pub async fn hunter_pet_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .hunter_pets()
            .await?
            .iter()
            .map(|pet| pet.name.clone())
            .collect())
    }

    pub async fn hunter_pet(&mut self, name: &str) -> Result<Option<&HunterPet>> {
        Ok(self
            .hunter_pets()
            .await?
            .iter()
            .find(|pet| pet.name.eq_ignore_ascii_case(name)))
    }

    // Items

    pub async fn fetch_items(&mut self) -> Result<&Items> {
        let endpoint = self.field_endpoint("items");
        self.session.refresh(&mut self.items, &endpoint).await
    }

    async fn items(&mut self) -> Result<&Items> {
        let endpoint = self.field_endpoint("items");
        self.session.load(&mut self.items, &endpoint).await
    }

    pub async fn item_levels(&mut self) -> Result<ItemLevels> {
        let items = self.items().await?;
        Ok(ItemLevels {
            average: items.average_item_level,
            equipped: items.average_item_level_equipped,
        })
    }

    /// Item equipped in `slot` (`head`, `mainHand`, ...), if any.
    pub async fn gear_piece(&mut self, slot: &str) -> Result<Option<&Document>> {
        Ok(self.items().await?.slots.get(slot))
    }

    // Mounts

    pub async fn fetch_mounts(&mut self) -> Result<&Mounts> {
        let endpoint = self.field_endpoint("mounts");
        self.session.refresh(&mut self.mounts, &endpoint).await
    }

    async fn mounts(&mut self) -> Result<&Mounts> {
        let endpoint = self.field_endpoint("mounts");
        self.session.load(&mut self.mounts, &endpoint).await
    }

    pub async fn mount(&mut self, name: &str) -> Result<Option<&Mount>> {
        Ok(self
            .mounts()
            .await?
            .collected
            .iter()
            .find(|mount| mount.name.eq_ignore_ascii_case(name)))
    }

    pub async fn mount_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .mounts()
            .await?
            .collected
            .iter()
            .map(|mount| mount.name.clone())
            .collect())
    }

    pub async fn ground_mounts(&mut self) -> Result<Vec<&Mount>> {
        Ok(self
            .mounts()
            .await?
            .collected
            .iter()
            .filter(|mount| mount.is_ground)
            .collect())
    }

    pub async fn flying_mounts(&mut self) -> Result<Vec<&Mount>> {
        Ok(self
            .mounts()
            .await?
            .collected
            .iter()
            .filter(|mount| mount.is_flying)
            .collect())
    }

    // Battle pets

    pub async fn fetch_pets(&mut self) -> Result<&CharacterPets> {
        let endpoint = self.field_endpoint("pets");
        self.session.refresh(&mut self.pets, &endpoint).await
    }

    async fn pets(&mut self) -> Result<&CharacterPets> {
        let endpoint = self.field_endpoint("pets");
        self.session.load(&mut self.pets, &endpoint).await
    }

    async fn collected_pet(&mut self, name: &str) -> Result<&CollectedPet> {
        self.pets()
            .await?
            .collected
            .iter()
            .find(|pet| pet.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::not_found("pet", name))
    }

    pub async fn pet_count(&mut self) -> Result<u64> {
        Ok(self.pets().await?.num_collected)
    }

    /// Share of all pets the character has collected, `None` when the API
    /// reports no pets at all.
    pub async fn pet_collection_percentage(&mut self) -> Result<Option<f64>> {
        let pets = self.pets().await?;
        Ok(ratio::percentage(
            pets.num_collected,
            pets.num_collected.saturating_add(pets.num_not_collected),
        ))
    }

    pub async fn pet_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .pets()
            .await?
            .collected
            .iter()
            .map(|pet| pet.name.clone())
            .collect())
    }

    pub async fn pet_creature_ids(&mut self) -> Result<Vec<u64>> {
        Ok(self
            .pets()
            .await?
            .collected
            .iter()
            .map(|pet| pet.creature_id)
            .collect())
    }

    pub async fn favorite_pets(&mut self) -> Result<Vec<&CollectedPet>> {
        Ok(self
            .pets()
            .await?
            .collected
            .iter()
            .filter(|pet| pet.is_favorite)
            .collect())
    }

    pub async fn pet_quality(&mut self, name: &str) -> Result<u32> {
        Ok(self.collected_pet(name).await?.stats.pet_quality_id)
    }

    pub async fn pet_stats(&mut self, name: &str) -> Result<&PetStats> {
        Ok(&self.collected_pet(name).await?.stats)
    }

    // Professions

    pub async fn fetch_professions(&mut self) -> Result<&Professions> {
        let endpoint = self.field_endpoint("professions");
        self.session.refresh(&mut self.professions, &endpoint).await
    }

    async fn professions(&mut self) -> Result<&Professions> {
        let endpoint = self.field_endpoint("professions");
        self.session.load(&mut self.professions, &endpoint).await
    }

    /// Primary profession name to skill rank; empty if the character has none.
    pub async fn primary_professions(&mut self) -> Result<BTreeMap<String, u32>> {
        Ok(rank_map(&self.professions().await?.primary))
    }

    /// Secondary profession name to skill rank; empty if the character has none.
    pub async fn secondary_professions(&mut self) -> Result<BTreeMap<String, u32>> {
        Ok(rank_map(&self.professions().await?.secondary))
    }

    // Raid progression

    pub async fn fetch_progression(&mut self) -> Result<&[RaidProgress]> {
        let endpoint = self.field_endpoint("progression");
        let progression = self.session.refresh(&mut self.progression, &endpoint).await?;
        Ok(&progression.raids)
    }

    async fn raids(&mut self) -> Result<&[RaidProgress]> {
        let endpoint = self.field_endpoint("progression");
        let progression = self.session.load(&mut self.progression, &endpoint).await?;
        Ok(&progression.raids)
    }

    pub async fn raid_progress(&mut self, raid: &str) -> Result<&RaidProgress> {
        self.raids()
            .await?
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(raid))
            .ok_or_else(|| ApiError::not_found("raid", raid))
    }

    async fn boss_progress(&mut self, boss: &str, raid: &str) -> Result<&BossProgress> {
        self.raid_progress(raid)
            .await?
            .bosses
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(boss))
            .ok_or_else(|| ApiError::not_found("boss", format!("{boss} in {raid}")))
    }

    pub async fn boss_kills(&mut self, boss: &str, raid: &str, difficulty: Difficulty) -> Result<u64> {
        Ok(self.boss_progress(boss, raid).await?.kills(difficulty))
    }

    /// Time of the last kill in epoch milliseconds, `None` if never killed.
    pub async fn boss_kill_time(
        &mut self,
        boss: &str,
        raid: &str,
        difficulty: Difficulty,
    ) -> Result<Option<i64>> {
        let timestamp = self.boss_progress(boss, raid).await?.last_kill(difficulty);
        Ok((timestamp > 0).then_some(timestamp))
    }

    // Rated PvP

    pub async fn fetch_pvp(&mut self) -> Result<&Pvp> {
        let endpoint = self.field_endpoint("pvp");
        self.session.refresh(&mut self.pvp, &endpoint).await
    }

    pub async fn pvp_bracket(&mut self, bracket: Bracket) -> Result<&PvpBracketStats> {
        let endpoint = self.field_endpoint("pvp");
        self.session
            .load(&mut self.pvp, &endpoint)
            .await?
            .brackets
            .get(bracket.character_key())
            .ok_or_else(|| ApiError::not_found("PvP bracket", bracket.character_key()))
    }

    pub async fn pvp_rating(&mut self, bracket: Bracket) -> Result<u32> {
        Ok(self.pvp_bracket(bracket).await?.rating)
    }

    /// Season win rate in percent, `None` if no games were played.
    pub async fn pvp_win_rate(&mut self, bracket: Bracket) -> Result<Option<f64>> {
        let stats = self.pvp_bracket(bracket).await?;
        Ok(ratio::percentage(stats.season_won, stats.season_played))
    }

    // Reputation

    pub async fn fetch_reputation(&mut self) -> Result<&[Reputation]> {
        let endpoint = self.field_endpoint("reputation");
        Ok(self.session.refresh(&mut self.reputation, &endpoint).await?)
    }

    async fn reputation(&mut self) -> Result<&[Reputation]> {
        let endpoint = self.field_endpoint("reputation");
        Ok(self.session.load(&mut self.reputation, &endpoint).await?)
    }

    async fn faction_reputation(&mut self, faction: &str) -> Result<&Reputation> {
        self.reputation()
            .await?
            .iter()
            .find(|rep| rep.name.eq_ignore_ascii_case(faction))
            .ok_or_else(|| ApiError::not_found("faction", faction))
    }

    pub async fn reputation_factions(&mut self) -> Result<Vec<String>> {
        Ok(self
            .reputation()
            .await?
            .iter()
            .map(|rep| rep.name.clone())
            .collect())
    }

    /// Reputation points earned within the current standing.
    pub async fn reputation_amount(&mut self, faction: &str) -> Result<i64> {
        Ok(self.faction_reputation(faction).await?.value)
    }

    pub async fn reputation_standing(&mut self, faction: &str) -> Result<Standing> {
        let level = self.faction_reputation(faction).await?.standing;
        Standing::from_level(level)
            .ok_or_else(|| ApiError::not_found("reputation standing", level.to_string()))
    }

    /// Names of the factions the character is currently at `standing` with.
    pub async fn reputations_with_standing(&mut self, standing: Standing) -> Result<Vec<String>> {
        Ok(self
            .reputation()
            .await?
            .iter()
            .filter(|rep| rep.standing == standing.level())
            .map(|rep| rep.name.clone())
            .collect())
    }

    // Quests

    pub async fn fetch_quests(&mut self) -> Result<&[u64]> {
        let endpoint = self.field_endpoint("quests");
        Ok(self.session.refresh(&mut self.quests, &endpoint).await?)
    }

    pub async fn has_completed_quest(&mut self, quest_id: u64) -> Result<bool> {
        let endpoint = self.field_endpoint("quests");
        Ok(self
            .session
            .load(&mut self.quests, &endpoint)
            .await?
            .contains(&quest_id))
    }

    // Statistics

    pub async fn fetch_statistics(&mut self) -> Result<&Document> {
        let endpoint = self.field_endpoint("statistics");
        self.session.refresh(&mut self.statistics, &endpoint).await
    }

    pub async fn fetch_stats(&mut self) -> Result<&Document> {
        let endpoint = self.field_endpoint("stats");
        self.session.refresh(&mut self.stats, &endpoint).await
    }

    // Talents

    pub async fn fetch_talents(&mut self) -> Result<&[TalentGroup]> {
        let endpoint = self.field_endpoint("talents");
        Ok(self.session.refresh(&mut self.talents, &endpoint).await?)
    }

    /// Talents chosen for `spec`, keyed by tier (starting at 1).
    ///
    /// `spec` must be one of the character's class specializations.
    pub async fn talents_for_spec(&mut self, spec: &str) -> Result<BTreeMap<u32, String>> {
        let class = self.class().await?;
        if !class.has_spec(spec) {
            return Err(ApiError::invalid_argument(format!(
                "{class} has no '{spec}' specialization"
            )));
        }

        let endpoint = self.field_endpoint("talents");
        let group = self
            .session
            .load(&mut self.talents, &endpoint)
            .await?
            .iter()
            .find(|group| group.spec_name().is_some_and(|name| name.eq_ignore_ascii_case(spec)))
            .ok_or_else(|| ApiError::not_found("talent specialization", spec))?;

        Ok(group
            .talents
            .iter()
            .map(|talent| (talent.tier + 1, talent.spell.name.clone()))
            .collect())
    }

    // Titles

    pub async fn fetch_titles(&mut self) -> Result<&[Title]> {
        let endpoint = self.field_endpoint("titles");
        Ok(self.session.refresh(&mut self.titles, &endpoint).await?)
    }

    async fn titles(&mut self) -> Result<&[Title]> {
        let endpoint = self.field_endpoint("titles");
        Ok(self.session.load(&mut self.titles, &endpoint).await?)
    }

    pub async fn title_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .titles()
            .await?
            .iter()
            .map(|title| title.name.clone())
            .collect())
    }

    pub async fn title_count(&mut self) -> Result<usize> {
        Ok(self.titles().await?.len())
    }
}

fn rank_map(professions: &[Profession]) -> BTreeMap<String, u32> {
    professions
        .iter()
        .map(|profession| (profession.name.clone(), profession.rank))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let session = Session::new("key", "en_US").expect("Operation should succeed");
        let character = WowCharacter::new(&session, "Area 52", "Thrall");
        assert_eq!(character.endpoint().path(), "/wow/character/Area 52/Thrall");

        let url = session
            .url_for(&character.field_endpoint("hunterPets"))
            .expect("Operation should succeed");
        assert_eq!(
            url.as_str(),
            "https://us.api.battle.net/wow/character/Area%2052/Thrall?fields=hunterPets&locale=en_US&apikey=key"
        );
    }

    #[test]
    fn test_talent_group_spec_name_falls_back_to_first_talent() {
        let group: TalentGroup = serde_json::from_str(
            r#"{"talents":[{"tier":0,"column":1,"spell":{"id":1,"name":"Heartbreaker"},"spec":{"name":"Blood","role":"TANK"}}]}"#,
        )
        .expect("Operation should succeed");
        assert_eq!(group.spec_name(), Some("Blood"));
    }

    #[test]
    fn test_items_keep_slots() {
        let items: Items = serde_json::from_str(
            r#"{"averageItemLevel":910,"averageItemLevelEquipped":905,"head":{"id":1,"name":"Helm"}}"#,
        )
        .expect("Operation should succeed");
        assert_eq!(items.slots.len(), 1);
        assert_eq!(items.slots["head"]["name"], "Helm");
    }

    #[test]
    fn test_collected_pet_accepts_legacy_creature_key() {
        let pet: CollectedPet =
            serde_json::from_str(r#"{"name":"Mr. Bigglesworth","creatureID":16998}"#)
                .expect("Operation should succeed");
        assert_eq!(pet.creature_id, 16998);
        assert_eq!(pet.stats.pet_quality_id, 0);
    }
}
