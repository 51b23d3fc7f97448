//! Diablo III career profiles and heroes.

use bnet_core::{Cached, CachedMap, Document, Endpoint, Result, Session};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct D3Career {
    #[serde(default)]
    pub battle_tag: String,
    pub paragon_level: u32,
    #[serde(default)]
    pub paragon_level_hardcore: u32,
    #[serde(default)]
    pub paragon_level_season: u32,
    #[serde(default)]
    pub guild_name: String,
    pub heroes: Vec<HeroSummary>,
    #[serde(default)]
    pub last_hero_played: u64,
    #[serde(default)]
    pub kills: Kills,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub gender: u8,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub paragon_level: u32,
    #[serde(default)]
    pub hardcore: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub dead: bool,
    #[serde(default, rename = "last-updated")]
    pub last_updated: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kills {
    pub monsters: u64,
    pub elites: u64,
    pub hardcore_monsters: u64,
}

/// Battle tags use `-` instead of `#` in profile paths.
fn path_tag(battle_tag: &str) -> String {
    battle_tag.replace('#', "-")
}

/// Accessor for one Diablo III account.
///
/// Hero documents are cached per hero id; `fetch_*` methods replace the
/// cached copy.
#[derive(Debug)]
pub struct D3Profile {
    session: Session,
    battle_tag: String,
    career: Cached<D3Career>,
    heroes: CachedMap<u64, Document>,
    hero_items: CachedMap<u64, Document>,
    follower_items: CachedMap<u64, Document>,
}

impl D3Profile {
    /// `battle_tag` may be given as `Name#1234` or `Name-1234`.
    pub fn new(session: &Session, battle_tag: &str) -> Self {
        Self {
            session: session.clone(),
            battle_tag: path_tag(battle_tag),
            career: Cached::new(),
            heroes: CachedMap::new(),
            hero_items: CachedMap::new(),
            follower_items: CachedMap::new(),
        }
    }

    pub fn battle_tag(&self) -> &str {
        &self.battle_tag
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(["d3", "profile"]).segment(&self.battle_tag)
    }

    fn hero_endpoint(&self, hero_id: u64) -> Endpoint {
        self.endpoint().segment("hero").segment(hero_id)
    }

    pub async fn fetch_profile(&mut self) -> Result<&D3Career> {
        let endpoint = self.endpoint().with_trailing_slash();
        self.session.refresh(&mut self.career, &endpoint).await
    }

    async fn career(&mut self) -> Result<&D3Career> {
        let endpoint = self.endpoint().with_trailing_slash();
        self.session.load(&mut self.career, &endpoint).await
    }

    pub async fn paragon_level(&mut self) -> Result<u32> {
        Ok(self.career().await?.paragon_level)
    }

    pub async fn heroes(&mut self) -> Result<&[HeroSummary]> {
        Ok(&self.career().await?.heroes)
    }

    /// Hero with this name (case-insensitive).
    pub async fn hero_by_name(&mut self, name: &str) -> Result<Option<&HeroSummary>> {
        Ok(self
            .heroes()
            .await?
            .iter()
            .find(|hero| hero.name.eq_ignore_ascii_case(name)))
    }

    pub async fn fetch_hero(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id);
        self.session
            .refresh_keyed(&mut self.heroes, hero_id, &endpoint)
            .await
    }

    pub async fn hero(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id);
        self.session.load_keyed(&mut self.heroes, hero_id, &endpoint).await
    }

    pub async fn fetch_hero_items(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id).segment("items");
        self.session
            .refresh_keyed(&mut self.hero_items, hero_id, &endpoint)
            .await
    }

    pub async fn hero_items(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id).segment("items");
        self.session
            .load_keyed(&mut self.hero_items, hero_id, &endpoint)
            .await
    }

    pub async fn fetch_follower_items(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id).segment("follower-items");
        self.session
            .refresh_keyed(&mut self.follower_items, hero_id, &endpoint)
            .await
    }

    pub async fn follower_items(&mut self, hero_id: u64) -> Result<&Document> {
        let endpoint = self.hero_endpoint(hero_id).segment("follower-items");
        self.session
            .load_keyed(&mut self.follower_items, hero_id, &endpoint)
            .await
    }
}
