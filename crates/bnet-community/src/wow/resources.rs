//! World of Warcraft game data documents.
//!
//! These endpoints have no derived views; documents are returned as raw
//! JSON and cached per identifier. `fetch_*` methods always request the
//! document and replace the cached copy, the plain methods reuse it. Realm
//! status only has the refetching form.

use bnet_core::{Cached, CachedMap, Document, Endpoint, Result, Session};

#[derive(Debug)]
pub struct WowResources {
    session: Session,
    achievements: CachedMap<u64, Document>,
    bosses: Cached<Document>,
    boss: CachedMap<u64, Document>,
    items: CachedMap<u64, Document>,
    item_sets: CachedMap<u64, Document>,
    mounts: Cached<Document>,
    quests: CachedMap<u64, Document>,
    realm_status: Cached<Document>,
    recipes: CachedMap<u64, Document>,
    spells: CachedMap<u64, Document>,
    zones: Cached<Document>,
    zone: CachedMap<u64, Document>,
}

fn wow(segments: &[&str]) -> Endpoint {
    Endpoint::new(std::iter::once("wow").chain(segments.iter().copied()))
}

impl WowResources {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            achievements: CachedMap::new(),
            bosses: Cached::new(),
            boss: CachedMap::new(),
            items: CachedMap::new(),
            item_sets: CachedMap::new(),
            mounts: Cached::new(),
            quests: CachedMap::new(),
            realm_status: Cached::new(),
            recipes: CachedMap::new(),
            spells: CachedMap::new(),
            zones: Cached::new(),
            zone: CachedMap::new(),
        }
    }

    pub async fn fetch_achievement(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["achievement"]).segment(id);
        self.session.refresh_keyed(&mut self.achievements, id, &endpoint).await
    }

    pub async fn achievement(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["achievement"]).segment(id);
        self.session.load_keyed(&mut self.achievements, id, &endpoint).await
    }

    /// Master list of raid and dungeon bosses.
    pub async fn fetch_bosses(&mut self) -> Result<&Document> {
        let endpoint = wow(&["boss"]).with_trailing_slash();
        self.session.refresh(&mut self.bosses, &endpoint).await
    }

    pub async fn bosses(&mut self) -> Result<&Document> {
        let endpoint = wow(&["boss"]).with_trailing_slash();
        self.session.load(&mut self.bosses, &endpoint).await
    }

    pub async fn fetch_boss(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["boss"]).segment(id);
        self.session.refresh_keyed(&mut self.boss, id, &endpoint).await
    }

    pub async fn boss(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["boss"]).segment(id);
        self.session.load_keyed(&mut self.boss, id, &endpoint).await
    }

    pub async fn fetch_item(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["item"]).segment(id);
        self.session.refresh_keyed(&mut self.items, id, &endpoint).await
    }

    pub async fn item(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["item"]).segment(id);
        self.session.load_keyed(&mut self.items, id, &endpoint).await
    }

    pub async fn fetch_item_set(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["item", "set"]).segment(id);
        self.session.refresh_keyed(&mut self.item_sets, id, &endpoint).await
    }

    pub async fn item_set(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["item", "set"]).segment(id);
        self.session.load_keyed(&mut self.item_sets, id, &endpoint).await
    }

    /// Master list of mounts.
    pub async fn fetch_mounts(&mut self) -> Result<&Document> {
        let endpoint = wow(&["mount"]).with_trailing_slash();
        self.session.refresh(&mut self.mounts, &endpoint).await
    }

    pub async fn mounts(&mut self) -> Result<&Document> {
        let endpoint = wow(&["mount"]).with_trailing_slash();
        self.session.load(&mut self.mounts, &endpoint).await
    }

    pub async fn fetch_quest(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["quest"]).segment(id);
        self.session.refresh_keyed(&mut self.quests, id, &endpoint).await
    }

    pub async fn quest(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["quest"]).segment(id);
        self.session.load_keyed(&mut self.quests, id, &endpoint).await
    }

    /// Current status of every realm. Always refetched.
    pub async fn fetch_realm_status(&mut self) -> Result<&Document> {
        let endpoint = wow(&["realm", "status"]);
        self.session.refresh(&mut self.realm_status, &endpoint).await
    }

    pub async fn fetch_recipe(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["recipe"]).segment(id);
        self.session.refresh_keyed(&mut self.recipes, id, &endpoint).await
    }

    pub async fn recipe(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["recipe"]).segment(id);
        self.session.load_keyed(&mut self.recipes, id, &endpoint).await
    }

    pub async fn fetch_spell(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["spell"]).segment(id);
        self.session.refresh_keyed(&mut self.spells, id, &endpoint).await
    }

    pub async fn spell(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["spell"]).segment(id);
        self.session.load_keyed(&mut self.spells, id, &endpoint).await
    }

    /// Master list of zones.
    pub async fn fetch_zones(&mut self) -> Result<&Document> {
        let endpoint = wow(&["zone"]).with_trailing_slash();
        self.session.refresh(&mut self.zones, &endpoint).await
    }

    pub async fn zones(&mut self) -> Result<&Document> {
        let endpoint = wow(&["zone"]).with_trailing_slash();
        self.session.load(&mut self.zones, &endpoint).await
    }

    pub async fn fetch_zone(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["zone"]).segment(id);
        self.session.refresh_keyed(&mut self.zone, id, &endpoint).await
    }

    pub async fn zone(&mut self, id: u64) -> Result<&Document> {
        let endpoint = wow(&["zone"]).segment(id);
        self.session.load_keyed(&mut self.zone, id, &endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(wow(&["item", "set"]).segment(1060).path(), "/wow/item/set/1060");
        assert_eq!(wow(&["boss"]).with_trailing_slash().path(), "/wow/boss/");
        assert_eq!(wow(&["realm", "status"]).path(), "/wow/realm/status");
    }
}
