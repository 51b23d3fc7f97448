//! Diablo III game data documents, cached per slug.
//!
//! `fetch_*` methods always request the document and replace the cached
//! copy; the plain methods reuse it.

use bnet_core::{Cached, CachedMap, Document, Endpoint, Result, Session};

fn data(segments: &[&str]) -> Endpoint {
    Endpoint::new(["d3", "data"].into_iter().chain(segments.iter().copied()))
}

fn slug_pair(first: &str, second: &str) -> (String, String) {
    (first.to_string(), second.to_string())
}

#[derive(Debug)]
pub struct D3General {
    session: Session,
    acts: Cached<Document>,
    act: CachedMap<u32, Document>,
    artisans: CachedMap<String, Document>,
    recipes: CachedMap<(String, String), Document>,
    followers: CachedMap<String, Document>,
    classes: CachedMap<String, Document>,
    skills: CachedMap<(String, String), Document>,
    item_types: Cached<Document>,
    item_type: CachedMap<String, Document>,
    items: CachedMap<String, Document>,
}

impl D3General {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            acts: Cached::new(),
            act: CachedMap::new(),
            artisans: CachedMap::new(),
            recipes: CachedMap::new(),
            followers: CachedMap::new(),
            classes: CachedMap::new(),
            skills: CachedMap::new(),
            item_types: Cached::new(),
            item_type: CachedMap::new(),
            items: CachedMap::new(),
        }
    }

    // Acts

    pub async fn fetch_act_index(&mut self) -> Result<&Document> {
        self.session.refresh(&mut self.acts, &data(&["act"])).await
    }

    pub async fn act_index(&mut self) -> Result<&Document> {
        self.session.load(&mut self.acts, &data(&["act"])).await
    }

    pub async fn fetch_act(&mut self, act_id: u32) -> Result<&Document> {
        let endpoint = data(&["act"]).segment(act_id);
        self.session.refresh_keyed(&mut self.act, act_id, &endpoint).await
    }

    pub async fn act(&mut self, act_id: u32) -> Result<&Document> {
        let endpoint = data(&["act"]).segment(act_id);
        self.session.load_keyed(&mut self.act, act_id, &endpoint).await
    }

    // Artisans and recipes

    /// Artisan by slug, e.g. `blacksmith`.
    pub async fn fetch_artisan(&mut self, artisan: &str) -> Result<&Document> {
        let endpoint = data(&["artisan", artisan]);
        self.session
            .refresh_keyed(&mut self.artisans, artisan.to_string(), &endpoint)
            .await
    }

    pub async fn artisan(&mut self, artisan: &str) -> Result<&Document> {
        let endpoint = data(&["artisan", artisan]);
        self.session
            .load_keyed(&mut self.artisans, artisan.to_string(), &endpoint)
            .await
    }

    pub async fn fetch_recipe(&mut self, artisan: &str, recipe: &str) -> Result<&Document> {
        let endpoint = data(&["artisan", artisan, "recipe", recipe]);
        self.session
            .refresh_keyed(&mut self.recipes, slug_pair(artisan, recipe), &endpoint)
            .await
    }

    pub async fn recipe(&mut self, artisan: &str, recipe: &str) -> Result<&Document> {
        let endpoint = data(&["artisan", artisan, "recipe", recipe]);
        self.session
            .load_keyed(&mut self.recipes, slug_pair(artisan, recipe), &endpoint)
            .await
    }

    // Followers and classes

    pub async fn fetch_follower(&mut self, follower: &str) -> Result<&Document> {
        let endpoint = data(&["follower", follower]);
        self.session
            .refresh_keyed(&mut self.followers, follower.to_string(), &endpoint)
            .await
    }

    pub async fn follower(&mut self, follower: &str) -> Result<&Document> {
        let endpoint = data(&["follower", follower]);
        self.session
            .load_keyed(&mut self.followers, follower.to_string(), &endpoint)
            .await
    }

    pub async fn fetch_character_class(&mut self, class: &str) -> Result<&Document> {
        let endpoint = data(&["hero", class]);
        self.session
            .refresh_keyed(&mut self.classes, class.to_string(), &endpoint)
            .await
    }

    pub async fn character_class(&mut self, class: &str) -> Result<&Document> {
        let endpoint = data(&["hero", class]);
        self.session
            .load_keyed(&mut self.classes, class.to_string(), &endpoint)
            .await
    }

    pub async fn fetch_skill(&mut self, class: &str, skill: &str) -> Result<&Document> {
        let endpoint = data(&["hero", class, "skill", skill]);
        self.session
            .refresh_keyed(&mut self.skills, slug_pair(class, skill), &endpoint)
            .await
    }

    pub async fn skill(&mut self, class: &str, skill: &str) -> Result<&Document> {
        let endpoint = data(&["hero", class, "skill", skill]);
        self.session
            .load_keyed(&mut self.skills, slug_pair(class, skill), &endpoint)
            .await
    }

    // Items

    pub async fn fetch_item_type_index(&mut self) -> Result<&Document> {
        self.session
            .refresh(&mut self.item_types, &data(&["item-type"]))
            .await
    }

    pub async fn item_type_index(&mut self) -> Result<&Document> {
        self.session
            .load(&mut self.item_types, &data(&["item-type"]))
            .await
    }

    pub async fn fetch_item_type(&mut self, item_type: &str) -> Result<&Document> {
        let endpoint = data(&["item-type", item_type]);
        self.session
            .refresh_keyed(&mut self.item_type, item_type.to_string(), &endpoint)
            .await
    }

    pub async fn item_type(&mut self, item_type: &str) -> Result<&Document> {
        let endpoint = data(&["item-type", item_type]);
        self.session
            .load_keyed(&mut self.item_type, item_type.to_string(), &endpoint)
            .await
    }

    /// Item by slug and id, e.g. `corrupted-ashbringer-Unique_Sword_2H_104_x1`.
    pub async fn fetch_item(&mut self, slug_and_id: &str) -> Result<&Document> {
        let endpoint = data(&["item", slug_and_id]);
        self.session
            .refresh_keyed(&mut self.items, slug_and_id.to_string(), &endpoint)
            .await
    }

    pub async fn item(&mut self, slug_and_id: &str) -> Result<&Document> {
        let endpoint = data(&["item", slug_and_id]);
        self.session
            .load_keyed(&mut self.items, slug_and_id.to_string(), &endpoint)
            .await
    }
}
