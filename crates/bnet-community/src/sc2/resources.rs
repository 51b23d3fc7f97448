//! StarCraft II achievement and reward catalogs.

use bnet_core::{Cached, Document, Endpoint, Result, Session};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Achievement {
    pub title: String,
    pub achievement_id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: u64,
    #[serde(default)]
    pub points: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub achievement_id: Option<u64>,
    #[serde(default)]
    pub icon: Option<Document>,
}

/// Reward categories of the rewards catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardCategory {
    Portraits,
    TerranDecals,
    ZergDecals,
    ProtossDecals,
    Skins,
    Animations,
}

impl RewardCategory {
    pub const ALL: [Self; 6] = [
        Self::Portraits,
        Self::TerranDecals,
        Self::ZergDecals,
        Self::ProtossDecals,
        Self::Skins,
        Self::Animations,
    ];

    /// Key of the category in the rewards document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Portraits => "portraits",
            Self::TerranDecals => "terranDecals",
            Self::ZergDecals => "zergDecals",
            Self::ProtossDecals => "protossDecals",
            Self::Skins => "skins",
            Self::Animations => "animations",
        }
    }
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub type RewardCatalog = BTreeMap<String, Vec<Reward>>;

/// Accessor for the StarCraft II data catalogs.
#[derive(Debug)]
pub struct Sc2Resources {
    session: Session,
    achievements: Cached<Vec<Sc2Achievement>>,
    rewards: Cached<RewardCatalog>,
}

impl Sc2Resources {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            achievements: Cached::new(),
            rewards: Cached::new(),
        }
    }

    fn achievements_endpoint() -> Endpoint {
        Endpoint::new(["sc2", "data", "achievements"]).extract("achievements")
    }

    fn rewards_endpoint() -> Endpoint {
        Endpoint::new(["sc2", "data", "rewards"])
    }

    // Achievements

    pub async fn fetch_achievements(&mut self) -> Result<&[Sc2Achievement]> {
        Ok(self
            .session
            .refresh(&mut self.achievements, &Self::achievements_endpoint())
            .await?)
    }

    async fn achievements(&mut self) -> Result<&[Sc2Achievement]> {
        Ok(self
            .session
            .load(&mut self.achievements, &Self::achievements_endpoint())
            .await?)
    }

    pub async fn achievement_titles(&mut self) -> Result<Vec<String>> {
        Ok(self
            .achievements()
            .await?
            .iter()
            .map(|achievement| achievement.title.clone())
            .collect())
    }

    pub async fn achievement_ids_by_title(&mut self) -> Result<BTreeMap<String, u64>> {
        Ok(self
            .achievements()
            .await?
            .iter()
            .map(|achievement| (achievement.title.clone(), achievement.achievement_id))
            .collect())
    }

    // Rewards

    pub async fn fetch_rewards(&mut self) -> Result<&RewardCatalog> {
        self.session
            .refresh(&mut self.rewards, &Self::rewards_endpoint())
            .await
    }

    async fn catalog(&mut self) -> Result<&RewardCatalog> {
        self.session
            .load(&mut self.rewards, &Self::rewards_endpoint())
            .await
    }

    /// First reward with this id across all categories.
    pub async fn reward_by_id(&mut self, reward_id: u64) -> Result<Option<&Reward>> {
        Ok(self
            .catalog()
            .await?
            .values()
            .flatten()
            .find(|reward| reward.id == reward_id))
    }

    /// First reward with this exact title across all categories.
    pub async fn reward_by_title(&mut self, title: &str) -> Result<Option<&Reward>> {
        Ok(self
            .catalog()
            .await?
            .values()
            .flatten()
            .find(|reward| reward.title == title))
    }

    /// Rewards of one category, empty if the catalog omits it.
    pub async fn rewards(&mut self, category: RewardCategory) -> Result<&[Reward]> {
        Ok(self
            .catalog()
            .await?
            .get(category.key())
            .map_or(&[][..], Vec::as_slice))
    }

    pub async fn reward_titles(&mut self, category: RewardCategory) -> Result<Vec<String>> {
        Ok(self
            .rewards(category)
            .await?
            .iter()
            .map(|reward| reward.title.clone())
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys() {
        assert_eq!(RewardCategory::TerranDecals.key(), "terranDecals");
        assert_eq!(RewardCategory::Animations.to_string(), "animations");
        assert_eq!(RewardCategory::ALL.len(), 6);
    }

    #[test]
    fn test_catalog_decodes_by_category() {
        let catalog: RewardCatalog = serde_json::from_str(
            r#"{"portraits":[{"id":1,"title":"Kerrigan","achievementId":10}],"skins":[]}"#,
        )
        .expect("Operation should succeed");
        assert_eq!(catalog["portraits"][0].title, "Kerrigan");
        assert_eq!(catalog["portraits"][0].achievement_id, Some(10));
        assert!(catalog["skins"].is_empty());
    }
}
