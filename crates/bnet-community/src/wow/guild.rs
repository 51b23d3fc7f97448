//! World of Warcraft guild profiles.

use bnet_core::{ApiError, Cached, Document, Endpoint, Result, Session};
use serde::Deserialize;

use crate::wow::tables::Role;

/// Base guild document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildProfile {
    pub name: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub battlegroup: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub side: u32,
    #[serde(default)]
    pub achievement_points: u64,
    #[serde(default)]
    pub emblem: Option<Document>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuildMember {
    pub character: MemberCharacter,
    pub rank: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCharacter {
    pub name: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub class: u32,
    #[serde(default)]
    pub race: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub achievement_points: u64,
    #[serde(default)]
    pub spec: Option<MemberSpec>,
}

/// Active specialization of a guild member.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSpec {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildAchievements {
    pub achievements_completed: Vec<u64>,
    #[serde(default)]
    pub achievements_completed_timestamp: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Challenge {
    pub map: ChallengeMap,
    #[serde(default)]
    pub groups: Vec<Document>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMap {
    pub name: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    pub has_challenge_mode: bool,
}

/// Accessor for one guild on one realm.
#[derive(Debug)]
pub struct WowGuild {
    session: Session,
    realm: String,
    name: String,
    profile: Cached<GuildProfile>,
    members: Cached<Vec<GuildMember>>,
    achievements: Cached<GuildAchievements>,
    news: Cached<Vec<Document>>,
    challenge: Cached<Vec<Challenge>>,
}

impl WowGuild {
    pub fn new(session: &Session, realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            realm: realm.into(),
            name: name.into(),
            profile: Cached::new(),
            members: Cached::new(),
            achievements: Cached::new(),
            news: Cached::new(),
            challenge: Cached::new(),
        }
    }

    /// `name-realm`, as the game displays guilds from other realms.
    pub fn display_name(&self) -> String {
        format!("{}-{}", self.name, self.realm)
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(["wow", "guild", self.realm.as_str(), self.name.as_str()])
    }

    fn field_endpoint(&self, field: &'static str) -> Endpoint {
        self.endpoint().field(field)
    }

    pub async fn fetch_profile(&mut self) -> Result<&GuildProfile> {
        let endpoint = self.endpoint();
        self.session.refresh(&mut self.profile, &endpoint).await
    }

    /// Guild emblem description, `None` if the guild has not designed one.
    pub async fn emblem(&mut self) -> Result<Option<&Document>> {
        let endpoint = self.endpoint();
        Ok(self
            .session
            .load(&mut self.profile, &endpoint)
            .await?
            .emblem
            .as_ref())
    }

    // Members

    pub async fn fetch_members(&mut self) -> Result<&[GuildMember]> {
        let endpoint = self.field_endpoint("members");
        Ok(self.session.refresh(&mut self.members, &endpoint).await?)
    }

    async fn members(&mut self) -> Result<&[GuildMember]> {
        let endpoint = self.field_endpoint("members");
        Ok(self.session.load(&mut self.members, &endpoint).await?)
    }

    pub async fn member(&mut self, name: &str) -> Result<Option<&GuildMember>> {
        Ok(self
            .members()
            .await?
            .iter()
            .find(|member| member.character.name.eq_ignore_ascii_case(name)))
    }

    pub async fn member_rank(&mut self, name: &str) -> Result<Option<u32>> {
        Ok(self.member(name).await?.map(|member| member.rank))
    }

    pub async fn member_count(&mut self) -> Result<usize> {
        Ok(self.members().await?.len())
    }

    pub async fn member_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .members()
            .await?
            .iter()
            .map(|member| member.character.name.clone())
            .collect())
    }

    /// Members whose active specialization is `spec` (any case).
    pub async fn members_by_spec(&mut self, spec: &str) -> Result<Vec<&GuildMember>> {
        Ok(self
            .members()
            .await?
            .iter()
            .filter(|member| {
                member
                    .character
                    .spec
                    .as_ref()
                    .is_some_and(|s| s.name.eq_ignore_ascii_case(spec))
            })
            .collect())
    }

    pub async fn members_by_role(&mut self, role: Role) -> Result<Vec<&GuildMember>> {
        Ok(self
            .members()
            .await?
            .iter()
            .filter(|member| {
                member
                    .character
                    .spec
                    .as_ref()
                    .is_some_and(|s| s.role == role.api_name())
            })
            .collect())
    }

    pub async fn members_by_rank(&mut self, rank: u32) -> Result<Vec<&GuildMember>> {
        Ok(self
            .members()
            .await?
            .iter()
            .filter(|member| member.rank == rank)
            .collect())
    }

    // Achievements

    pub async fn fetch_achievements(&mut self) -> Result<&GuildAchievements> {
        let endpoint = self.field_endpoint("achievements");
        self.session.refresh(&mut self.achievements, &endpoint).await
    }

    pub async fn has_achievement(&mut self, achievement_id: u64) -> Result<bool> {
        let endpoint = self.field_endpoint("achievements");
        Ok(self
            .session
            .load(&mut self.achievements, &endpoint)
            .await?
            .achievements_completed
            .contains(&achievement_id))
    }

    // News

    pub async fn fetch_news(&mut self) -> Result<&[Document]> {
        let endpoint = self.field_endpoint("news");
        Ok(self.session.refresh(&mut self.news, &endpoint).await?)
    }

    // Challenge mode

    pub async fn fetch_challenge(&mut self) -> Result<&[Challenge]> {
        let endpoint = self.field_endpoint("challenge");
        Ok(self.session.refresh(&mut self.challenge, &endpoint).await?)
    }

    async fn challenges(&mut self) -> Result<&[Challenge]> {
        let endpoint = self.field_endpoint("challenge");
        Ok(self.session.load(&mut self.challenge, &endpoint).await?)
    }

    /// Challenges on maps where the guild has completed challenge mode.
    pub async fn completed_challenges(&mut self) -> Result<Vec<&Challenge>> {
        Ok(self
            .challenges()
            .await?
            .iter()
            .filter(|challenge| challenge.map.has_challenge_mode)
            .collect())
    }

    /// Whether the guild completed challenge mode on the named map.
    pub async fn has_challenge(&mut self, map: &str) -> Result<bool> {
        self.challenges()
            .await?
            .iter()
            .find(|challenge| challenge.map.name.eq_ignore_ascii_case(map))
            .map(|challenge| challenge.map.has_challenge_mode)
            .ok_or_else(|| ApiError::not_found("challenge map", map))
    }
}
