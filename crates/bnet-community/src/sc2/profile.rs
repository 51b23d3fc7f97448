//! StarCraft II player profiles, ladder placements and match history.

use bnet_core::{Cached, Document, Endpoint, Result, Session, ratio};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2ProfileDocument {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub realm: u32,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub clan_name: String,
    #[serde(default)]
    pub clan_tag: String,
    #[serde(default)]
    pub profile_path: String,
    pub career: Career,
    #[serde(default)]
    pub rewards: ProfileRewards,
    #[serde(default)]
    pub achievements: ProfileAchievements,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(default)]
    pub primary_race: String,
    #[serde(default)]
    pub terran_wins: u64,
    #[serde(default)]
    pub protoss_wins: u64,
    #[serde(default)]
    pub zerg_wins: u64,
    #[serde(default, rename = "highest1v1Rank")]
    pub highest_1v1_rank: String,
    #[serde(default)]
    pub highest_team_rank: String,
    #[serde(default)]
    pub season_total_games: u64,
    #[serde(default)]
    pub career_total_games: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRewards {
    pub selected: Vec<u64>,
    pub earned: Vec<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileAchievements {
    pub points: AchievementPoints,
    pub achievements: Vec<EarnedAchievement>,
}

/// Achievement points in total and per achievement category id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementPoints {
    pub total_points: u32,
    pub category_points: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    pub achievement_id: u64,
    #[serde(default)]
    pub completion_date: i64,
}

/// Wins per race across the player's career.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceWins {
    pub terran: u64,
    pub protoss: u64,
    pub zerg: u64,
}

impl RaceWins {
    pub const fn total(&self) -> u64 {
        self.terran
            .saturating_add(self.protoss)
            .saturating_add(self.zerg)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLadders {
    pub current_season: Vec<SeasonLadders>,
    #[serde(default)]
    pub previous_season: Vec<SeasonLadders>,
    #[serde(default)]
    pub showcase_placement: Vec<Document>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLadders {
    #[serde(default)]
    pub ladder: Vec<LadderSummary>,
    #[serde(default)]
    pub characters: Vec<Document>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderSummary {
    pub ladder_name: String,
    #[serde(default)]
    pub ladder_id: u64,
    #[serde(default)]
    pub division: u32,
    #[serde(default)]
    pub rank: u32,
    pub league: String,
    #[serde(default)]
    pub match_making_queue: String,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Match {
    pub map: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub decision: String,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub date: i64,
}

impl Match {
    pub fn is_win(&self) -> bool {
        self.decision == "WIN"
    }

    pub fn is_solo(&self) -> bool {
        self.kind == "SOLO"
    }
}

fn win_rate<'a>(matches: impl Iterator<Item = &'a Match>) -> Option<f64> {
    let (games, wins) = matches.fold((0, 0), |(games, wins), game| {
        (games + 1, wins + u64::from(game.is_win()))
    });
    ratio::percentage(wins, games)
}

/// Accessor for one StarCraft II profile.
#[derive(Debug)]
pub struct Sc2Profile {
    session: Session,
    profile_id: u64,
    region_id: u32,
    name: String,
    profile: Cached<Sc2ProfileDocument>,
    ladders: Cached<ProfileLadders>,
    matches: Cached<Vec<Match>>,
}

impl Sc2Profile {
    /// Profile in region 1, the primary region of the session's host.
    pub fn new(session: &Session, profile_id: u64, name: impl Into<String>) -> Self {
        Self::with_region(session, profile_id, 1, name)
    }

    pub fn with_region(
        session: &Session,
        profile_id: u64,
        region_id: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            session: session.clone(),
            profile_id,
            region_id,
            name: name.into(),
            profile: Cached::new(),
            ladders: Cached::new(),
            matches: Cached::new(),
        }
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(["sc2", "profile"])
            .segment(self.profile_id)
            .segment(self.region_id)
            .segment(&self.name)
    }

    // Profile

    pub async fn fetch_profile(&mut self) -> Result<&Sc2ProfileDocument> {
        let endpoint = self.endpoint().with_trailing_slash();
        self.session.refresh(&mut self.profile, &endpoint).await
    }

    async fn profile(&mut self) -> Result<&Sc2ProfileDocument> {
        let endpoint = self.endpoint().with_trailing_slash();
        self.session.load(&mut self.profile, &endpoint).await
    }

    pub async fn clan_name(&mut self) -> Result<String> {
        Ok(self.profile().await?.clan_name.clone())
    }

    pub async fn clan_tag(&mut self) -> Result<String> {
        Ok(self.profile().await?.clan_tag.clone())
    }

    pub async fn career(&mut self) -> Result<&Career> {
        Ok(&self.profile().await?.career)
    }

    pub async fn primary_race(&mut self) -> Result<String> {
        Ok(self.career().await?.primary_race.clone())
    }

    pub async fn race_wins(&mut self) -> Result<RaceWins> {
        let career = self.career().await?;
        Ok(RaceWins {
            terran: career.terran_wins,
            protoss: career.protoss_wins,
            zerg: career.zerg_wins,
        })
    }

    pub async fn season_total_games(&mut self) -> Result<u64> {
        Ok(self.career().await?.season_total_games)
    }

    pub async fn career_total_games(&mut self) -> Result<u64> {
        Ok(self.career().await?.career_total_games)
    }

    /// Race wins over season games in percent, `None` if no season games.
    pub async fn season_win_rate(&mut self) -> Result<Option<f64>> {
        let season_games = self.career().await?.season_total_games;
        let wins = self.race_wins().await?.total();
        Ok(ratio::percentage(wins, season_games))
    }

    pub async fn highest_1v1_rank(&mut self) -> Result<String> {
        Ok(self.career().await?.highest_1v1_rank.clone())
    }

    pub async fn highest_team_rank(&mut self) -> Result<String> {
        Ok(self.career().await?.highest_team_rank.clone())
    }

    pub async fn rewards(&mut self) -> Result<&ProfileRewards> {
        Ok(&self.profile().await?.rewards)
    }

    pub async fn has_earned_reward(&mut self, reward_id: u64) -> Result<bool> {
        Ok(self.rewards().await?.earned.contains(&reward_id))
    }

    pub async fn achievements(&mut self) -> Result<&ProfileAchievements> {
        Ok(&self.profile().await?.achievements)
    }

    pub async fn total_achievement_points(&mut self) -> Result<u32> {
        Ok(self.achievements().await?.points.total_points)
    }

    /// Points keyed by achievement category id.
    pub async fn achievement_points_by_category(&mut self) -> Result<BTreeMap<String, u32>> {
        Ok(self.achievements().await?.points.category_points.clone())
    }

    pub async fn has_earned_achievement(&mut self, achievement_id: u64) -> Result<bool> {
        Ok(self
            .achievements()
            .await?
            .achievements
            .iter()
            .any(|a| a.achievement_id == achievement_id))
    }

    // Ladders

    pub async fn fetch_ladders(&mut self) -> Result<&ProfileLadders> {
        let endpoint = self.endpoint().segment("ladders");
        self.session.refresh(&mut self.ladders, &endpoint).await
    }

    /// First ladder of the current season, `None` outside ranked play.
    pub async fn current_ladder(&mut self) -> Result<Option<&LadderSummary>> {
        let endpoint = self.endpoint().segment("ladders");
        Ok(self
            .session
            .load(&mut self.ladders, &endpoint)
            .await?
            .current_season
            .first()
            .and_then(|season| season.ladder.first()))
    }

    pub async fn current_ladder_name(&mut self) -> Result<Option<String>> {
        Ok(self
            .current_ladder()
            .await?
            .map(|ladder| ladder.ladder_name.clone()))
    }

    pub async fn current_league(&mut self) -> Result<Option<String>> {
        Ok(self.current_ladder().await?.map(|ladder| ladder.league.clone()))
    }

    // Match history

    pub async fn fetch_matches(&mut self) -> Result<&[Match]> {
        let endpoint = self.endpoint().segment("matches").extract("matches");
        Ok(self.session.refresh(&mut self.matches, &endpoint).await?)
    }

    async fn matches(&mut self) -> Result<&[Match]> {
        let endpoint = self.endpoint().segment("matches").extract("matches");
        Ok(self.session.load(&mut self.matches, &endpoint).await?)
    }

    pub async fn games_played(&mut self) -> Result<usize> {
        Ok(self.matches().await?.len())
    }

    /// Win rate over the recent match history, `None` if it is empty.
    pub async fn total_win_rate(&mut self) -> Result<Option<f64>> {
        Ok(win_rate(self.matches().await?.iter()))
    }

    /// Win rate over recent solo games, `None` if there are none.
    pub async fn solo_win_rate(&mut self) -> Result<Option<f64>> {
        Ok(win_rate(self.matches().await?.iter().filter(|m| m.is_solo())))
    }

    pub async fn solo_games(&mut self) -> Result<Vec<&Match>> {
        Ok(self.matches().await?.iter().filter(|m| m.is_solo()).collect())
    }
}
