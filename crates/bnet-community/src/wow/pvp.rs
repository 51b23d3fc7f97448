//! World of Warcraft rated PvP leaderboards.

use bnet_core::{CachedMap, Endpoint, Result, Session, ratio};
use serde::Deserialize;

use crate::wow::tables::Bracket;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub ranking: u32,
    pub rating: u32,
    pub name: String,
    #[serde(default)]
    pub realm_id: u32,
    #[serde(default)]
    pub realm_name: String,
    #[serde(default)]
    pub realm_slug: String,
    #[serde(default)]
    pub race_id: u32,
    #[serde(default)]
    pub class_id: u32,
    #[serde(default)]
    pub spec_id: u32,
    #[serde(default)]
    pub faction_id: u32,
    #[serde(default)]
    pub gender_id: u32,
    #[serde(default)]
    pub season_wins: u64,
    #[serde(default)]
    pub season_losses: u64,
    #[serde(default)]
    pub weekly_wins: u64,
    #[serde(default)]
    pub weekly_losses: u64,
}

impl LeaderboardEntry {
    /// Season win rate in percent, `None` before the first game.
    pub fn season_win_rate(&self) -> Option<f64> {
        ratio::percentage(
            self.season_wins,
            self.season_wins.saturating_add(self.season_losses),
        )
    }
}

/// Accessor for the 2v2, 3v3 and rated battleground leaderboards.
///
/// Each bracket is cached independently.
#[derive(Debug)]
pub struct WowLeaderboard {
    session: Session,
    brackets: CachedMap<Bracket, Vec<LeaderboardEntry>>,
}

impl WowLeaderboard {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            brackets: CachedMap::new(),
        }
    }

    fn endpoint(bracket: Bracket) -> Endpoint {
        Endpoint::new(["wow", "leaderboard", bracket.leaderboard_segment()]).extract("rows")
    }

    pub async fn fetch_leaderboard(&mut self, bracket: Bracket) -> Result<&[LeaderboardEntry]> {
        Ok(self
            .session
            .refresh_keyed(&mut self.brackets, bracket, &Self::endpoint(bracket))
            .await?)
    }

    async fn rows(&mut self, bracket: Bracket) -> Result<&[LeaderboardEntry]> {
        Ok(self
            .session
            .load_keyed(&mut self.brackets, bracket, &Self::endpoint(bracket))
            .await?)
    }

    /// Leaderboard entry of a player (case-insensitive name).
    pub async fn player(&mut self, bracket: Bracket, name: &str) -> Result<Option<&LeaderboardEntry>> {
        Ok(self
            .rows(bracket)
            .await?
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name)))
    }

    /// Entries sharing a ranking; ties put several players on one rank.
    pub async fn players_with_ranking(
        &mut self,
        bracket: Bracket,
        ranking: u32,
    ) -> Result<Vec<&LeaderboardEntry>> {
        Ok(self
            .rows(bracket)
            .await?
            .iter()
            .filter(|entry| entry.ranking == ranking)
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_per_bracket() {
        assert_eq!(WowLeaderboard::endpoint(Bracket::Arena2v2).path(), "/wow/leaderboard/2v2");
        assert_eq!(WowLeaderboard::endpoint(Bracket::Rbg).path(), "/wow/leaderboard/rbg");
    }

    #[test]
    fn test_entry_win_rate() {
        let entry: LeaderboardEntry = serde_json::from_str(
            r#"{"ranking":1,"rating":2900,"name":"Pika","seasonWins":75,"seasonLosses":25}"#,
        )
        .expect("Operation should succeed");
        assert_eq!(entry.season_win_rate(), Some(75.0));

        let fresh: LeaderboardEntry =
            serde_json::from_str(r#"{"ranking":5000,"rating":1500,"name":"New"}"#)
                .expect("Operation should succeed");
        assert_eq!(fresh.season_win_rate(), None);
    }

    #[test]
    fn test_win_rate_with_saturated_counts() {
        let entry: LeaderboardEntry = serde_json::from_str(
            r#"{"ranking":1,"rating":2900,"name":"Pika","seasonWins":18446744073709551615,"seasonLosses":1}"#,
        )
        .expect("Operation should succeed");
        assert_eq!(entry.season_win_rate(), Some(100.0));
    }
}
