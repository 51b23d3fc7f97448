//! StarCraft II ladders and their members.

use bnet_core::{Cached, Endpoint, Result, Session, ratio};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderMember {
    pub character: LadderCharacter,
    #[serde(default)]
    pub join_timestamp: i64,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub highest_rank: u32,
    #[serde(default)]
    pub previous_rank: u32,
    #[serde(default)]
    pub favorite_race_p1: Option<String>,
}

impl LadderMember {
    pub fn display_name(&self) -> &str {
        &self.character.display_name
    }

    /// Win rate in percent, `None` before the first game.
    pub fn win_rate(&self) -> Option<f64> {
        ratio::percentage(self.wins, self.wins.saturating_add(self.losses))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderCharacter {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub realm: u32,
    pub display_name: String,
    #[serde(default)]
    pub clan_name: String,
    #[serde(default)]
    pub clan_tag: String,
    #[serde(default)]
    pub profile_path: String,
}

/// Accessor for one ladder's member list.
#[derive(Debug)]
pub struct Sc2Ladder {
    session: Session,
    ladder_id: u64,
    members: Cached<Vec<LadderMember>>,
}

impl Sc2Ladder {
    pub fn new(session: &Session, ladder_id: u64) -> Self {
        Self {
            session: session.clone(),
            ladder_id,
            members: Cached::new(),
        }
    }

    pub const fn ladder_id(&self) -> u64 {
        self.ladder_id
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(["sc2", "ladder"])
            .segment(self.ladder_id)
            .extract("ladderMembers")
    }

    pub async fn fetch_ladder(&mut self) -> Result<&[LadderMember]> {
        let endpoint = self.endpoint();
        Ok(self.session.refresh(&mut self.members, &endpoint).await?)
    }

    pub async fn members(&mut self) -> Result<&[LadderMember]> {
        let endpoint = self.endpoint();
        Ok(self.session.load(&mut self.members, &endpoint).await?)
    }

    pub async fn member_names(&mut self) -> Result<Vec<String>> {
        Ok(self
            .members()
            .await?
            .iter()
            .map(|member| member.display_name().to_string())
            .collect())
    }

    /// Member with exactly this display name.
    pub async fn member(&mut self, name: &str) -> Result<Option<&LadderMember>> {
        Ok(self
            .members()
            .await?
            .iter()
            .find(|member| member.display_name() == name))
    }

    /// Mean of the members' highest ranks, `None` for an empty ladder.
    pub async fn average_highest_rank(&mut self) -> Result<Option<f64>> {
        Ok(ratio::mean(
            self.members()
                .await?
                .iter()
                .map(|member| f64::from(member.highest_rank)),
        ))
    }

    /// Win rate per member in ladder order.
    pub async fn member_win_rates(&mut self) -> Result<Vec<(String, Option<f64>)>> {
        Ok(self
            .members()
            .await?
            .iter()
            .map(|member| (member.display_name().to_string(), member.win_rate()))
            .collect())
    }

    /// Mean win rate over members that have played, `None` if nobody has.
    pub async fn average_win_rate(&mut self) -> Result<Option<f64>> {
        Ok(ratio::mean(
            self.members()
                .await?
                .iter()
                .filter_map(LadderMember::win_rate),
        ))
    }

    pub async fn favorite_races(&mut self) -> Result<Vec<(String, Option<String>)>> {
        Ok(self
            .members()
            .await?
            .iter()
            .map(|member| {
                (
                    member.display_name().to_string(),
                    member.favorite_race_p1.clone(),
                )
            })
            .collect())
    }
}
