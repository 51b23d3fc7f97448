//! StarCraft II resources.

pub mod ladder;
pub mod profile;
pub mod resources;

pub use ladder::{LadderMember, Sc2Ladder};
pub use profile::{AchievementPoints, Career, LadderSummary, Match, RaceWins, Sc2Profile};
pub use resources::{Reward, RewardCategory, Sc2Achievement, Sc2Resources};
