//! World of Warcraft resources.

pub mod auction;
pub mod character;
pub mod guild;
pub mod pets;
pub mod pvp;
pub mod resources;
pub mod tables;

pub use auction::{Auction, AuctionSnapshot, BuyoutPrice, WowAuction};
pub use character::WowCharacter;
pub use guild::{GuildMember, GuildProfile, WowGuild};
pub use pets::{PetQuery, PetSpecies, StatsQuery, WowPets};
pub use pvp::{LeaderboardEntry, WowLeaderboard};
pub use resources::WowResources;
pub use tables::{Bracket, CharacterClass, Difficulty, Faction, Gender, Role, Standing};
