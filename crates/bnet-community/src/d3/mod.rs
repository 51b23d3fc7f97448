//! Diablo III resources.

pub mod general;
pub mod profile;

pub use general::D3General;
pub use profile::{D3Career, D3Profile, HeroSummary, Kills};
