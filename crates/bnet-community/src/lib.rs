//! Resource accessors for the Battle.net Community API.
//!
//! Each accessor wraps one API resource family of World of Warcraft,
//! StarCraft II or Diablo III. Accessors share a [`Session`] and keep their
//! own cache slots: derived accessors fetch the underlying document on first
//! use and answer later calls from the slot, while `fetch_*` operations
//! always go to the network and replace the slot on success.
//!
//! ```rust,no_run
//! use bnet_community::{Session, wow::WowCharacter};
//!
//! # async fn example() -> bnet_community::Result<()> {
//! let session = Session::new("my-api-key", "en_US")?;
//! let mut character = WowCharacter::new(&session, "Area 52", "Thrall");
//!
//! // One request serves both calls
//! println!("{} {}", character.race().await?, character.class().await?);
//! # Ok(())
//! # }
//! ```
//!
//! Ratios such as win rates return `None` when there is nothing to divide
//! by, for example a PvP bracket without games or an empty ladder.

pub mod d3;
pub mod sc2;
pub mod wow;

pub use bnet_core::{ApiError, ClientConfig, Document, Locale, Result, Session, SlotState};
