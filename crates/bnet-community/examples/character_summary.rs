//! Print a short summary of a World of Warcraft character.
//!
//! Reads the account key and locale from `BNET_API_KEY` / `BNET_LOCALE`:
//!
//! ```text
//! BNET_API_KEY=... cargo run --example character_summary -- "Area 52" Thrall
//! ```

use bnet_community::wow::{Bracket, WowCharacter};
use bnet_community::{ClientConfig, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bnet_core=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let realm = args.next().unwrap_or_else(|| "Area 52".to_string());
    let name = args.next().unwrap_or_else(|| "Thrall".to_string());

    let config = ClientConfig::from_env()?;
    let session = Session::from_config(&config)?;
    let mut character = WowCharacter::new(&session, realm, name);

    println!(
        "{} @ {} ({})",
        character.name(),
        character.realm(),
        session.locale()
    );
    println!("{:-<60}", "");
    println!(
        "Level {} {} {}",
        character.level().await?,
        character.race().await?,
        character.class().await?
    );
    println!("Faction: {}", character.faction().await?);
    println!("Achievement points: {}", character.achievement_points().await?);

    match character.guild_name().await {
        Ok(guild) => println!("Guild: {guild}"),
        Err(err) => println!("Guild: none ({err})"),
    }

    let levels = character.item_levels().await?;
    println!(
        "Item level: {} equipped / {} average",
        levels.equipped, levels.average
    );

    for bracket in [Bracket::Arena2v2, Bracket::Arena3v3, Bracket::Rbg] {
        let rating = character.pvp_rating(bracket).await?;
        match character.pvp_win_rate(bracket).await? {
            Some(rate) => println!("{bracket}: {rating} rating, {rate}% won"),
            None => println!("{bracket}: {rating} rating, no games"),
        }
    }

    Ok(())
}
