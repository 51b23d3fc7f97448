//! World of Warcraft auction house snapshots.
//!
//! Auction data is published as a dump file. The realm endpoint only returns
//! a pointer to it (`files[0].url` and `files[0].lastModified`), so a
//! snapshot takes two requests. The cache slot is written only after both
//! succeed.

use bnet_core::{ApiError, Cached, Endpoint, Result, Session, Shape, SlotState, ratio};
use serde::Deserialize;

/// Copper per gold.
const COPPER_PER_GOLD: f64 = 10_000.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DumpPointer {
    url: String,
    last_modified: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(default)]
    pub auc: u64,
    pub item: u64,
    pub owner: String,
    #[serde(default)]
    pub owner_realm: String,
    #[serde(default)]
    pub bid: u64,
    pub buyout: u64,
    pub quantity: u32,
    #[serde(default)]
    pub time_left: String,
}

/// Auctions of one dump together with its publication time.
#[derive(Debug, Clone)]
pub struct AuctionSnapshot {
    /// Epoch milliseconds
    pub last_modified: i64,
    pub auctions: Vec<Auction>,
}

/// Buyout price of one auction and the stack size it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyoutPrice<P> {
    pub buyout: P,
    pub quantity: u32,
}

/// Accessor for the auction house of one realm.
#[derive(Debug)]
pub struct WowAuction {
    session: Session,
    realm: String,
    snapshot: Cached<AuctionSnapshot>,
}

impl WowAuction {
    pub fn new(session: &Session, realm: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            realm: realm.into(),
            snapshot: Cached::new(),
        }
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Whether a snapshot has been downloaded.
    pub const fn state(&self) -> SlotState {
        self.snapshot.state()
    }

    async fn download(session: &Session, realm: &str) -> Result<AuctionSnapshot> {
        let endpoint = Endpoint::new(["wow", "auction", "data", realm]).extract("files");
        let files: Vec<DumpPointer> = session.fetch(&endpoint).await?;
        let pointer = files
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::missing_field(endpoint.path(), "files"))?;

        let auctions = session
            .fetch_url(&pointer.url, Shape::Field("auctions"))
            .await?;

        tracing::debug!(realm, last_modified = pointer.last_modified, "auction snapshot downloaded");
        Ok(AuctionSnapshot {
            last_modified: pointer.last_modified,
            auctions,
        })
    }

    /// Download the current dump and replace the snapshot.
    pub async fn fetch_snapshot(&mut self) -> Result<&AuctionSnapshot> {
        let snapshot = Self::download(&self.session, &self.realm).await?;
        Ok(self.snapshot.store(snapshot))
    }

    async fn snapshot(&mut self) -> Result<&AuctionSnapshot> {
        let (session, realm) = (&self.session, self.realm.as_str());
        self.snapshot
            .get_or_fetch(|| Self::download(session, realm))
            .await
    }

    /// Publication time of the cached dump in epoch milliseconds.
    pub async fn last_modified(&mut self) -> Result<i64> {
        Ok(self.snapshot().await?.last_modified)
    }

    /// Buyout prices in copper for every auction of `item_id`.
    pub async fn buyout_prices(&mut self, item_id: u64) -> Result<Vec<BuyoutPrice<u64>>> {
        Ok(self
            .snapshot()
            .await?
            .auctions
            .iter()
            .filter(|auction| auction.item == item_id)
            .map(|auction| BuyoutPrice {
                buyout: auction.buyout,
                quantity: auction.quantity,
            })
            .collect())
    }

    /// Buyout prices in gold, rounded to four decimals.
    #[allow(clippy::cast_precision_loss)]
    pub async fn buyout_prices_in_gold(&mut self, item_id: u64) -> Result<Vec<BuyoutPrice<f64>>> {
        Ok(self
            .buyout_prices(item_id)
            .await?
            .into_iter()
            .map(|price| BuyoutPrice {
                buyout: ratio::round_to(price.buyout as f64 / COPPER_PER_GOLD, 4),
                quantity: price.quantity,
            })
            .collect())
    }

    pub async fn auctions_by_owner(&mut self, owner: &str) -> Result<Vec<&Auction>> {
        Ok(self
            .snapshot()
            .await?
            .auctions
            .iter()
            .filter(|auction| auction.owner.eq_ignore_ascii_case(owner))
            .collect())
    }
}
