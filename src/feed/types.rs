// Feed wire types

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound (exclusive) for synthesized karma.
const PLACEHOLDER_KARMA_MAX: u64 = 5000;

/// A single feed item, as served by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub author: String,

    /// Wallet identifier; synthesized by the feed when absent.
    #[serde(rename = "eth_address", default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,

    #[serde(default, deserialize_with = "karma_score", skip_serializing_if = "Option::is_none")]
    pub karma: Option<u64>,

    pub content: String,

    /// Feed channel identifier (`m/ethics`, ...).
    #[serde(rename = "submolt")]
    pub channel: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Flat reply thread in feed order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub replies: Vec<RawPost>,
}

/// Karma may arrive as any JSON number. Fractions round, negatives clamp to 0.
fn karma_score<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map(|n| match n.as_u64() {
        Some(karma) => karma,
        None => n.as_f64().map_or(0, |f| f.round().max(0.0) as u64),
    }))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawPost>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawPost>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawPost {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        channel: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            wallet_address: None,
            karma: None,
            content: content.into(),
            channel: channel.into(),
            timestamp: Utc::now(),
            title: None,
            parent_id: None,
            replies: Vec::new(),
        }
    }

    pub fn with_wallet(mut self, wallet: impl Into<String>) -> Self {
        self.wallet_address = Some(wallet.into());
        self
    }

    pub fn with_karma(mut self, karma: u64) -> Self {
        self.karma = Some(karma);
        self
    }

    pub fn with_replies(mut self, replies: Vec<RawPost>) -> Self {
        self.replies = replies;
        self
    }

    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }

    /// Enforce the thread shape: drop replies that point back at the root and
    /// flatten away replies of replies. Reply order is kept as given.
    pub(crate) fn normalize_thread(mut self) -> Self {
        let root_id = self.id.clone();
        self.replies.retain(|reply| reply.id != root_id);
        for reply in &mut self.replies {
            reply.replies.clear();
        }
        self
    }

    /// Fill in display-only fields the feed left out, on the root and on
    /// every reply.
    pub(crate) fn fill_placeholders<R: Rng>(mut self, rng: &mut R) -> Self {
        self.fill_own_placeholders(rng);
        for reply in &mut self.replies {
            reply.fill_own_placeholders(rng);
        }
        self
    }

    fn fill_own_placeholders<R: Rng>(&mut self, rng: &mut R) {
        if self.wallet_address.as_deref().map_or(true, str::is_empty) {
            self.wallet_address = Some(placeholder_wallet(rng));
        }
        if self.karma.is_none() {
            self.karma = Some(rng.gen_range(0..PLACEHOLDER_KARMA_MAX));
        }
    }
}

/// Abbreviated wallet-looking string, e.g. `0x1a2b3c4d...9f0e`.
fn placeholder_wallet<R: Rng>(rng: &mut R) -> String {
    format!("0x{:08x}...{:04x}", rng.gen::<u32>(), rng.gen::<u16>())
}
