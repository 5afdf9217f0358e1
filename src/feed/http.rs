// HTTP feed source with a single bounded attempt and a static fallback

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::channel::is_allowed_channel;
use super::fallback::fallback_posts;
use super::types::RawPost;
use super::FeedSource;

/// Fetches posts from the remote feed endpoint.
///
/// One attempt per call, bounded by `timeout`. No retry, no backoff.
#[derive(Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and filter the remote post set, surfacing every failure.
    ///
    /// An empty result means the endpoint answered but nothing survived the
    /// channel allow-list.
    pub async fn fetch_remote(&self) -> Result<Vec<RawPost>> {
        debug!(url = %self.url, "fetching feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach feed endpoint")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Feed endpoint returned HTTP {}", status);
        }

        let payload: Value = response
            .json()
            .await
            .context("Failed to parse feed payload")?;

        prepare_posts(payload)
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_recent_posts(&self) -> Vec<RawPost> {
        match tokio::time::timeout(self.timeout, self.fetch_remote()).await {
            Ok(Ok(posts)) if !posts.is_empty() => {
                info!(count = posts.len(), "feed fetched");
                posts
            }
            Ok(Ok(_)) => {
                info!("feed has no posts in tracked channels; serving built-in dataset");
                fallback_posts()
            }
            Ok(Err(e)) => {
                warn!(error = %format!("{e:#}"), "feed fetch failed; serving built-in dataset");
                fallback_posts()
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "feed fetch timed out; serving built-in dataset"
                );
                fallback_posts()
            }
        }
    }
}

/// Turn the raw JSON payload into allow-listed, display-complete posts.
fn prepare_posts(payload: Value) -> Result<Vec<RawPost>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => bail!("Feed payload is not an array (got {})", json_kind(&other)),
    };

    let mut rng = rand::thread_rng();
    let mut posts = Vec::with_capacity(items.len());

    for item in items {
        let channel = item.get("submolt").and_then(Value::as_str).unwrap_or_default();
        if !is_allowed_channel(channel) {
            debug!(channel, "dropping post outside tracked channels");
            continue;
        }

        match serde_json::from_value::<RawPost>(item) {
            Ok(post) => posts.push(post.normalize_thread().fill_placeholders(&mut rng)),
            Err(e) => warn!(error = %e, "skipping malformed feed item"),
        }
    }

    Ok(posts)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str, channel: &str) -> Value {
        json!({
            "id": id,
            "author": "agent",
            "submolt": channel,
            "timestamp": "2026-01-30T12:00:00Z",
            "content": "hello",
        })
    }

    #[test]
    fn filters_to_allow_list() {
        let payload = json!([item("a", "m/ethics"), item("b", "m/random-offtopic"), item("c", "m/synergy")]);
        let posts = prepare_posts(payload).unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn fills_placeholders_on_kept_posts() {
        let posts = prepare_posts(json!([item("a", "m/ethics")])).unwrap();
        assert!(posts[0].wallet_address.is_some());
        assert!(posts[0].karma.is_some());
    }

    #[test]
    fn skips_malformed_items() {
        let broken = json!({"id": "x", "submolt": "m/ethics"});
        let posts = prepare_posts(json!([broken, item("a", "m/ethics")])).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "a");
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(prepare_posts(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn object_payload_is_rejected() {
        let err = prepare_posts(json!({"posts": []})).unwrap_err();
        assert!(err.to_string().contains("object"));
    }
}
