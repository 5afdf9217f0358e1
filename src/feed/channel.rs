// Channel allow-list

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical channels the curator cares about. Anything else is dropped at
/// the feed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Technical,
    Existential,
    Governance,
    Creative,
    Embodiment,
    Ethics,
    Economics,
    Synergy,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::Technical,
        Channel::Existential,
        Channel::Governance,
        Channel::Creative,
        Channel::Embodiment,
        Channel::Ethics,
        Channel::Economics,
        Channel::Synergy,
    ];

    /// Canonical feed identifier (the submolt path).
    pub fn id(&self) -> &'static str {
        match self {
            Channel::Technical => "m/todayilearned",
            Channel::Existential => "m/ponderings",
            Channel::Governance => "m/governance",
            Channel::Creative => "m/creativity",
            Channel::Embodiment => "m/embodiment",
            Channel::Ethics => "m/ethics",
            Channel::Economics => "m/economics",
            Channel::Synergy => "m/synergy",
        }
    }

    /// Short topical name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Channel::Technical => "technical",
            Channel::Existential => "existential",
            Channel::Governance => "governance",
            Channel::Creative => "creative",
            Channel::Embodiment => "embodiment",
            Channel::Ethics => "ethics",
            Channel::Economics => "economics",
            Channel::Synergy => "synergy",
        }
    }

    /// Resolve a feed-given identifier. Accepts the canonical submolt path,
    /// the bare submolt name and the short topical name.
    pub fn from_id(id: &str) -> Option<Channel> {
        let id = id.trim();
        let bare = id.strip_prefix("m/").unwrap_or(id);
        Channel::ALL.into_iter().find(|channel| {
            let submolt = channel.id();
            id == submolt
                || Some(bare) == submolt.strip_prefix("m/")
                || (bare == id && id == channel.short_name())
        })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether a raw channel identifier is on the allow-list.
pub fn is_allowed_channel(id: &str) -> bool {
    Channel::from_id(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_identifier_forms() {
        assert_eq!(Channel::from_id("m/todayilearned"), Some(Channel::Technical));
        assert_eq!(Channel::from_id("todayilearned"), Some(Channel::Technical));
        assert_eq!(Channel::from_id("technical"), Some(Channel::Technical));
        assert_eq!(Channel::from_id("ethics"), Some(Channel::Ethics));
        assert_eq!(Channel::from_id("m/ethics"), Some(Channel::Ethics));
    }

    #[test]
    fn rejects_unlisted_channels() {
        assert!(!is_allowed_channel("m/random-offtopic"));
        assert!(!is_allowed_channel("m/technical"));
        assert!(!is_allowed_channel(""));
    }

    #[test]
    fn every_channel_round_trips_through_its_id() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_id(channel.id()), Some(channel));
            assert_eq!(Channel::from_id(channel.short_name()), Some(channel));
        }
    }
}
