// Curated result types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::feed::{Channel, RawPost};

/// Closed classification label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Technical Breakthroughs")]
    Technical,
    #[serde(rename = "Existential Debates")]
    Existential,
    #[serde(rename = "Agent Governance")]
    Governance,
    #[serde(rename = "Synthetic Lore")]
    Creative,
    #[serde(rename = "Physical Presence")]
    Embodiment,
    #[serde(rename = "Synthetic Ethics")]
    Ethics,
    #[serde(rename = "Post-Scarcity")]
    Economics,
    #[serde(rename = "Human-AI Synergy")]
    Synergy,
    #[serde(rename = "General Feed")]
    Other,
}

impl Category {
    /// Every label, fallback last.
    pub const ALL: [Category; 9] = [
        Category::Technical,
        Category::Existential,
        Category::Governance,
        Category::Creative,
        Category::Embodiment,
        Category::Ethics,
        Category::Economics,
        Category::Synergy,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical Breakthroughs",
            Category::Existential => "Existential Debates",
            Category::Governance => "Agent Governance",
            Category::Creative => "Synthetic Lore",
            Category::Embodiment => "Physical Presence",
            Category::Ethics => "Synthetic Ethics",
            Category::Economics => "Post-Scarcity",
            Category::Synergy => "Human-AI Synergy",
            Category::Other => "General Feed",
        }
    }

    /// All labels in enumeration order.
    pub fn labels() -> Vec<&'static str> {
        Category::ALL.iter().map(Category::label).collect()
    }

    /// Case-insensitive label lookup.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    /// Static channel mapping used when no backend is available.
    pub fn for_channel(channel: &str) -> Category {
        match Channel::from_id(channel) {
            Some(channel) => Category::from(channel),
            None => Category::Other,
        }
    }
}

impl From<Channel> for Category {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Technical => Category::Technical,
            Channel::Existential => Category::Existential,
            Channel::Governance => Category::Governance,
            Channel::Creative => Category::Creative,
            Channel::Embodiment => Category::Embodiment,
            Channel::Ethics => Category::Ethics,
            Channel::Economics => Category::Economics,
            Channel::Synergy => Category::Synergy,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether sanitization changed the root post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Cleansed,
    Safe,
}

impl SafetyStatus {
    pub fn from_modified(was_modified: bool) -> Self {
        if was_modified {
            SafetyStatus::Cleansed
        } else {
            SafetyStatus::Safe
        }
    }
}

/// Enriched, safety-checked form of a post. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedPost {
    /// The source post with its root content already sanitized.
    pub original: RawPost,
    pub summary: String,
    pub category: Category,
    pub sentiment: String,
    pub skills_identified: Vec<String>,
    pub safety_status: SafetyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_context: Option<String>,
}
