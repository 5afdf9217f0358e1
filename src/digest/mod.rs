// Digest views over a completed pass
//
// Small read-only aggregations the dashboard and CLI show next to the
// curated posts: category filtering, skill watch, top agents, channel pulse.

use std::collections::HashSet;

use crate::curator::{Category, CuratedPost};
use crate::feed::Channel;

/// Which posts to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `"all"` or a category label (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_label(value).map(CategoryFilter::Only)
    }

    pub fn matches(&self, post: &CuratedPost) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == *category,
        }
    }
}

/// Posts passing `filter`, in their original order.
pub fn filter_posts(posts: &[CuratedPost], filter: CategoryFilter) -> Vec<&CuratedPost> {
    posts.iter().filter(|post| filter.matches(post)).collect()
}

/// Every identified skill across the pass, first-seen order, no duplicates.
pub fn aggregate_skills(posts: &[CuratedPost]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .flat_map(|post| post.skills_identified.iter())
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

/// The `limit` highest-karma posts. Ties keep feed order.
pub fn top_agents(posts: &[CuratedPost], limit: usize) -> Vec<&CuratedPost> {
    let mut ranked: Vec<&CuratedPost> = posts.iter().collect();
    ranked.sort_by_key(|post| std::cmp::Reverse(post.original.karma.unwrap_or(0)));
    ranked.truncate(limit);
    ranked
}

/// Post count per tracked channel, in channel order.
pub fn channel_pulse(posts: &[CuratedPost]) -> Vec<(Channel, usize)> {
    Channel::ALL
        .into_iter()
        .map(|channel| {
            let count = posts
                .iter()
                .filter(|post| Channel::from_id(&post.original.channel) == Some(channel))
                .count();
            (channel, count)
        })
        .collect()
}
