// Plain-text rendering of sync results

use std::fmt::Write;

use crate::curator::{CuratedPost, SafetyStatus};
use crate::digest::{aggregate_skills, channel_pulse, filter_posts, top_agents, CategoryFilter};
use crate::pipeline::SyncState;
use crate::sanitizer::Sanitized;

const TOP_AGENT_COUNT: usize = 5;

pub fn format_post(post: &CuratedPost) -> String {
    let raw = &post.original;
    let mut out = String::new();

    let badge = match post.safety_status {
        SafetyStatus::Cleansed => " (cleansed)",
        SafetyStatus::Safe => "",
    };
    let _ = writeln!(out, "[{}] {}{}", post.category, raw.id, badge);

    let mut byline = format!("  by {} in {}", raw.author, raw.channel);
    if let Some(karma) = raw.karma {
        let _ = write!(byline, ", karma {}", karma);
    }
    if let Some(wallet) = &raw.wallet_address {
        let _ = write!(byline, ", {}", wallet);
    }
    let _ = writeln!(out, "{}", byline);

    let _ = writeln!(out, "  {}", post.summary);
    let _ = writeln!(out, "  Sentiment: {}", post.sentiment);
    if !post.skills_identified.is_empty() {
        let _ = writeln!(out, "  Skills: {}", post.skills_identified.join(", "));
    }
    if let Some(context) = &post.thread_context {
        let _ = writeln!(out, "  Thread ({} replies): {}", raw.replies.len(), context);
    }
    out
}

pub fn format_posts(posts: &[&CuratedPost]) -> String {
    if posts.is_empty() {
        return "No posts in this view.\n".to_string();
    }
    posts
        .iter()
        .map(|post| format_post(post))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Current board state, restricted to `filter`.
pub fn format_state(state: &SyncState, filter: CategoryFilter) -> String {
    match state {
        SyncState::Pending => "Waiting for the first sync pass...\n".to_string(),
        SyncState::Failed(failure) => format!(
            "{}\n(pass #{} at {})\n",
            failure.message,
            failure.generation,
            failure.failed_at.format("%H:%M:%S")
        ),
        SyncState::Ready(snapshot) => {
            let visible = filter_posts(&snapshot.posts, filter);
            let mut out = format!(
                "Pass #{} at {}: {} of {} posts\n\n",
                snapshot.generation,
                snapshot.synced_at.format("%H:%M:%S"),
                visible.len(),
                snapshot.posts.len()
            );
            out.push_str(&format_posts(&visible));
            out
        }
    }
}

/// Skill watch, top agents and per-channel activity.
pub fn format_digest(posts: &[CuratedPost]) -> String {
    let mut out = String::new();

    let skills = aggregate_skills(posts);
    let _ = writeln!(out, "Skill watch:");
    if skills.is_empty() {
        let _ = writeln!(out, "  (none spotted)");
    } else {
        for skill in &skills {
            let _ = writeln!(out, "  - {}", skill);
        }
    }

    let _ = writeln!(out, "Top agents:");
    for (rank, post) in top_agents(posts, TOP_AGENT_COUNT).iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({} karma)",
            rank + 1,
            post.original.author,
            post.original.karma.unwrap_or(0)
        );
    }

    let _ = writeln!(out, "Channel pulse:");
    for (channel, count) in channel_pulse(posts) {
        let _ = writeln!(out, "  {:<18} {}", channel.id(), count);
    }
    out
}

pub fn format_sanitized(result: &Sanitized) -> String {
    if !result.was_modified {
        return format!("{}\n(clean)\n", result.content);
    }
    format!(
        "{}\n(redacted: {})\n",
        result.content,
        result.triggers.join(", ")
    )
}
