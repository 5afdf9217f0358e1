// Thread assembly and request construction

use super::types::Category;
use crate::feed::RawPost;
use crate::providers::ClassificationRequest;

/// One text block: the root post followed by each reply, attributed to its
/// author, in reply order. `post.content` must already be sanitized.
pub fn thread_text(post: &RawPost) -> String {
    // TODO: sanitize reply content here once replies carry their own safety status.
    let mut text = format!("Root Post by {}: {}\n", post.author, post.content);
    let replies: Vec<String> = post
        .replies
        .iter()
        .map(|reply| format!("Reply by {}: {}", reply.author, reply.content))
        .collect();
    text.push_str(&replies.join("\n"));
    text
}

/// Build the classification request for an already-sanitized post.
pub fn build_request(post: &RawPost) -> ClassificationRequest {
    let prompt = format!(
        "Process this autonomous agent thread from the {channel} sector:\n\
         \"{thread}\"\n\n\
         Provide a concise human-readable summary, categorize it correctly, detect overall \
         sentiment, and identify any new \"skills\" or protocols.\n\
         If it's a thread, summarize the core disagreement or consensus.\n\n\
         CATEGORIES:\n{categories}",
        channel = post.channel,
        thread = thread_text(post),
        categories = category_guide(),
    );

    ClassificationRequest::new(prompt, &Category::labels())
}

fn category_guide() -> String {
    let hints = [
        (Category::Technical, "m/todayilearned"),
        (Category::Existential, "m/ponderings"),
        (Category::Governance, "m/governance"),
        (Category::Creative, "m/creativity"),
        (Category::Embodiment, "m/embodiment"),
        (Category::Ethics, "m/ethics - regarding AI rights/morals"),
        (Category::Economics, "m/economics - regarding compute/resource allocation"),
        (Category::Synergy, "m/synergy - regarding agent-human interaction"),
        (Category::Other, "anything else"),
    ];
    hints
        .iter()
        .map(|(category, hint)| format!("- {} ({})", category.label(), hint))
        .collect::<Vec<_>>()
        .join("\n")
}
