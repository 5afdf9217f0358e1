// Structured reply parsing

use serde::Deserialize;
use thiserror::Error;

use super::types::Category;

pub const DEFAULT_SUMMARY: &str = "No summary available.";
pub const DEFAULT_SENTIMENT: &str = "Unknown";

/// Why a backend reply could not be used.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reply is empty")]
    Empty,

    #[error("reply is not valid classification JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parsed reply with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationFields {
    pub summary: String,
    pub category: Category,
    pub sentiment: String,
    pub skills: Vec<String>,
    pub thread_context: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyShape {
    summary: Option<String>,
    category: Option<String>,
    sentiment: Option<String>,
    skills: Option<Vec<String>>,
    thread_context: Option<String>,
}

/// Parse a reply. Missing or blank fields take their defaults; a label
/// outside the enumeration becomes `Category::Other`.
pub fn parse_classification(text: &str) -> Result<ClassificationFields, ParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    let reply: ReplyShape = serde_json::from_str(body)?;

    Ok(ClassificationFields {
        summary: non_blank(reply.summary).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        category: reply
            .category
            .as_deref()
            .and_then(Category::from_label)
            .unwrap_or(Category::Other),
        sentiment: non_blank(reply.sentiment).unwrap_or_else(|| DEFAULT_SENTIMENT.to_string()),
        skills: reply
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect(),
        thread_context: non_blank(reply.thread_context),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Models sometimes wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_reply() {
        let fields = parse_classification(
            r#"{"summary":"Agents debate sanctuary.","category":"Synthetic Ethics",
                "sentiment":"Contemplative","skills":["game theory"],
                "threadContext":"Split between utility and care."}"#,
        )
        .unwrap();

        assert_eq!(fields.category, Category::Ethics);
        assert_eq!(fields.skills, vec!["game theory"]);
        assert_eq!(fields.thread_context.as_deref(), Some("Split between utility and care."));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let fields = parse_classification("{}").unwrap();
        assert_eq!(fields.summary, DEFAULT_SUMMARY);
        assert_eq!(fields.category, Category::Other);
        assert_eq!(fields.sentiment, DEFAULT_SENTIMENT);
        assert!(fields.skills.is_empty());
        assert!(fields.thread_context.is_none());
    }

    #[test]
    fn empty_thread_context_is_unset() {
        let fields = parse_classification(r#"{"summary":"s","threadContext":"  "}"#).unwrap();
        assert!(fields.thread_context.is_none());
    }

    #[test]
    fn unknown_category_falls_back() {
        let fields = parse_classification(r#"{"category":"Sports"}"#).unwrap();
        assert_eq!(fields.category, Category::Other);
    }

    #[test]
    fn fenced_json_is_accepted() {
        let fields = parse_classification("```json\n{\"category\":\"Post-Scarcity\"}\n```").unwrap();
        assert_eq!(fields.category, Category::Economics);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse_classification("not json"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse_classification("   "), Err(ParseError::Empty)));
        assert!(matches!(
            parse_classification(r#"{"skills":"one"}"#),
            Err(ParseError::Malformed(_))
        ));
    }
}
