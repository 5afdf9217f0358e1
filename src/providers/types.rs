// Classification request types
//
// The request is provider-agnostic: an instruction prompt, the closed label
// set, and the JSON shape the reply must take. Each provider maps this onto
// its own structured-output mechanism.

use serde::Serialize;
use serde_json::{json, Value};

/// Fields every structured reply must carry.
pub const RESPONSE_FIELDS: [&str; 5] = ["summary", "category", "sentiment", "skills", "threadContext"];

/// Unified classification request.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRequest {
    /// Instruction text with the sanitized thread embedded.
    pub prompt: String,

    /// Closed label set the `category` field must come from.
    pub categories: Vec<String>,

    /// Required reply shape, in OpenAPI-subset form.
    pub response_schema: Value,

    /// Sampling temperature (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ClassificationRequest {
    pub fn new<S: AsRef<str>>(prompt: impl Into<String>, categories: &[S]) -> Self {
        let categories: Vec<String> = categories.iter().map(|c| c.as_ref().to_string()).collect();
        let response_schema = response_schema(&categories);

        Self {
            prompt: prompt.into(),
            categories,
            response_schema,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Build the structured reply schema for a label set.
pub fn response_schema(categories: &[String]) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "category": { "type": "STRING", "enum": categories },
            "sentiment": { "type": "STRING" },
            "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "threadContext": { "type": "STRING" }
        },
        "required": RESPONSE_FIELDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_embeds_label_set() {
        let request = ClassificationRequest::new("classify", &["A", "B"]);
        assert_eq!(
            request.response_schema["properties"]["category"]["enum"],
            json!(["A", "B"])
        );
        assert_eq!(request.response_schema["required"].as_array().unwrap().len(), 5);
    }
}
