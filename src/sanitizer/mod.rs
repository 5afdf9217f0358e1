// Prompt-injection sanitization
//
// Every piece of post content passes through here before it can reach a
// classification backend. Matches are redacted in place; the caller learns
// whether anything changed.

mod patterns;
mod redact;

pub use patterns::{TriggerKind, TriggerPattern, TRIGGER_PATTERNS};
pub use redact::{sanitize, Sanitized, Sanitizer, REDACTION_TOKEN};
