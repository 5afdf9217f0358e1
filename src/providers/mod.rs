// Classification backends
//
// Abstraction over the language-model service that classifies and summarizes
// threads. The curator only ever talks to `ClassificationBackend`.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod gemini;
pub mod types;

pub use factory::create_backend;
pub use gemini::GeminiProvider;
pub use types::{response_schema, ClassificationRequest, RESPONSE_FIELDS};

/// Trait for classification backends
///
/// Implementations send one request and hand back the raw structured reply
/// (JSON text). Parsing and defaulting happen in the curator.
#[async_trait]
pub trait ClassificationBackend: Send + Sync {
    /// Send a request and return the reply text.
    async fn classify(&self, request: &ClassificationRequest) -> Result<String>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Get the model this backend sends requests to
    fn default_model(&self) -> &str;
}
