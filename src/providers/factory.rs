// Backend factory
//
// Creates the classification backend from the resolved configuration.

use anyhow::Result;
use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::ClassificationBackend;
use crate::config::BackendSetting;

/// Build a backend handle for `setting`.
///
/// `Ok(None)` means no backend is configured, which switches the curator to
/// its local heuristic. Call again whenever credentials change; handles are
/// never re-pointed at new credentials.
pub fn create_backend(setting: &BackendSetting) -> Result<Option<Arc<dyn ClassificationBackend>>> {
    match setting {
        BackendSetting::Unconfigured => Ok(None),

        BackendSetting::Gemini {
            api_key,
            model,
            timeout,
            base_url,
        } => {
            let mut provider = GeminiProvider::new(api_key.clone())?
                .with_model(model.clone())
                .with_timeout(*timeout)?;
            if let Some(url) = base_url {
                provider = provider.with_base_url(url.clone());
            }
            Ok(Some(Arc::new(provider)))
        }
    }
}
