pub mod openai_provider;
pub mod types;

pub use types::*;

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::config::LlmConfig;
use openai_provider::OpenAiProvider;

static PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Build the provider from config; without an `[llm]` section nothing is registered
pub fn initialize(config: Option<&LlmConfig>) {
    let Some(cfg) = config else {
        tracing::info!("LLM is not configured, keyword suggestions use the local heuristic");
        return;
    };
    if cfg.api_key.trim().is_empty() {
        tracing::warn!("LLM api_key is empty, keyword suggestions use the local heuristic");
        return;
    }

    let provider: Arc<dyn LlmProvider> = match &cfg.api_endpoint {
        Some(endpoint) => Arc::new(OpenAiProvider::new_with_endpoint(
            endpoint.clone(),
            cfg.api_key.clone(),
            cfg.model.clone(),
        )),
        None => Arc::new(OpenAiProvider::new(cfg.api_key.clone(), cfg.model.clone())),
    };
    tracing::info!("LLM provider {} ready (model {})", provider.provider_name(), cfg.model);
    let _ = PROVIDER.set(provider);
}

pub fn provider() -> Option<Arc<dyn LlmProvider>> {
    PROVIDER.get().cloned()
}
