//! Shared application state for the Axum server.
//!
//! The pipeline is stateless per request: the only shared pieces are the
//! read-only catalog and the resolver, both behind `Arc`. No locks are
//! needed — nothing here is ever mutated after startup.

use std::sync::Arc;

use vault_intent::{Catalog, IntentResolver, ModelConfig};

/// Shared application state, cloned into each Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Static knowledge base.
    pub catalog: Arc<Catalog>,
    /// Intent resolver (pattern-matching, optionally model-assisted).
    pub resolver: Arc<IntentResolver>,
}

impl AppState {
    /// Pattern-matching only state with the built-in catalog.
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::builtin());
        Self {
            resolver: Arc::new(IntentResolver::new(catalog.clone())),
            catalog,
        }
    }

    /// State with a model endpoint configured: model-assisted first,
    /// pattern-matching fallback.
    pub fn with_model(config: ModelConfig) -> Self {
        let catalog = Arc::new(Catalog::builtin());
        Self {
            resolver: Arc::new(IntentResolver::with_model(catalog.clone(), config)),
            catalog,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_model() {
        let state = AppState::new();
        assert!(!state.resolver.model_configured());
        assert!(!state.catalog.is_empty());
    }

    #[test]
    fn model_state_reports_configured() {
        let state = AppState::with_model(ModelConfig {
            api_url: "http://localhost:9/v1/chat/completions".into(),
            api_key: "test".into(),
            model: "gpt-4o-mini".into(),
            timeout_secs: 1,
        });
        assert!(state.resolver.model_configured());
    }
}
