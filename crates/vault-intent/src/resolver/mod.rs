//! Intent resolution — strategy trait and the two-level fallback chain.
//!
//! Selection policy per request:
//! `Start -> (model configured? -> TryModelAssisted -> [Ok -> Done |
//! Err -> PatternMatching -> Done]) | (not configured -> PatternMatching
//! -> Done)`. A failed model call triggers exactly one fallback attempt,
//! never a retry. The terminal state always yields a complete intent: when
//! even the knowledge base is unavailable, a minimal keyword-only intent is
//! produced.

pub mod model;
pub mod patterns;

use std::sync::Arc;

use async_trait::async_trait;

use vault_protocol::{Intent, ParsingMethod, RequestContext};

use crate::catalog::Catalog;
use crate::extract;
use model::{ModelConfig, ModelStrategy};
use patterns::PatternStrategy;

/// Confidence assigned to minimal keyword-only intents.
const MINIMAL_CONFIDENCE: f64 = 0.30;

/// Trait for strategies that parse free text into an intent.
/// Returns `None` when the strategy cannot produce one.
#[async_trait]
pub trait IntentStrategy: Send + Sync {
    async fn resolve(&self, text: &str, context: &RequestContext) -> Option<Intent>;

    /// Name of this strategy (for logging/audit).
    fn strategy_name(&self) -> &str;
}

/// Composite resolver: model-assisted when configured, pattern-matching
/// fallback, minimal keyword-only intent as the last resort.
pub struct IntentResolver {
    model: Option<ModelStrategy>,
    patterns: PatternStrategy,
    catalog: Arc<Catalog>,
}

impl IntentResolver {
    /// Pattern-matching only (no model endpoint configured).
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            model: None,
            patterns: PatternStrategy::new(catalog.clone()),
            catalog,
        }
    }

    /// Model-assisted first, pattern-matching fallback.
    pub fn with_model(catalog: Arc<Catalog>, config: ModelConfig) -> Self {
        Self {
            model: Some(ModelStrategy::new(catalog.clone(), config)),
            patterns: PatternStrategy::new(catalog.clone()),
            catalog,
        }
    }

    /// Whether a model endpoint is configured.
    pub fn model_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Resolve a request. `text` must be non-empty; length bounds are the
    /// transport layer's concern. Never fails — the fallback chain always
    /// terminates in a complete intent.
    pub async fn resolve(&self, text: &str, context: &RequestContext) -> Intent {
        if let Some(model) = &self.model {
            if let Some(intent) = model.resolve(text, context).await {
                return intent;
            }
            tracing::warn!("model-assisted parse failed, falling back to pattern matching");
        }

        if let Some(intent) = self.patterns.resolve(text, context).await {
            return intent;
        }

        tracing::warn!("knowledge base unavailable, using minimal keyword-only parse");
        minimal_intent(text, context)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Keyword-only intent for when the knowledge base is unavailable. The
/// use-case and region extractors still run (they need no catalog); product
/// and section signals stay empty.
fn minimal_intent(text: &str, context: &RequestContext) -> Intent {
    let mut intent = Intent::unmatched(text, ParsingMethod::MinimalFallback);
    intent.use_case = context
        .use_case
        .clone()
        .unwrap_or_else(|| extract::infer_use_case(text).to_string());
    intent.region = context
        .region
        .clone()
        .unwrap_or_else(|| extract::infer_region(text).to_string());
    intent.confidence = MINIMAL_CONFIDENCE;
    intent
        .reasoning
        .push("Knowledge base unavailable, keyword-only parse".to_string());
    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pattern_only_resolver_tags_pattern_matching() {
        let resolver = IntentResolver::new(Arc::new(Catalog::builtin()));
        let intent = resolver
            .resolve("Oracle Jet logo", &RequestContext::default())
            .await;
        assert_eq!(intent.parsing_method, ParsingMethod::PatternMatching);
        assert_eq!(intent.products[0].model_code, "BES985");
    }

    #[tokio::test]
    async fn empty_catalog_falls_back_to_minimal() {
        let resolver = IntentResolver::new(Arc::new(Catalog::empty()));
        let intent = resolver
            .resolve("Oracle Jet logo for my presentation", &RequestContext::default())
            .await;
        assert_eq!(intent.parsing_method, ParsingMethod::MinimalFallback);
        assert!(intent.products.is_empty());
        assert_eq!(intent.use_case, "presentation");
        assert_eq!(intent.confidence, MINIMAL_CONFIDENCE);
    }

    #[tokio::test]
    async fn minimal_intent_honors_context_overrides() {
        let context = RequestContext {
            use_case: Some("social".into()),
            region: Some("AU".into()),
        };
        let intent = minimal_intent("whatever", &context);
        assert_eq!(intent.use_case, "social");
        assert_eq!(intent.region, "AU");
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let resolver = IntentResolver::new(Arc::new(Catalog::builtin()));
        let context = RequestContext {
            use_case: None,
            region: Some("GB".into()),
        };
        let first = resolver.resolve("dual boiler hero image", &context).await;
        let second = resolver.resolve("dual boiler hero image", &context).await;
        assert_eq!(first, second);
    }
}
