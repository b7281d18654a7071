//! Pattern-matching resolution strategy — deterministic, always available.
//!
//! Runs the signal extractors over the catalog, applies caller context
//! overrides, derives brand from region, and accumulates confidence in
//! fixed increments. Pure function of (catalog, text, context): no clock,
//! no randomness, so resolving the same input twice yields identical
//! intents.

use std::sync::Arc;

use async_trait::async_trait;

use vault_protocol::{Intent, ParsingMethod, RegionInfo, RequestContext, SectionMatch};

use crate::catalog::Catalog;
use crate::extract;

use super::IntentStrategy;

/// Confidence floor before any signal lands.
const BASE_CONFIDENCE: f64 = 0.70;
/// Added when a product is detected.
const PRODUCT_BONUS: f64 = 0.15;
/// Added when at least one section matches.
const SECTIONS_BONUS: f64 = 0.10;
/// Sections kept on the intent.
const MAX_SECTIONS: usize = 2;
/// Deliverables selected per matched section.
const MAX_DELIVERABLES_PER_SECTION: usize = 3;
/// Raw keyword score divisor for per-section confidence.
const SECTION_SCORE_SCALE: f64 = 5.0;

/// Deterministic extractor-pipeline strategy.
pub struct PatternStrategy {
    catalog: Arc<Catalog>,
}

impl PatternStrategy {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl IntentStrategy for PatternStrategy {
    async fn resolve(&self, text: &str, context: &RequestContext) -> Option<Intent> {
        if self.catalog.is_empty() {
            return None;
        }
        Some(build_intent(&self.catalog, text, context))
    }

    fn strategy_name(&self) -> &str {
        "pattern_matching"
    }
}

/// The extractor pipeline. Explicit context values take precedence over
/// anything inferred from the text.
pub fn build_intent(catalog: &Catalog, text: &str, context: &RequestContext) -> Intent {
    let mut intent = Intent::unmatched(text, ParsingMethod::PatternMatching);
    intent.use_case = context
        .use_case
        .clone()
        .unwrap_or_else(|| extract::infer_use_case(text).to_string());
    intent.region = context
        .region
        .clone()
        .unwrap_or_else(|| extract::infer_region(text).to_string());
    intent.confidence = BASE_CONFIDENCE;

    // Product signal.
    let product = extract::find_product(catalog, text);
    if let Some(product) = product {
        intent.products.push(product.to_match());
        intent.reasoning.push(format!(
            "Detected product: {} ({})",
            product.name, product.model_code
        ));
        intent.confidence += PRODUCT_BONUS;
    }

    // Section signal.
    let scored = extract::score_sections(catalog, text, Some(intent.use_case.as_str()));
    if !scored.is_empty() {
        for hit in scored.iter().take(MAX_SECTIONS) {
            let deliverables: Vec<String> = hit
                .section
                .deliverables
                .iter()
                .take(MAX_DELIVERABLES_PER_SECTION)
                .map(|d| d.to_string())
                .collect();
            intent.selected_deliverables.extend(deliverables.clone());
            intent.sections.push(SectionMatch {
                name: hit.section.name.to_string(),
                deliverables,
                confidence: (hit.score as f64 / SECTION_SCORE_SCALE).min(1.0),
            });
        }
        let names: Vec<&str> = scored
            .iter()
            .take(MAX_SECTIONS)
            .map(|hit| hit.section.name)
            .collect();
        intent
            .reasoning
            .push(format!("Targeting sections: {}", names.join(", ")));
        intent.confidence += SECTIONS_BONUS;
    }

    // Regional and brand context.
    if intent.region != "global"
        && let Some(mapping) = catalog.region(&intent.region)
    {
        intent.brand = Some(mapping.brand.to_string());
        intent.regional_context = Some(RegionInfo {
            brand: mapping.brand.to_string(),
            theater: mapping.theater.to_string(),
        });
        intent.reasoning.push(format!(
            "Region: {} -> Brand: {}",
            intent.region, mapping.brand
        ));

        if mapping.brand == "Sage"
            && let Some(product) = product
            && let Some(sage) = product.sage_code
        {
            intent.reasoning.push(format!(
                "Using Sage model: {} instead of {}",
                sage, product.model_code
            ));
        }
    }

    // Use-case format preferences.
    if let Some(profile) = catalog.use_case(&intent.use_case) {
        intent.formats = profile
            .preferred_formats
            .iter()
            .map(|f| f.to_string())
            .collect();
        intent.reasoning.push(format!(
            "Use case: {} -> Formats: {}",
            intent.use_case,
            profile.preferred_formats.join(", ")
        ));
    }

    intent.clamp_confidence();
    intent
}
