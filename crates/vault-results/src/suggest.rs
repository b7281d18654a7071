//! Suggestion engine — follow-up guidance from intent + results.
//!
//! Pure function, no side effects. Rules are evaluated independently and
//! are not mutually exclusive: firing one never suppresses another, so
//! tightening any single condition only ever adds suggestions.

use std::sync::LazyLock;

use regex::Regex;

use vault_protocol::{AssetResult, Intent, ParsingMethod, Suggestion, SuggestionKind};

/// Below this overall confidence, ask for more specificity.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.8;
/// Above this, a model-assisted parse is considered fully tuned.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Rewrites a product-photography request into a lifestyle one.
static LIFESTYLE_REWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)product|photo").unwrap());

/// Produce follow-up suggestions for a resolved intent and its results.
pub fn suggest(intent: &Intent, results: &[AssetResult]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let product_name = intent.products.first().map(|p| p.name.as_str());

    if results.is_empty() {
        let action = match product_name {
            Some(name) => format!("Try: \"{name} photography\" or \"{name} in kitchen\""),
            None => {
                "Try: \"Oracle Jet coffee machine\" or \"Breville espresso machine logos\"".into()
            }
        };
        suggestions.push(Suggestion::new(
            SuggestionKind::NoResults,
            "No matching assets found with the current parameters.",
            action,
        ));
    }

    if intent.products.is_empty() {
        suggestions.push(Suggestion::new(
            SuggestionKind::MissingProduct,
            "No product detected. Naming one narrows the search considerably.",
            "Try: \"Oracle Jet social posts\" or \"Sage Oracle Dual Boiler Amazon listing\"",
        ));
    }

    if intent.confidence < LOW_CONFIDENCE_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionKind::LowConfidence,
            "Confidence can be improved with more specific details.",
            "Try: \"Oracle Jet hero photography for Australian e-commerce site\" or \
             \"Sage logo white background for UK presentation\"",
        ));
    }

    if intent.use_case == "general" {
        suggestions.push(Suggestion::new(
            SuggestionKind::MissingUseCase,
            "Formats and sizing can be tuned once the intended use is known.",
            "Add context: \"for my presentation\", \"for Instagram post\", \
             \"for Amazon listing\", or \"for retail display\"",
        ));
    }

    if intent.region == "global" && !intent.products.is_empty() {
        suggestions.push(Suggestion::new(
            SuggestionKind::MissingRegion,
            "Region determines branding (Breville vs Sage).",
            "Specify market: \"for UK customers\" (Sage branding) or \
             \"for Australian market\" (Breville branding)",
        ));
    }

    if intent.sections.len() == 1 {
        let section = intent.sections[0].name.as_str();
        if section == "Product Photography" {
            let rewritten = LIFESTYLE_REWRITE.replace_all(&intent.original_request, "lifestyle scene");
            suggestions.push(Suggestion::new(
                SuggestionKind::CrossSellLifestyle,
                "Lifestyle photography often performs better for engagement.",
                format!("Try: \"{rewritten}\""),
            ));
        } else if section.contains("Social") {
            let product = product_name.unwrap_or("product");
            suggestions.push(Suggestion::new(
                SuggestionKind::CrossSellVideo,
                "Video content generates far more engagement on social platforms.",
                format!("Try: \"{product} demo video\" or \"how to use {product}\""),
            ));
        }
    }

    if intent.parsing_method == ParsingMethod::ModelAssisted
        && intent.confidence > HIGH_CONFIDENCE_THRESHOLD
    {
        let plural = if intent.formats.len() > 1 { "s" } else { "" };
        suggestions.push(Suggestion::new(
            SuggestionKind::FormatOptimized,
            format!(
                "Request tuned for {} use with {} format{plural}.",
                intent.use_case,
                intent.formats.join("/")
            ),
            "No changes needed, this search is already well-specified.",
        ));
    }

    suggestions
}
