//! Signal extractors — pure functions over request text and the catalog.
//!
//! Ordering rules here are contractual:
//! - the product extractor returns the first hit in catalog declaration
//!   order (model codes before aliases), favoring precision over recall;
//! - the use-case and region extractors evaluate an explicit ordered list of
//!   `(Regex, label)` pairs with early exit, so overlapping keywords
//!   ("digital" is both a web and a social cue) resolve by priority;
//! - section scoring sorts stably, so ties keep table order.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{AssetSection, Catalog, Product};

/// Use-case cues, highest priority first.
static USE_CASE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)presentation|slide|ppt|powerpoint|keynote", "presentation"),
        (r"(?i)web|website|online|digital|homepage", "web"),
        (r"(?i)social|instagram|facebook|twitter|linkedin|tiktok", "social"),
        (r"(?i)amazon|marketplace|ecommerce|a\+|aplus", "amazon"),
        (r"(?i)retail|\bstore\b|\bpos\b|point.of.sale|in.?store", "retail"),
        (r"(?i)print|brochure|flyer|poster|catalogue", "print"),
        (r"(?i)email|\bedm\b|newsletter|mailchimp", "email"),
        (r"(?i)video|youtube|tutorial|demo", "video"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

/// Region cues, highest priority first. A bare "sage" mention implies the
/// UK/EU market even though it is not a region token.
static REGION_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)australia|australian|\baussie\b|\bau\b", "AU"),
        (r"(?i)america|\busa\b|\bus\b|united states|american", "US"),
        (r"(?i)canada|canadian|\bca\b", "CA"),
        (r"(?i)\buk\b|britain|british|united kingdom|england", "GB"),
        (r"(?i)germany|german|\bde\b|deutschland", "DE"),
        (r"(?i)europe|european|\beu\b|emea", "EU"),
        (r"(?i)\bsage\b", "GB"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

/// A section with its accumulated keyword/use-case score.
#[derive(Debug, Clone, Copy)]
pub struct SectionScore {
    pub section: &'static AssetSection,
    pub score: u32,
}

/// Find the first product mentioned in the text.
///
/// Pass 1 scans for model codes (primary, then Sage) of each product in
/// declaration order; pass 2 scans aliases the same way. First hit wins —
/// with two distinct products in the text, the one declared earlier in the
/// catalog is returned, not the one appearing earlier in the text.
pub fn find_product(catalog: &Catalog, text: &str) -> Option<&'static Product> {
    let lower = text.to_lowercase();

    for product in catalog.products() {
        if lower.contains(&product.model_code.to_lowercase()) {
            return Some(product);
        }
        if let Some(sage) = product.sage_code
            && lower.contains(&sage.to_lowercase())
        {
            return Some(product);
        }
    }

    for product in catalog.products() {
        if product.aliases.iter().any(|alias| lower.contains(alias)) {
            return Some(product);
        }
    }

    None
}

/// Score every section against the text: +2 per keyword substring present,
/// +3 when the current use case is among the section's aligned use cases.
/// Only sections with a positive score are returned, sorted descending;
/// the sort is stable so equal scores keep declaration order.
pub fn score_sections(catalog: &Catalog, text: &str, use_case: Option<&str>) -> Vec<SectionScore> {
    let lower = text.to_lowercase();

    let mut matches: Vec<SectionScore> = catalog
        .sections()
        .iter()
        .filter_map(|section| {
            let mut score = 0;
            for keyword in section.keywords {
                if lower.contains(keyword) {
                    score += 2;
                }
            }
            if let Some(use_case) = use_case
                && section.use_cases.contains(&use_case)
            {
                score += 3;
            }
            (score > 0).then_some(SectionScore { section, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Infer the use case from text cues; "general" when nothing matches.
pub fn infer_use_case(text: &str) -> &'static str {
    USE_CASE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
        .unwrap_or("general")
}

/// Infer the region from text cues; "global" when nothing matches.
pub fn infer_region(text: &str) -> &'static str {
    REGION_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
        .unwrap_or("global")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    // ── Product extraction ──────────────────────────────────────

    #[test]
    fn product_by_model_code() {
        let product = find_product(&catalog(), "need BES985 imagery").unwrap();
        assert_eq!(product.name, "Oracle Jet");
    }

    #[test]
    fn product_by_sage_code() {
        let product = find_product(&catalog(), "SES995 for the UK site").unwrap();
        assert_eq!(product.name, "Oracle Dual Boiler");
    }

    #[test]
    fn product_by_alias_case_insensitive() {
        let product = find_product(&catalog(), "Oracle Jet logo please").unwrap();
        assert_eq!(product.model_code, "BES985");
    }

    #[test]
    fn model_code_beats_alias() {
        // "touch" is an alias of BES990, but the explicit code wins pass 1.
        let product = find_product(&catalog(), "touch screen shots of BES995").unwrap();
        assert_eq!(product.model_code, "BES995");
    }

    #[test]
    fn declaration_order_wins_over_text_order() {
        // "touch" (BES990) appears before "jet" (BES985) in the text,
        // but BES985 is declared first in the catalog.
        let product = find_product(&catalog(), "touch and jet comparison").unwrap();
        assert_eq!(product.model_code, "BES985");
    }

    #[test]
    fn no_product_returns_none() {
        assert!(find_product(&catalog(), "some kettle brochure").is_none());
    }

    // ── Section scoring ─────────────────────────────────────────

    #[test]
    fn logo_request_scores_logos_section() {
        let scores = score_sections(&catalog(), "oracle jet logo", None);
        assert_eq!(scores[0].section.key, "logos");
        assert_eq!(scores[0].score, 2);
    }

    #[test]
    fn use_case_bonus_applies() {
        let with_bonus = score_sections(&catalog(), "social posts", Some("social"));
        let top = &with_bonus[0];
        assert_eq!(top.section.key, "social_media");
        // "social" + "social media"? only "social" keyword matches (+2), plus bonus (+3).
        assert_eq!(top.score, 5);
    }

    #[test]
    fn ties_keep_declaration_order() {
        // "banner" hits both digital_assets ("web banner") and point_of_sale
        // ("banner") — craft text where scores tie and order decides.
        let scores = score_sections(&catalog(), "hero image and lifestyle", None);
        assert_eq!(scores[0].section.key, "product_photography");
        assert_eq!(scores[1].section.key, "lifestyle_photography");
        assert_eq!(scores[0].score, scores[1].score);
    }

    #[test]
    fn unrelated_text_scores_nothing() {
        assert!(score_sections(&catalog(), "xyz", None).is_empty());
    }

    // ── Use-case inference ──────────────────────────────────────

    #[test]
    fn presentation_cues() {
        assert_eq!(infer_use_case("slides for the board deck"), "presentation");
        assert_eq!(infer_use_case("PowerPoint ready"), "presentation");
    }

    #[test]
    fn presentation_outranks_web_on_overlap() {
        // "digital" alone is a web cue; combined with a presentation cue the
        // higher-priority pattern wins.
        assert_eq!(infer_use_case("digital slide deck"), "presentation");
    }

    #[test]
    fn amazon_and_social_cues() {
        assert_eq!(infer_use_case("amazon listing photos"), "amazon");
        assert_eq!(infer_use_case("instagram story"), "social");
    }

    #[test]
    fn unknown_use_case_is_general() {
        assert_eq!(infer_use_case("product photos for UK market"), "general");
    }

    // ── Region inference ────────────────────────────────────────

    #[test]
    fn explicit_region_tokens() {
        assert_eq!(infer_region("for the Australian market"), "AU");
        assert_eq!(infer_region("UK launch materials"), "GB");
        assert_eq!(infer_region("Deutschland campaign"), "DE");
    }

    #[test]
    fn sage_mention_implies_gb() {
        assert_eq!(infer_region("Sage product photos"), "GB");
    }

    #[test]
    fn short_codes_require_word_boundaries() {
        // "bureau" must not read as AU, "trust" must not read as US.
        assert_eq!(infer_region("bureau furniture trust"), "global");
        assert_eq!(infer_region("ship to AU please"), "AU");
    }

    #[test]
    fn unknown_region_is_global() {
        assert_eq!(infer_region("logo for my deck"), "global");
    }
}
