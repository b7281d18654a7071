//! E2E tests for the region-to-brand invariant and catalog ordering rules.

mod helpers;

use helpers::TestHarness;
use vault_intent::Catalog;
use vault_intent::resolver::patterns::build_intent;
use vault_protocol::RequestContext;

/// For every declared region code, resolving with that region as context
/// yields exactly the mapped brand.
#[tokio::test]
async fn e2e_region_brand_invariant_over_all_codes() {
    let catalog = Catalog::builtin();

    for mapping in catalog.regions() {
        let context = RequestContext {
            use_case: None,
            region: Some(mapping.region.to_string()),
        };
        let intent = build_intent(&catalog, "Oracle Jet assets", &context);

        assert_eq!(
            intent.brand.as_deref(),
            Some(mapping.brand),
            "region {} should map to {}",
            mapping.region,
            mapping.brand
        );
        assert_eq!(
            intent.regional_context.as_ref().unwrap().theater,
            mapping.theater
        );
    }
}

/// The same invariant holds through the HTTP surface.
#[tokio::test]
async fn e2e_region_brand_invariant_over_http() {
    let h = TestHarness::pattern_only();

    for (region, brand) in [("AU", "Breville"), ("US", "Breville"), ("GB", "Sage"), ("EU", "Sage")]
    {
        let (_, json) = h
            .find(serde_json::json!({
                "request": "Oracle Jet assets",
                "context": {"region": region}
            }))
            .await;
        assert_eq!(json["intent"]["brand"], brand, "region {region}");
    }
}

/// Product extraction prefers catalog declaration order, not text order.
#[tokio::test]
async fn e2e_declaration_order_beats_text_order() {
    let catalog = Catalog::builtin();
    let intent = build_intent(
        &catalog,
        "comparing the touch against the jet",
        &RequestContext::default(),
    );
    // "touch" (BES990) appears first in the text, but "jet" (BES985) is
    // declared earlier in the catalog.
    assert_eq!(intent.products[0].model_code, "BES985");
}

/// Confidence stays within [0.0, 1.0] across a spread of inputs.
#[tokio::test]
async fn e2e_confidence_bounds() {
    let catalog = Catalog::builtin();
    let inputs = [
        "xyz",
        "Oracle Jet logo for my presentation",
        "Sage Oracle Dual Boiler social media assets for UK market",
        "BES990 retail banner point of sale display brochure",
        "a",
    ];
    for text in inputs {
        let intent = build_intent(&catalog, text, &RequestContext::default());
        assert!(
            (0.0..=1.0).contains(&intent.confidence),
            "confidence {} out of bounds for {text:?}",
            intent.confidence
        );
    }
}
