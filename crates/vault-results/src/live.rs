//! Live-integration variant of result synthesis.
//!
//! Maps raw DAM search responses into [`AssetResult`]s and blends a
//! per-asset confidence from intent signals. Unlike the templated path,
//! live results ARE sorted by confidence, and the weight constants here
//! intentionally differ from the mock path's fixed increments.

use serde::Deserialize;

use vault_protocol::{AssetResult, Intent};

/// Base confidence before any signal matches.
const BASE_CONFIDENCE: f64 = 0.5;
/// Product name/code found in asset name or tags.
const PRODUCT_WEIGHT: f64 = 0.3;
/// Asset file type is one of the intent's preferred formats.
const FORMAT_WEIGHT: f64 = 0.15;
/// A tag mentions the intent's use case.
const USE_CASE_WEIGHT: f64 = 0.1;
/// A tag mentions the intent's brand.
const BRAND_WEIGHT: f64 = 0.1;

/// File-size threshold above which web use gets a warning, in bytes.
const LARGE_FILE_BYTES: u64 = 5_000_000;

/// Raw asset record in a live DAM search response.
#[derive(Debug, Clone, Deserialize)]
pub struct DamAsset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Search response envelope from the DAM.
#[derive(Debug, Clone, Deserialize)]
pub struct DamSearchResponse {
    #[serde(default)]
    pub assets: Vec<DamAsset>,
    #[serde(default)]
    pub total_count: u64,
}

/// Whether an asset carries branding appropriate for the intent's region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalSuitability {
    pub suitable: bool,
    pub reason: String,
}

/// Blend a confidence score for one asset against the intent.
pub fn asset_confidence(asset: &DamAsset, intent: &Intent) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    let name = asset.name.to_lowercase();
    let tags: Vec<String> = asset.tags.iter().map(|t| t.to_lowercase()).collect();

    let product_matches = intent.products.iter().any(|product| {
        let product_name = product.name.to_lowercase();
        let model_code = product.model_code.to_lowercase();
        name.contains(&product_name)
            || name.contains(&model_code)
            || tags
                .iter()
                .any(|tag| tag.contains(&product_name) || tag.contains(&model_code))
    });
    if product_matches {
        confidence += PRODUCT_WEIGHT;
    }

    let format_matches = asset.file_type.as_deref().is_some_and(|file_type| {
        intent
            .formats
            .iter()
            .any(|format| format.eq_ignore_ascii_case(file_type))
    });
    if format_matches {
        confidence += FORMAT_WEIGHT;
    }

    let use_case = intent.use_case.to_lowercase();
    if tags.iter().any(|tag| tag.contains(&use_case)) {
        confidence += USE_CASE_WEIGHT;
    }

    if let Some(brand) = &intent.brand {
        let brand = brand.to_lowercase();
        if tags.iter().any(|tag| tag.contains(&brand)) {
            confidence += BRAND_WEIGHT;
        }
    }

    confidence.min(1.0)
}

/// Check whether an asset's tags carry the brand the region requires.
pub fn regional_suitability(asset: &DamAsset, intent: &Intent) -> RegionalSuitability {
    let Some(brand) = &intent.brand else {
        return RegionalSuitability {
            suitable: true,
            reason: "No regional restrictions".into(),
        };
    };
    if intent.region == "global" {
        return RegionalSuitability {
            suitable: true,
            reason: "No regional restrictions".into(),
        };
    }

    let brand_lower = brand.to_lowercase();
    let has_branding = asset
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(&brand_lower));

    if has_branding {
        RegionalSuitability {
            suitable: true,
            reason: format!("Appropriate {} branding for {}", brand, intent.region),
        }
    } else {
        RegionalSuitability {
            suitable: false,
            reason: format!(
                "May not have correct {} branding for {}",
                brand, intent.region
            ),
        }
    }
}

/// Per-asset usage recommendations from format, dimensions, and size.
pub fn usage_recommendations(asset: &DamAsset, intent: &Intent) -> Vec<String> {
    let mut recommendations = Vec::new();
    let file_type = asset.file_type.as_deref().unwrap_or_default();

    if file_type.eq_ignore_ascii_case("png") && intent.use_case == "presentation" {
        recommendations
            .push("PNG format works well for presentations with transparency support".into());
    }
    if file_type.eq_ignore_ascii_case("svg") && intent.use_case == "web" {
        recommendations.push("SVG format is ideal for web use, scales to any size".into());
    }
    if let Some(dimensions) = &asset.dimensions
        && intent.use_case == "social"
    {
        recommendations.push(format!(
            "Dimensions: {dimensions}, verify platform requirements"
        ));
    }
    if asset.file_size.is_some_and(|size| size > LARGE_FILE_BYTES) && intent.use_case == "web" {
        recommendations.push("Large file, consider optimizing for web use".into());
    }

    recommendations
}

/// Map live DAM assets into results, scored and sorted by confidence.
pub fn map_live_results(assets: Vec<DamAsset>, intent: &Intent) -> Vec<AssetResult> {
    let default_section = intent
        .sections
        .first()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "General".into());

    let mut results: Vec<AssetResult> = assets
        .into_iter()
        .map(|asset| {
            let confidence = asset_confidence(&asset, intent);
            let mut usage_notes = usage_recommendations(&asset, intent);
            let suitability = regional_suitability(&asset, intent);
            if !suitability.suitable {
                usage_notes.push(suitability.reason);
            }

            let format = asset
                .file_type
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| {
                    intent
                        .formats
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "PNG".into())
                });
            let summary = asset
                .description
                .clone()
                .unwrap_or_else(|| format!("{} from the Vault DAM.", asset.name));

            AssetResult {
                id: asset.id,
                name: asset.name,
                download_url: asset.download_url.or(asset.url).unwrap_or_default(),
                thumbnail_url: asset.thumbnail_url.unwrap_or_default(),
                format,
                dimensions: asset.dimensions.unwrap_or_default(),
                section: default_section.clone(),
                deliverable_type: asset
                    .tags
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Standard Asset".into()),
                summary,
                usage_notes,
                confidence_score: confidence,
            }
        })
        .collect();

    results.sort_by(|a, b| b.confidence_score.total_cmp(&a.confidence_score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_intent::Catalog;
    use vault_protocol::RequestContext;

    fn intent_for(text: &str, region: Option<&str>) -> Intent {
        let context = RequestContext {
            use_case: None,
            region: region.map(str::to_string),
        };
        vault_intent::resolver::patterns::build_intent(&Catalog::builtin(), text, &context)
    }

    fn asset(name: &str, file_type: &str, tags: &[&str]) -> DamAsset {
        DamAsset {
            id: format!("dam_{}", name.to_lowercase().replace(' ', "_")),
            name: name.into(),
            description: None,
            url: Some("https://dam.example.com/a".into()),
            download_url: Some("https://dam.example.com/a/download".into()),
            thumbnail_url: Some("https://dam.example.com/a/thumb".into()),
            file_type: Some(file_type.into()),
            file_size: None,
            dimensions: Some("2048x1024".into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn all_signals_matching_reach_full_blend() {
        let intent = intent_for("Oracle Jet logo for my presentation", Some("GB"));
        let hit = asset(
            "Oracle Jet Logo Master",
            "PNG",
            &["sage_gb", "use_case_presentation"],
        );
        // 0.5 + 0.3 + 0.15 + 0.1 + 0.1, clamped.
        assert_eq!(asset_confidence(&hit, &intent), 1.0);
    }

    #[test]
    fn base_confidence_when_nothing_matches() {
        let intent = intent_for("Oracle Jet logo for my presentation", None);
        let miss = asset("Toaster Manual", "PDF", &["manuals"]);
        assert_eq!(asset_confidence(&miss, &intent), BASE_CONFIDENCE);
    }

    #[test]
    fn product_match_via_tag() {
        let intent = intent_for("Oracle Jet photos", None);
        let tagged = asset("Campaign Hero", "JPG", &["bes985"]);
        assert!(asset_confidence(&tagged, &intent) >= BASE_CONFIDENCE + PRODUCT_WEIGHT);
    }

    #[test]
    fn live_results_are_sorted_by_confidence() {
        let intent = intent_for("Oracle Jet logo for my presentation", Some("GB"));
        let assets = vec![
            asset("Unrelated Banner", "PDF", &[]),
            asset("Oracle Jet Logo", "PNG", &["sage_gb"]),
            asset("Kitchen Scene", "JPG", &["lifestyle"]),
        ];

        let results = map_live_results(assets, &intent);
        assert_eq!(results[0].name, "Oracle Jet Logo");
        for pair in results.windows(2) {
            assert!(pair[0].confidence_score >= pair[1].confidence_score);
        }
    }

    #[test]
    fn unsuitable_branding_is_flagged_in_notes() {
        let intent = intent_for("Oracle Jet logo", Some("GB"));
        let wrong_brand = asset("Oracle Jet Logo", "PNG", &["breville_au"]);

        let suitability = regional_suitability(&wrong_brand, &intent);
        assert!(!suitability.suitable);

        let results = map_live_results(vec![wrong_brand], &intent);
        assert!(
            results[0]
                .usage_notes
                .iter()
                .any(|n| n.contains("May not have correct Sage branding"))
        );
    }

    #[test]
    fn global_intent_has_no_regional_restrictions() {
        let intent = intent_for("Oracle Jet logo", None);
        let anything = asset("Oracle Jet Logo", "PNG", &[]);
        assert!(regional_suitability(&anything, &intent).suitable);
    }

    #[test]
    fn large_files_warned_for_web_use() {
        let intent = intent_for("Oracle Jet web banner homepage", None);
        assert_eq!(intent.use_case, "web");

        let mut big = asset("Oracle Jet Banner", "PNG", &[]);
        big.file_size = Some(12_000_000);
        let notes = usage_recommendations(&big, &intent);
        assert!(notes.iter().any(|n| n.contains("Large file")));
    }

    #[test]
    fn search_response_tolerates_missing_fields() {
        let json = r#"{"assets": [{"id": "a1", "name": "Logo"}]}"#;
        let response: DamSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.assets.len(), 1);
        assert_eq!(response.total_count, 0);
        assert!(response.assets[0].file_type.is_none());
    }
}
