//! Result synthesizer — templated candidate assets for a resolved intent.
//!
//! Without a live DAM connection, results are assembled from naming
//! templates, a `(section, use case)` size table, and use-case summary
//! clauses. Output is capped at [`MAX_RESULTS`] and never re-sorted: the
//! intent's sections already arrive in relevance order.

use vault_intent::Catalog;
use vault_protocol::{AssetResult, Intent, ProductMatch};

/// Hard cap on synthesized results.
pub const MAX_RESULTS: usize = 3;

/// Confidence for per-section results whose section match carried no score.
const DEFAULT_SECTION_CONFIDENCE: f64 = 0.85;
/// Confidence for the generic single-result fallback.
const GENERIC_CONFIDENCE: f64 = 0.75;
/// Dimensions used when no section/use-case entry applies.
const DEFAULT_SIZE: &str = "2048x1024";

/// Build candidate results for an intent. One result per matched section
/// when a product is present; a single generic brand asset otherwise.
pub fn synthesize(catalog: &Catalog, intent: &Intent) -> Vec<AssetResult> {
    let mut results = Vec::new();

    if let Some(product) = intent.products.first() {
        let model_code = regional_model_code(product, intent);

        for (index, section) in intent.sections.iter().enumerate() {
            let slug = section_slug(&section.name);
            let format = primary_format(intent);

            results.push(AssetResult {
                id: format!("asset_{}_{}", model_code.to_lowercase(), slug),
                name: asset_name(product, &section.name, intent),
                download_url: format!("https://vault.breville.com/download/{model_code}_{slug}"),
                thumbnail_url: format!("https://vault.breville.com/thumb/{model_code}_{slug}"),
                format: format.to_string(),
                dimensions: optimal_size(&section.name, &intent.use_case).to_string(),
                section: section.name.clone(),
                deliverable_type: intent
                    .selected_deliverables
                    .get(index)
                    .cloned()
                    .or_else(|| section.deliverables.first().cloned())
                    .unwrap_or_else(|| "Standard Asset".into()),
                summary: asset_summary(product, &section.name, intent),
                usage_notes: usage_notes(catalog, &section.name, intent),
                confidence_score: if section.confidence > 0.0 {
                    section.confidence
                } else {
                    DEFAULT_SECTION_CONFIDENCE
                },
            });
        }
    }

    if results.is_empty() {
        results.push(generic_fallback(intent));
    }

    results.truncate(MAX_RESULTS);
    results
}

/// Sage markets get the Sage model code in asset paths.
fn regional_model_code(product: &ProductMatch, intent: &Intent) -> String {
    if intent.brand.as_deref() == Some("Sage")
        && let Some(sage) = &product.sage_code
    {
        return sage.clone();
    }
    product.model_code.clone()
}

fn primary_format(intent: &Intent) -> &str {
    intent.formats.first().map(String::as_str).unwrap_or("PNG")
}

fn section_slug(section: &str) -> String {
    section.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase()
}

/// Naming template keyed by section and use case.
fn asset_name(product: &ProductMatch, section: &str, intent: &Intent) -> String {
    let brand = intent.brand.as_deref().unwrap_or("Breville");

    match section {
        "Logos" => {
            let suffix = if intent.use_case == "presentation" {
                " (Presentation Ready)"
            } else {
                ""
            };
            format!("{} - {} Logo{}", product.name, brand, suffix)
        }
        "Product Photography" => {
            let suffix = if intent.use_case == "amazon" {
                " (Amazon Optimized)"
            } else {
                ""
            };
            format!("{} - Hero Photography{}", product.name, suffix)
        }
        "Lifestyle Photography" => {
            let suffix = if intent.use_case == "social" {
                " (Social Media Ready)"
            } else {
                ""
            };
            format!("{} - Lifestyle Shot{}", product.name, suffix)
        }
        s if s.contains("Social") => {
            format!("{} - Social Media Asset ({} Branding)", product.name, brand)
        }
        s if s.contains("Digital") => {
            let kind = if intent.use_case == "amazon" { "Amazon A+" } else { "Digital" };
            format!("{} - {} Asset", product.name, kind)
        }
        _ => {
            let suffix = intent
                .regional_context
                .as_ref()
                .map(|rc| format!(" ({})", rc.theater))
                .unwrap_or_default();
            format!("{} - {}{}", product.name, section, suffix)
        }
    }
}

/// Size table keyed by (section family, use case).
fn optimal_size(section: &str, use_case: &str) -> &'static str {
    const TABLE: &[(&str, &[(&str, &str)], &str)] = &[
        (
            "Logos",
            &[
                ("presentation", "4096x2048"),
                ("web", "2048x1024"),
                ("social", "1080x1080"),
                ("print", "5000x2500"),
            ],
            "2048x1024",
        ),
        (
            "Product Photography",
            &[
                ("amazon", "2000x2000"),
                ("web", "1920x1920"),
                ("social", "1080x1080"),
                ("print", "4000x4000"),
            ],
            "3000x3000",
        ),
        ("Social", &[("social", "1080x1080")], "1080x1080"),
        (
            "Digital",
            &[("amazon", "2000x2000"), ("web", "1920x1080")],
            "1920x1080",
        ),
    ];

    for &(family, sizes, default) in TABLE {
        if section.contains(family) {
            return sizes
                .iter()
                .find(|&&(u, _)| u == use_case)
                .map(|&(_, size)| size)
                .unwrap_or(default);
        }
    }
    DEFAULT_SIZE
}

/// Summary sentence assembled from fixed clauses chosen by use case.
fn asset_summary(product: &ProductMatch, section: &str, intent: &Intent) -> String {
    let format = primary_format(intent);
    let mut summary = format!(
        "{} asset from {} section in {} format.",
        product.name, section, format
    );

    let clause = match intent.use_case.as_str() {
        "presentation" => {
            " High-resolution with transparent background, perfect for slide presentations and corporate materials."
        }
        "social" => {
            " Social media optimized with engaging composition and platform-specific dimensions."
        }
        "amazon" => {
            " Amazon marketplace optimized meeting A+ content requirements and product listing guidelines."
        }
        "retail" => " Print-ready with CMYK color profile for retail point-of-sale materials.",
        "web" => " Web-optimized for fast loading and responsive design across devices.",
        _ => "",
    };
    summary.push_str(clause);

    if let Some(rc) = &intent.regional_context {
        summary.push_str(&format!(
            " Features {} branding specifically for {} market compliance.",
            rc.brand, rc.theater
        ));
    }

    summary
}

/// Usage notes assembled from format flags, use-case profile notes,
/// section-specific notes, and regional context.
fn usage_notes(catalog: &Catalog, section: &str, intent: &Intent) -> Vec<String> {
    let mut notes = Vec::new();

    if intent.formats.iter().any(|f| f == "PNG") {
        notes.push("PNG format with alpha channel transparency".to_string());
    }
    if intent.formats.iter().any(|f| f == "SVG") {
        notes.push("Vector format scales without quality loss".to_string());
    }
    if intent.formats.iter().any(|f| f == "WebP") {
        notes.push("WebP format for smaller file sizes".to_string());
    }

    if let Some(profile) = catalog.use_case(&intent.use_case) {
        notes.extend(profile.notes.iter().map(|n| n.to_string()));
    }

    if section == "Product Photography" {
        notes.push("Professional studio photography with optimal lighting".to_string());
    } else if section == "Lifestyle Photography" {
        notes.push("Authentic kitchen environment showing the product in real use".to_string());
    } else if section.contains("Social") {
        notes.push("Optimized for social media algorithms and engagement".to_string());
    } else if section.contains("Digital") {
        notes.push("Optimized for digital platforms and e-commerce".to_string());
    }

    if let Some(rc) = &intent.regional_context {
        notes.push(format!(
            "{} branding compliant with {} market standards",
            rc.brand, rc.theater
        ));
    }

    notes
}

/// Single generic brand asset for intents with no product or no sections.
fn generic_fallback(intent: &Intent) -> AssetResult {
    let brand = intent.brand.as_deref().unwrap_or("Breville");
    let format = primary_format(intent);

    let name = match intent.products.first() {
        Some(product) => format!("{} - {} Brand Asset", product.name, brand),
        None => format!("{brand} Logo - Primary"),
    };

    AssetResult {
        id: "asset_generic_001".into(),
        name,
        download_url: "https://vault.breville.com/download/generic_brand_asset".into(),
        thumbnail_url: "https://vault.breville.com/thumb/generic_brand_asset".into(),
        format: format.to_string(),
        dimensions: DEFAULT_SIZE.into(),
        section: "Logos".into(),
        deliverable_type: "Brands & Logos".into(),
        summary: format!(
            "{brand} brand asset in {format} format. Optimized for {} use.",
            intent.use_case
        ),
        usage_notes: generic_usage_notes(intent),
        confidence_score: GENERIC_CONFIDENCE,
    }
}

fn generic_usage_notes(intent: &Intent) -> Vec<String> {
    match intent.use_case.as_str() {
        "presentation" => vec![
            "Presentation-optimized with high DPI for projectors".into(),
            "Transparent background for flexible slide layouts".into(),
        ],
        "web" => vec![
            "Web-optimized with progressive loading".into(),
            "Responsive design compatible".into(),
        ],
        "social" => vec![
            "Social media algorithm optimized".into(),
            "Engaging visual composition for maximum reach".into(),
        ],
        "amazon" => vec![
            "Amazon A+ content guidelines compliant".into(),
            "Optimized for marketplace conversion".into(),
        ],
        _ => Vec::new(),
    }
}
