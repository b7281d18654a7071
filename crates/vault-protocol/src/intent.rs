use serde::{Deserialize, Serialize};

/// Which resolution strategy produced an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsingMethod {
    /// External chat-completion model parsed the request.
    ModelAssisted,
    /// Deterministic extractor pipeline over the knowledge base.
    PatternMatching,
    /// Keyword-only fallback used when the knowledge base is unavailable.
    MinimalFallback,
}

/// A catalog product matched from the request text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMatch {
    /// Canonical product name (e.g., "Oracle Jet").
    pub name: String,
    /// Primary model code (e.g., "BES985").
    pub model_code: String,
    /// Sage-market model code, where the product has one (e.g., "SES985").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sage_code: Option<String>,
    /// Product category (e.g., "Coffee").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A scored asset-section match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMatch {
    /// Section display name (e.g., "Logos").
    pub name: String,
    /// Deliverable types selected for this section.
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// Per-section match confidence in [0.0, 1.0].
    pub confidence: f64,
}

/// Brand and theater derived from a region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Consumer brand for the region ("Breville" or "Sage").
    pub brand: String,
    /// Regional theater for compliance ("APAC", "USCM", "EMEA").
    pub theater: String,
}

/// Structured interpretation of a free-text asset request.
///
/// Constructed once per inbound request, flows through result synthesis and
/// the suggestion engine, and is discarded with the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Raw request text as received.
    pub original_request: String,
    /// Matched products, highest priority first (at most one in practice).
    #[serde(default)]
    pub products: Vec<ProductMatch>,
    /// Matched sections, most relevant first.
    #[serde(default)]
    pub sections: Vec<SectionMatch>,
    /// One of the known use-case names, or "general".
    pub use_case: String,
    /// Region code, or "global" when none was detected.
    pub region: String,
    /// Brand derived from the region, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Full regional mapping entry, if the region is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_context: Option<RegionInfo>,
    /// Preferred file formats, most preferred first.
    #[serde(default)]
    pub formats: Vec<String>,
    /// Specific deliverable types pulled from the matched sections.
    #[serde(default)]
    pub selected_deliverables: Vec<String>,
    /// Overall confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Human-readable trace of each decision made.
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Strategy that produced this intent.
    pub parsing_method: ParsingMethod,
}

impl Intent {
    /// Empty intent for a request nothing could be extracted from.
    /// Defaults match the resolver contract: no signals, "general"/"global",
    /// PNG as the lone format.
    pub fn unmatched(request: impl Into<String>, parsing_method: ParsingMethod) -> Self {
        Self {
            original_request: request.into(),
            products: Vec::new(),
            sections: Vec::new(),
            use_case: "general".into(),
            region: "global".into(),
            brand: None,
            regional_context: None,
            formats: vec!["PNG".into()],
            selected_deliverables: Vec::new(),
            confidence: 0.0,
            reasoning: Vec::new(),
            parsing_method,
        }
    }

    /// Clamp confidence into [0.0, 1.0].
    pub fn clamp_confidence(&mut self) {
        self.confidence = self.confidence.clamp(0.0, 1.0);
    }
}
