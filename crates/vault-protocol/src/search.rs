use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assets::AssetResult;
use crate::intent::{Intent, ParsingMethod};
use crate::suggestions::Suggestion;

/// Minimum accepted request length, enforced at the transport boundary.
pub const MIN_REQUEST_LEN: usize = 3;
/// Maximum accepted request length, enforced at the transport boundary.
pub const MAX_REQUEST_LEN: usize = 500;

/// Caller-supplied overrides accompanying a request.
/// Explicit values take precedence over anything inferred from the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Intended use (e.g., "presentation", "social").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    /// Target region code (e.g., "AU", "GB").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl RequestContext {
    pub fn is_empty(&self) -> bool {
        self.use_case.is_none() && self.region.is_none()
    }
}

/// Request body for POST /api/v1/assets/find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindAssetsRequest {
    /// Free-text asset request (3–500 characters).
    pub request: String,
    /// Optional context overrides.
    #[serde(default)]
    pub context: RequestContext,
}

/// Summary of how the request was interpreted, for dashboards and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceSummary {
    /// Strategy that produced the intent.
    pub parsing_method: ParsingMethod,
    /// Section names the resolver targeted.
    pub detected_sections: Vec<String>,
    /// Overall intent confidence.
    pub confidence_score: f64,
    /// Whether a model endpoint was consulted successfully.
    pub model_assisted: bool,
}

/// Per-response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Correlation ID (UUIDv7 for time-sortability).
    pub request_id: Uuid,
    /// Echo of the original query.
    pub query: String,
    /// When the response was generated.
    pub timestamp: DateTime<Utc>,
}

/// Response body for POST /api/v1/assets/find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindAssetsResponse {
    pub intent: Intent,
    pub results: Vec<AssetResult>,
    pub suggestions: Vec<Suggestion>,
    pub intelligence: IntelligenceSummary,
    pub metadata: ResponseMetadata,
}

impl IntelligenceSummary {
    /// Build the summary from a resolved intent.
    pub fn from_intent(intent: &Intent) -> Self {
        Self {
            parsing_method: intent.parsing_method,
            detected_sections: intent.sections.iter().map(|s| s.name.clone()).collect(),
            confidence_score: intent.confidence,
            model_assisted: intent.parsing_method == ParsingMethod::ModelAssisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_context_defaults() {
        let req: FindAssetsRequest =
            serde_json::from_str(r#"{"request": "Oracle Jet logo"}"#).unwrap();
        assert_eq!(req.request, "Oracle Jet logo");
        assert!(req.context.is_empty());
    }

    #[test]
    fn request_with_context() {
        let req: FindAssetsRequest = serde_json::from_str(
            r#"{"request": "logo", "context": {"use_case": "presentation", "region": "GB"}}"#,
        )
        .unwrap();
        assert_eq!(req.context.use_case.as_deref(), Some("presentation"));
        assert_eq!(req.context.region.as_deref(), Some("GB"));
    }

    #[test]
    fn intelligence_summary_from_intent() {
        let mut intent = Intent::unmatched("logo", ParsingMethod::ModelAssisted);
        intent.confidence = 0.92;
        intent.sections.push(crate::intent::SectionMatch {
            name: "Logos".into(),
            deliverables: vec![],
            confidence: 0.9,
        });

        let summary = IntelligenceSummary::from_intent(&intent);
        assert!(summary.model_assisted);
        assert_eq!(summary.detected_sections, vec!["Logos"]);
        assert_eq!(summary.confidence_score, 0.92);
    }

    #[test]
    fn length_bounds() {
        assert_eq!(MIN_REQUEST_LEN, 3);
        assert_eq!(MAX_REQUEST_LEN, 500);
    }
}
