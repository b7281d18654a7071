use serde::{Deserialize, Serialize};

/// Category of follow-up guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// No results came back — broaden the search.
    NoResults,
    /// No product was detected in the request.
    MissingProduct,
    /// Overall confidence is below the comfortable threshold.
    LowConfidence,
    /// Use case is "general" — formats and sizing cannot be optimized.
    MissingUseCase,
    /// Region is "global" despite a product match — branding may be wrong.
    MissingRegion,
    /// Product photography matched — lifestyle photography often works better.
    CrossSellLifestyle,
    /// Social assets matched — video content engages better.
    CrossSellVideo,
    /// Model-assisted parse landed with high confidence — formats are tuned.
    FormatOptimized,
}

/// A follow-up suggestion returned alongside search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    /// Why the suggestion fired.
    pub message: String,
    /// What the caller should try next.
    pub recommended_action: String,
}

impl Suggestion {
    pub fn new(
        kind: SuggestionKind,
        message: impl Into<String>,
        recommended_action: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            recommended_action: recommended_action.into(),
        }
    }
}
