use serde::{Deserialize, Serialize};

/// A candidate asset produced for a resolved intent.
///
/// Ephemeral — generated per request, either templated from the intent or
/// mapped from a live DAM search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetResult {
    /// Stable asset identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Direct download URL.
    pub download_url: String,
    /// Thumbnail preview URL.
    pub thumbnail_url: String,
    /// File format (e.g., "PNG", "SVG").
    pub format: String,
    /// Pixel dimensions as "WxH" (e.g., "2048x1024").
    pub dimensions: String,
    /// Section the asset belongs to (e.g., "Logos").
    pub section: String,
    /// Deliverable type within the section (e.g., "Brands & Logos").
    pub deliverable_type: String,
    /// One-sentence description of the asset and its fit.
    pub summary: String,
    /// Usage guidance assembled from format, use case, and region.
    #[serde(default)]
    pub usage_notes: Vec<String>,
    /// Per-asset confidence in [0.0, 1.0].
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_result_roundtrip() {
        let asset = AssetResult {
            id: "asset_bes985_logos".into(),
            name: "Oracle Jet - Breville Logo".into(),
            download_url: "https://vault.breville.com/download/bes985_logos".into(),
            thumbnail_url: "https://vault.breville.com/thumb/bes985_logos".into(),
            format: "PNG".into(),
            dimensions: "4096x2048".into(),
            section: "Logos".into(),
            deliverable_type: "Brands & Logos".into(),
            summary: "Oracle Jet asset from Logos section in PNG format.".into(),
            usage_notes: vec!["PNG format with alpha channel transparency".into()],
            confidence_score: 0.85,
        };

        let json = serde_json::to_string(&asset).unwrap();
        let back: AssetResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);
    }

    #[test]
    fn usage_notes_default_to_empty() {
        let json = r#"{
            "id": "a", "name": "n", "download_url": "d", "thumbnail_url": "t",
            "format": "PNG", "dimensions": "2048x1024", "section": "Logos",
            "deliverable_type": "Brands & Logos", "summary": "s",
            "confidence_score": 0.75
        }"#;
        let asset: AssetResult = serde_json::from_str(json).unwrap();
        assert!(asset.usage_notes.is_empty());
    }
}
