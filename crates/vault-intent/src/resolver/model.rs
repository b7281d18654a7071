//! Model-assisted resolution strategy — external chat-completion endpoint.
//!
//! Sends the request text plus context to an OpenAI-compatible
//! chat-completions API with a strict JSON response contract. Any transport
//! failure, non-success status, or malformed response yields `None` so the
//! composite resolver falls back to pattern matching; the caller never sees
//! an error from this path.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use vault_protocol::{
    Intent, ParsingMethod, ProductMatch, RegionInfo, RequestContext, SectionMatch,
};

use crate::catalog::Catalog;

use super::IntentStrategy;

/// System prompt describing the catalog and the expected JSON shape.
const SYSTEM_PROMPT: &str = r#"You are a parser for brand-asset requests against the Breville Vault DAM. Parse each request into structured intent using the official Vault structure.

Product catalog (model codes):
- Oracle Jet: BES985 (Sage: SES985) - premium automatic espresso machine with integrated grinder
- Oracle Dual Boiler: BES995 (Sage: SES995) - professional dual boiler espresso system
- Oracle Touch: BES990 (Sage: SES990) - touch screen automatic espresso machine

Regional brand mapping:
- AU/US/CA: Breville branding, BES model numbers (APAC/USCM theaters)
- GB/UK/DE/EU: Sage branding, SES model numbers (EMEA theater)

Official Vault sections (14):
1. Product Photography - hero images for web product pages, spare parts photography
2. Lifestyle Photography - products in kitchen environment with food and coffee
3. Digital Assets (incl. Websites, Programmatic & EDM) - PDP/CLP/FLP pages, web banners, icons, 3D models, Amazon A+
4. Social (incl. Videos, Statics, Stories & Keynotes) - Instagram/Facebook campaigns, organic and paid social assets
5. Point of Sales (POS) - T4 banners, counter cards, retail displays, brochures
6. YouTube Videos - product demos, tutorials, care and maintenance, training videos
7. Logos - brand logos (Breville/Sage), partner logos
8. Packaging - box images, packaging layouts, labels, master carton
9. Toolkits (incl. Sell-In, Retail Kits) - launch toolkits, retail presentation decks
10. Instruction Booklets - quick start guides, safety guides, manuals
11. Fact Sheets - product specification sheets for retailers
12. Recipes & Food - recipe photography, food videos, recipe cards
13. Brand Guidelines - brand style guides, presentation templates
14. Working Files for Translation - multi-language asset sources

Use-case format preferences:
- presentation: PNG/SVG with transparency, high resolution
- web: PNG/WebP optimized
- social: platform-specific sizes
- amazon: JPG/PNG, deliverables "Amazon A+" and "Amazon Infographics"
- retail: print-ready PDF/EPS

Confidence guidance:
- 0.95+: clear product + specific section + clear use case + regional context
- 0.85-0.94: good product match + section targeting + use case or region
- 0.75-0.84: product identified + general section or use case detected
- 0.60-0.74: some product/section hints but ambiguous
- below 0.60: unclear request

Respond with ONLY a JSON object (no markdown, no explanation):
{
  "products": [{"name": "Oracle Jet", "modelNumber": "BES985", "sageModel": "SES985"}],
  "sections": [{"name": "Logos", "deliverables": ["Brands & Logos"], "confidence": 0.9}],
  "useCase": "presentation",
  "region": "AU",
  "brand": "Breville",
  "formats": ["PNG", "SVG"],
  "specificDeliverables": ["Brands & Logos"],
  "confidence": 0.95,
  "reasoning": "Oracle Jet detected, Logos section for presentation use, PNG/SVG for transparency"
}"#;

/// Confidence floor applied to structurally valid model responses — never
/// fully zero, so a parsed response is not discarded downstream.
const MIN_MODEL_CONFIDENCE: f64 = 0.1;
/// Confidence assumed when the model omits the field.
const DEFAULT_MODEL_CONFIDENCE: f64 = 0.8;

/// Configuration for the chat-completion endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Full chat-completions URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token for the endpoint.
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_timeout_secs() -> u64 {
    8
}

impl ModelConfig {
    /// Load from environment. Returns `None` when no API key is configured —
    /// the resolver then goes straight to pattern matching.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?;
        let api_url = std::env::var("OPENAI_API_URL").unwrap_or_else(|_| default_api_url());
        let model = std::env::var("OPENAI_MODEL_ID").unwrap_or_else(|_| default_model());
        let timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_timeout_secs);
        Some(Self {
            api_url,
            api_key,
            model,
            timeout_secs,
        })
    }
}

/// Chat-completions request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completions response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Raw model output before normalization. Every field is optional — absent
/// fields get the documented defaults; a body that is not a JSON object at
/// all is a parse failure.
#[derive(Deserialize)]
struct RawIntent {
    #[serde(default)]
    products: Vec<RawProduct>,
    #[serde(default)]
    sections: Vec<RawSection>,
    #[serde(default, alias = "useCase")]
    use_case: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    formats: Vec<String>,
    #[serde(default, alias = "specificDeliverables")]
    specific_deliverables: Vec<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    reasoning: Option<Reasoning>,
}

#[derive(Deserialize)]
struct RawProduct {
    name: String,
    #[serde(default, alias = "modelNumber")]
    model_number: Option<String>,
    #[serde(default, alias = "sageModel")]
    sage_model: Option<String>,
}

#[derive(Deserialize)]
struct RawSection {
    name: String,
    #[serde(default)]
    deliverables: Vec<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

/// The model may return reasoning as a single string or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reasoning {
    One(String),
    Many(Vec<String>),
}

impl Reasoning {
    fn into_vec(self) -> Vec<String> {
        match self {
            Reasoning::One(line) => vec![line],
            Reasoning::Many(lines) => lines,
        }
    }
}

/// Client for the external chat-completion endpoint.
pub struct ModelStrategy {
    client: reqwest::Client,
    config: ModelConfig,
    catalog: Arc<Catalog>,
}

impl ModelStrategy {
    pub fn new(catalog: Arc<Catalog>, config: ModelConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            config,
            catalog,
        }
    }

    /// Call the endpoint and normalize the response into an intent.
    /// Returns `None` on any failure so the caller can fall back.
    async fn parse(&self, text: &str, context: &RequestContext) -> Option<Intent> {
        let user_message = if context.is_empty() {
            format!("Parse this asset request: \"{text}\"")
        } else {
            format!(
                "Parse this asset request: \"{text}\" (Context: {})",
                serde_json::to_string(context).unwrap_or_default()
            )
        };

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_message,
                },
            ],
            max_tokens: 1000,
            temperature: 0.1,
        };

        let response = match self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "model request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "model endpoint returned non-success");
            return None;
        }

        let chat_resp: ChatResponse = match response.json().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse model response body");
                return None;
            }
        };

        let Some(choice) = chat_resp.choices.first() else {
            tracing::warn!("model response contained no choices");
            return None;
        };

        let json_str = extract_json(&choice.message.content);
        let raw: RawIntent = match serde_json::from_str(json_str) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, content = %choice.message.content,
                    "model returned invalid intent JSON");
                return None;
            }
        };

        Some(self.normalize(raw, text, context))
    }

    /// Normalize a raw model response: fill defaults, apply context
    /// overrides, and reconcile against the catalog. The regional mapping is
    /// authoritative for brand/theater; the model's brand is used only when
    /// the region is unknown to the catalog.
    fn normalize(&self, raw: RawIntent, text: &str, context: &RequestContext) -> Intent {
        let mut intent = Intent::unmatched(text, ParsingMethod::ModelAssisted);

        for raw_product in raw.products {
            let resolved = raw_product
                .model_number
                .as_deref()
                .and_then(|code| self.catalog.product_by_code(code))
                .or_else(|| self.catalog.product_by_name(&raw_product.name));

            if let Some(product) = resolved {
                intent.products.push(product.to_match());
            } else if let Some(code) = raw_product.model_number {
                // Unknown to the catalog but structurally complete — keep it.
                intent.products.push(ProductMatch {
                    name: raw_product.name,
                    model_code: code,
                    sage_code: raw_product.sage_model,
                    category: None,
                });
            } else {
                tracing::debug!(name = %raw_product.name, "dropping unresolvable model product");
            }
        }

        for raw_section in raw.sections {
            let known = self.catalog.section_by_name(&raw_section.name);
            let deliverables = if raw_section.deliverables.is_empty() {
                known
                    .map(|s| s.deliverables.iter().take(3).map(|d| d.to_string()).collect())
                    .unwrap_or_default()
            } else {
                raw_section.deliverables
            };
            intent.sections.push(SectionMatch {
                name: known.map(|s| s.name.to_string()).unwrap_or(raw_section.name),
                deliverables,
                confidence: raw_section
                    .confidence
                    .unwrap_or(DEFAULT_MODEL_CONFIDENCE)
                    .clamp(0.0, 1.0),
            });
        }

        intent.use_case = context
            .use_case
            .clone()
            .or(raw.use_case)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "general".into());
        intent.region = context
            .region
            .clone()
            .or(raw.region)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| "global".into());

        if intent.region != "global"
            && let Some(mapping) = self.catalog.region(&intent.region)
        {
            intent.brand = Some(mapping.brand.to_string());
            intent.regional_context = Some(RegionInfo {
                brand: mapping.brand.to_string(),
                theater: mapping.theater.to_string(),
            });
        } else {
            intent.brand = raw.brand;
        }

        if !raw.formats.is_empty() {
            intent.formats = raw.formats;
        }
        intent.selected_deliverables = raw.specific_deliverables;
        intent.reasoning = raw.reasoning.map(Reasoning::into_vec).unwrap_or_default();
        intent.confidence = raw
            .confidence
            .unwrap_or(DEFAULT_MODEL_CONFIDENCE)
            .clamp(MIN_MODEL_CONFIDENCE, 1.0);

        intent
    }
}

#[async_trait]
impl IntentStrategy for ModelStrategy {
    async fn resolve(&self, text: &str, context: &RequestContext) -> Option<Intent> {
        self.parse(text, context).await
    }

    fn strategy_name(&self) -> &str {
        "model_assisted"
    }
}

/// Extract JSON from model output that may be wrapped in markdown fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    trimmed
}
