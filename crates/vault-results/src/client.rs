//! DAM API client — client-credentials token exchange and authenticated
//! search. Token persistence and refresh are deliberately out of scope;
//! each search exchanges a fresh token.

use serde::{Deserialize, Serialize};
use serde_json::json;

use vault_protocol::{AssetResult, Intent};

use crate::live::{self, DamSearchResponse};

/// Results requested per search.
const SEARCH_LIMIT: u32 = 20;

/// Errors from the live DAM integration.
#[derive(Debug, thiserror::Error)]
pub enum DamError {
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("search failed with status {0}")]
    SearchStatus(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Configuration for the DAM endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DamConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Brandfolder to search within.
    pub brandfolder_id: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.brandfolder.com/v4".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl DamConfig {
    /// Load from environment. Returns `None` unless both OAuth credentials
    /// are present — callers then stay on the templated result path.
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("VAULT_DAM_CLIENT_ID").ok()?;
        let client_secret = std::env::var("VAULT_DAM_CLIENT_SECRET").ok()?;
        let brandfolder_id = std::env::var("VAULT_DAM_BRANDFOLDER_ID").unwrap_or_default();
        let base_url = std::env::var("VAULT_DAM_BASE_URL").unwrap_or_else(|_| default_base_url());
        Some(Self {
            base_url,
            client_id,
            client_secret,
            brandfolder_id,
            timeout_secs: default_timeout_secs(),
        })
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the DAM search API.
pub struct DamClient {
    client: reqwest::Client,
    config: DamConfig,
}

impl DamClient {
    pub fn new(config: DamConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }

    /// Exchange client credentials for an access token.
    pub async fn exchange_token(&self) -> Result<String, DamError> {
        let url = format!("{}/oauth/token", self.config.base_url);
        let body = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(DamError::TokenExchange(format!(
                "status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DamError::TokenExchange(e.to_string()))?;
        Ok(token.access_token)
    }

    /// Run an authenticated search for the intent and map the response into
    /// scored results.
    pub async fn search(&self, intent: &Intent) -> Result<Vec<AssetResult>, DamError> {
        let token = self.exchange_token().await?;
        let url = format!(
            "{}/brandfolders/{}/search",
            self.config.base_url, self.config.brandfolder_id
        );
        let params = build_search_params(intent);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DamError::SearchStatus(response.status().as_u16()));
        }

        let body: DamSearchResponse = response.json().await?;
        tracing::debug!(total = body.total_count, "live DAM search completed");
        Ok(live::map_live_results(body.assets, intent))
    }
}

/// Convert a resolved intent into DAM search parameters: product terms
/// OR-joined as the query, section/format filters, and brand/use-case tags.
pub fn build_search_params(intent: &Intent) -> serde_json::Value {
    let query = intent
        .products
        .iter()
        .flat_map(|p| [p.name.clone(), p.model_code.clone()])
        .collect::<Vec<_>>()
        .join(" OR ");

    let sections: Vec<&str> = intent.sections.iter().map(|s| s.name.as_str()).collect();
    let file_types: Vec<String> = intent.formats.iter().map(|f| f.to_lowercase()).collect();

    let mut tags: Vec<String> = Vec::new();
    if let Some(brand) = &intent.brand
        && intent.region != "global"
    {
        tags.push(format!(
            "{}_{}",
            brand.to_lowercase(),
            intent.region.to_lowercase()
        ));
    }
    tags.push(format!("use_case_{}", intent.use_case));

    json!({
        "query": query,
        "filters": {
            "tags": tags,
            "sections": sections,
            "file_types": file_types,
        },
        "sort": "relevance",
        "limit": SEARCH_LIMIT,
    })
}
