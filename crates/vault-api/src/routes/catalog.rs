//! Read-only catalog listings for client discovery.

use axum::Json;
use axum::extract::State;

use vault_intent::catalog::{AssetSection, Product};

use crate::state::AppState;

/// GET /api/v1/catalog/products — list the product table.
pub async fn list_products(State(state): State<AppState>) -> Json<&'static [Product]> {
    Json(state.catalog.products())
}

/// GET /api/v1/catalog/sections — list the asset sections.
pub async fn list_sections(State(state): State<AppState>) -> Json<&'static [AssetSection]> {
    Json(state.catalog.sections())
}
