//! Read-only catalog of work categories and property types for the
//! proposal form.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::domain::proposal::{PropertyType, CATEGORIES};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub categories: &'static [&'static str],
    pub property_types: Vec<&'static str>,
}

impl CatalogResponse {
    pub fn current() -> Self {
        Self {
            categories: CATEGORIES,
            property_types: PropertyType::ALL.iter().map(|p| p.label()).collect(),
        }
    }
}

/// GET /api/catalog
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}

/// Creates the catalog router, to be nested under `/api/catalog`.
pub fn catalog_routes() -> Router {
    Router::new().route("/", get(get_catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_category_and_property_type() {
        let json = serde_json::to_value(CatalogResponse::current()).unwrap();

        assert_eq!(json["categories"].as_array().unwrap().len(), CATEGORIES.len());
        assert_eq!(json["propertyTypes"][0], "Lägenhet");
        assert_eq!(json["propertyTypes"].as_array().unwrap().len(), 5);
    }
}
