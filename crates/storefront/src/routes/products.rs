//! Catalog route handlers.
//!
//! The only public data routes; everything is served from the static
//! catalog, so there is no database involvement at all.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printforge_core::ProductId;

use crate::catalog::{self, CategorySummary, Product, Variant};
use crate::error::{AppError, Result};

/// Catalog query parameters. At most one of these is honored, in order:
/// `id`, `category`, `search`.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub id: Option<i32>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// A single product with its category name and generated variants.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub category: &'static str,
    pub variants: Vec<Variant>,
}

/// Products grouped under a category heading.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub products: Vec<Product>,
}

/// Search or full-catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategorySummary>>,
    pub products: Vec<Product>,
}

/// Catalog query endpoint.
///
/// `GET /api/products?{id|category|search}`
///
/// # Errors
///
/// Returns 404 only for an unknown product id; unknown categories and empty
/// searches return empty collections.
#[instrument]
pub async fn index(Query(query): Query<ProductsQuery>) -> Result<Response> {
    // Single product with variants
    if let Some(id) = query.id {
        let (product, category) = catalog::product_by_id(ProductId::new(id))
            .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

        return Ok(Json(ProductDetail {
            product: *product,
            category: category.name,
            variants: catalog::generate_variants(product),
        })
        .into_response());
    }

    // Products in a category
    if let Some(category) = query.category {
        let name = catalog::category_by_key(&category)
            .map_or_else(|| category.clone(), |cat| cat.name.to_owned());

        return Ok(Json(CategoryListing {
            category: name,
            products: catalog::products_by_category(&category).to_vec(),
        })
        .into_response());
    }

    // Free-text search
    if let Some(search) = query.search {
        return Ok(Json(CatalogListing {
            categories: None,
            products: catalog::search_products(&search)
                .into_iter()
                .copied()
                .collect(),
        })
        .into_response());
    }

    // Full catalog with category summaries
    Ok(Json(CatalogListing {
        categories: Some(catalog::categories()),
        products: catalog::all_products().copied().collect(),
    })
    .into_response())
}
