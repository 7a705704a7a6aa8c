use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::categories::dtos::{CategoryDetailDto, CategoryResponseDto};
use crate::features::categories::models::CategoryFilter;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorBody;

/// Query params for listing categories
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCategoriesQuery {
    /// `true` for client categories only, `false` for storefront categories
    /// only. Omit for all.
    pub clients: Option<bool>,
}

/// List categories, newest first
#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
        (status = 400, description = "Invalid query string", body = ErrorBody),
        (status = 500, description = "Failed to fetch categories", body = ErrorBody),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<ListCategoriesQuery>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let filter = CategoryFilter::from_clients_flag(query.clients);
    let categories = service
        .list(filter)
        .await
        .map_err(|e| e.into_fetch_failed("categories"))?;
    Ok(Json(categories))
}

/// Get a category page by slug
///
/// Returns the category with its products and the colors available among them.
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryDetailDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 500, description = "Failed to fetch category", body = ErrorBody),
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryDetailDto>> {
    let category = service
        .get_by_slug(&slug)
        .await
        .map_err(|e| e.into_fetch_failed("category"))?;
    Ok(Json(category))
}
