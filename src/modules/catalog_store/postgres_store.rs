use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::CatalogStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryFilter, Product};
use crate::features::colors::models::Color;
use crate::shared::document_id::DocumentId;

/// `CatalogStore` over the shared Postgres pool.
///
/// Identifier columns are JSONB holding either `{"$oid": "..."}` or a plain
/// string. Reference filters compare the unwrapped text form in SQL; callers
/// still re-check with [`DocumentId::same_as`].
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Json<DocumentId>,
    title: String,
    slug: String,
    description: Option<String>,
    client_logo: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id.0,
            title: row.title,
            slug: row.slug,
            description: row.description,
            client_logo: row.client_logo,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `color_id` is decoded loosely: a reference of any other shape cannot
/// resolve, so it leaves the product colorless instead of failing the page.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Json<DocumentId>,
    title: String,
    image: Option<String>,
    category_id: Json<DocumentId>,
    color_id: Option<Json<Value>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let color_id = row
            .color_id
            .and_then(|Json(value)| match serde_json::from_value(value.clone()) {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring malformed color reference {} on product {}",
                        value,
                        row.id.0
                    );
                    None
                }
            });

        Self {
            id: row.id.0,
            title: row.title,
            image: row.image,
            category_id: row.category_id.0,
            color_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct ColorRow {
    id: Json<DocumentId>,
    name: String,
    hex_code: String,
}

impl From<ColorRow> for Color {
    fn from(row: ColorRow) -> Self {
        Self {
            id: row.id.0,
            name: row.name,
            hex_code: row.hex_code,
        }
    }
}

// Empty client logos count as absent
const CATEGORY_COLUMNS: &str = r#"
    id, title, slug, description, NULLIF(client_logo, '') AS client_logo, created_at, updated_at
"#;

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE slug = $1 LIMIT 1",
            CATEGORY_COLUMNS
        );

        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by slug: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(row.map(Category::from))
    }

    async fn list_categories(&self, filter: CategoryFilter) -> Result<Vec<Category>> {
        let condition = match filter {
            CategoryFilter::All => "TRUE",
            CategoryFilter::Clients => "NULLIF(client_logo, '') IS NOT NULL",
            CategoryFilter::Products => "NULLIF(client_logo, '') IS NULL",
        };
        let query = format!(
            "SELECT {} FROM categories WHERE {} ORDER BY created_at DESC",
            CATEGORY_COLUMNS, condition
        );

        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_products_by_category(&self, category_key: &str) -> Result<Vec<Product>> {
        // A JSON `null` color reference is treated the same as a missing one
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, image, category_id,
                   NULLIF(color_id, 'null'::jsonb) AS color_id
            FROM products
            WHERE lower(COALESCE(category_id ->> '$oid', category_id #>> '{}')) = lower($1)
            ORDER BY created_at
            "#,
        )
        .bind(category_key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products by category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_colors(&self) -> Result<Vec<Color>> {
        let rows = sqlx::query_as::<_, ColorRow>(
            r#"
            SELECT id, name, hex_code
            FROM colors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list colors: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Color::from).collect())
    }
}
