use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryFilter, Product};
use crate::features::colors::models::Color;
use crate::modules::catalog_store::CatalogStore;
use crate::shared::document_id::DocumentId;

/// Collection that should fail when queried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Categories,
    Products,
    Colors,
}

/// In-memory `CatalogStore` with per-collection query counters
#[derive(Default)]
pub struct InMemoryCatalogStore {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub colors: Vec<Color>,
    pub fail_on: Option<FailOn>,
    pub category_queries: AtomicUsize,
    pub product_queries: AtomicUsize,
    pub color_queries: AtomicUsize,
}

impl InMemoryCatalogStore {
    pub fn new(categories: Vec<Category>, products: Vec<Product>, colors: Vec<Color>) -> Self {
        Self {
            categories,
            products,
            colors,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn check(&self, collection: FailOn) -> Result<()> {
        if self.fail_on == Some(collection) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "connection reset by peer".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.category_queries.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Categories)?;
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn list_categories(&self, filter: CategoryFilter) -> Result<Vec<Category>> {
        self.category_queries.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Categories)?;
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(categories)
    }

    // Case-insensitive like the Postgres query, so callers must re-check
    async fn list_products_by_category(&self, category_key: &str) -> Result<Vec<Product>> {
        self.product_queries.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Products)?;
        let key = category_key.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id.canonical().to_lowercase() == key)
            .cloned()
            .collect())
    }

    // Returned as stored; fixtures list colors newest first
    async fn list_colors(&self) -> Result<Vec<Color>> {
        self.color_queries.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Colors)?;
        Ok(self.colors.clone())
    }
}

/// Fixed base time so fixtures order deterministically
pub fn timestamp(offset_days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset_days)
}

pub fn category(id: DocumentId, title: &str, slug: &str, created_day: i64) -> Category {
    Category {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        description: None,
        client_logo: None,
        created_at: timestamp(created_day),
        updated_at: None,
    }
}

pub fn product(
    id: &str,
    category_id: DocumentId,
    color_id: Option<DocumentId>,
    image: Option<&str>,
) -> Product {
    Product {
        id: DocumentId::text(id),
        title: format!("Product {}", id),
        image: image.map(str::to_string),
        category_id,
        color_id,
    }
}

pub fn color(id: DocumentId, name: &str, hex_code: &str) -> Color {
    Color {
        id,
        name: name.to_string(),
        hex_code: hex_code.to_string(),
    }
}
