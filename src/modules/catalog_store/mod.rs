//! Catalog store module
//!
//! Read-only access to the Category, Product and Color collections. The
//! collections are populated by an external admin process; nothing here
//! writes to them.

mod postgres_store;

pub use postgres_store::PgCatalogStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryFilter, Product};
use crate::features::colors::models::Color;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Exact, case-sensitive slug match
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Categories selected by `filter`, newest first
    async fn list_categories(&self, filter: CategoryFilter) -> Result<Vec<Category>>;

    /// Products whose category reference normalizes to `category_key`, in
    /// storage order
    async fn list_products_by_category(&self, category_key: &str) -> Result<Vec<Product>>;

    /// Newest first
    async fn list_colors(&self) -> Result<Vec<Color>>;
}
