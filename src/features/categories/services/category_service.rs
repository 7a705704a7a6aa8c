use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryDetailDto, CategoryResponseDto, ProductDto};
use crate::features::categories::models::CategoryFilter;
use crate::features::categories::services::ColorIndex;
use crate::modules::catalog_store::CatalogStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CatalogStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List categories, newest first. Filtering is done by the store.
    pub async fn list(&self, filter: CategoryFilter) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories(filter).await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get a category page by slug: the category, its products with resolved
    /// colors, and the distinct colors in use.
    ///
    /// Products and colors are only queried once the category exists.
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryDetailDto> {
        let category = self
            .store
            .find_category_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let category_key = category.id.canonical();

        let (products, colors) = tokio::try_join!(
            self.store.list_products_by_category(&category_key),
            self.store.list_colors(),
        )?;

        let color_index = ColorIndex::new(&colors);

        let products: Vec<ProductDto> = products
            .into_iter()
            .filter(|p| p.category_id.same_as(&category.id))
            .map(|p| {
                let color = color_index.resolve(p.color_id.as_ref());
                ProductDto::new(p, color)
            })
            .collect();

        tracing::debug!(
            "Category '{}' resolved with {} products",
            category.slug,
            products.len()
        );

        Ok(CategoryDetailDto::new(category, products))
    }
}
