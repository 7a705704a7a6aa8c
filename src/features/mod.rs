pub mod categories;
pub mod colors;
pub mod sitemap;

use std::sync::Arc;

use axum::Router;

use crate::modules::catalog_store::CatalogStore;
use categories::CategoryService;
use colors::ColorService;
use sitemap::SitemapService;

/// Every catalog route, sharing one store
pub fn catalog_routes(store: Arc<dyn CatalogStore>, site_base_url: &str) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let color_service = Arc::new(ColorService::new(Arc::clone(&store)));
    let sitemap_service = Arc::new(SitemapService::new(store, site_base_url));

    Router::new()
        .merge(categories::routes::routes(category_service))
        .merge(colors::routes::routes(color_service))
        .merge(sitemap::routes::routes(sitemap_service))
}
