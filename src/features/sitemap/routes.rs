use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sitemap::handlers;
use crate::features::sitemap::services::SitemapService;

pub fn routes(service: Arc<SitemapService>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(handlers::get_sitemap))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::document_id::DocumentId;
    use crate::shared::test_helpers::{category, FailOn, InMemoryCatalogStore};
    use axum::http::header;
    use axum_test::TestServer;

    fn server(store: InMemoryCatalogStore) -> TestServer {
        let service = Arc::new(SitemapService::new(
            Arc::new(store),
            "https://squadlinkuniform.com",
        ));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_get_sitemap() {
        let store = InMemoryCatalogStore::new(
            vec![category(DocumentId::text("C1"), "Polo", "polo", 0)],
            vec![],
            vec![],
        );

        let response = server(store).get("/sitemap.xml").await;
        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "application/xml");

        let body = response.text();
        assert!(body.contains("<loc>https://squadlinkuniform.com/category/polo</loc>"));
        assert!(body.contains("<loc>https://squadlinkuniform.com/clients</loc>"));
    }

    #[tokio::test]
    async fn test_get_sitemap_survives_store_failure() {
        let store = InMemoryCatalogStore::default().failing_on(FailOn::Categories);

        let response = server(store).get("/sitemap.xml").await;
        response.assert_status_ok();
        assert!(!response.text().contains("/category/"));
    }
}
