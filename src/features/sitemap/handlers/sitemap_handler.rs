use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Utc;

use crate::core::error::Result;
use crate::features::sitemap::services::SitemapService;

/// Sitemap of the storefront: static pages plus one entry per category
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap XML", content_type = "application/xml", body = String),
    ),
    tag = "sitemap"
)]
pub async fn get_sitemap(State(service): State<Arc<SitemapService>>) -> Result<impl IntoResponse> {
    let xml = service.build(Utc::now()).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}
