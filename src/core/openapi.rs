use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::colors::{dtos as colors_dtos, handlers as colors_handlers};
use crate::features::sitemap::handlers as sitemap_handlers;
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Colors
        colors_handlers::list_colors,
        // Sitemap
        sitemap_handlers::get_sitemap,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryDetailDto,
            categories_dtos::ProductDto,
            categories_dtos::ProductColorDto,
            // Colors
            colors_dtos::ColorResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Product and client categories (public)"),
        (name = "colors", description = "Product colors (public)"),
        (name = "sitemap", description = "Storefront sitemap"),
    ),
    info(
        title = "SquadLink Catalog API",
        version = "0.1.0",
        description = "Read-only catalog API for the SquadLink storefront",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
