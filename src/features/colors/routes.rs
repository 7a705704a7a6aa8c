use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::colors::handlers;
use crate::features::colors::services::ColorService;

/// Create routes for the colors feature (public)
pub fn routes(service: Arc<ColorService>) -> Router {
    Router::new()
        .route("/api/colors", get(handlers::list_colors))
        .with_state(service)
}
