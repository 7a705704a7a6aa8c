use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::colors::dtos::ColorResponseDto;
use crate::features::colors::services::ColorService;
use crate::shared::types::ErrorBody;

/// List all colors, newest first
#[utoipa::path(
    get,
    path = "/api/colors",
    responses(
        (status = 200, description = "List of colors", body = Vec<ColorResponseDto>),
        (status = 500, description = "Failed to fetch colors", body = ErrorBody),
    ),
    tag = "colors"
)]
pub async fn list_colors(
    State(service): State<Arc<ColorService>>,
) -> Result<Json<Vec<ColorResponseDto>>> {
    let colors = service
        .list()
        .await
        .map_err(|e| e.into_fetch_failed("colors"))?;
    Ok(Json(colors))
}
