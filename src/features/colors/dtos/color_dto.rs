use serde::Serialize;
use utoipa::ToSchema;

use crate::features::colors::models::Color;

/// Response DTO for color
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorResponseDto {
    pub id: String,
    pub name: String,
    pub hex_code: String,
}

impl From<Color> for ColorResponseDto {
    fn from(c: Color) -> Self {
        Self {
            id: c.id.canonical(),
            name: c.name,
            hex_code: c.hex_code,
        }
    }
}
