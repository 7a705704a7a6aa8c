use std::sync::Arc;

use crate::core::error::Result;
use crate::features::colors::dtos::ColorResponseDto;
use crate::modules::catalog_store::CatalogStore;

/// Service for color operations
pub struct ColorService {
    store: Arc<dyn CatalogStore>,
}

impl ColorService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List all colors, newest first
    pub async fn list(&self) -> Result<Vec<ColorResponseDto>> {
        let colors = self.store.list_colors().await?;
        Ok(colors.into_iter().map(|c| c.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::document_id::DocumentId;
    use crate::shared::test_helpers::{color, InMemoryCatalogStore};

    #[tokio::test]
    async fn test_list_keeps_store_order_with_stringified_ids() {
        let store = InMemoryCatalogStore::new(
            vec![],
            vec![],
            vec![
                color(DocumentId::native("65A1F0C2E4B0A1B2C3D4E5F6"), "Navy", "#000080"),
                color(DocumentId::text("R1"), "Red", "#FF0000"),
            ],
        );

        let colors = ColorService::new(Arc::new(store)).list().await.unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(colors[0].name, "Navy");
        assert_eq!(colors[1].id, "R1");
        assert_eq!(colors[1].hex_code, "#FF0000");
    }
}
