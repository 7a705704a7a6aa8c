use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::features::categories::models::{Category, Product};
use crate::features::colors::models::Color;
use crate::shared::constants::{PLACEHOLDER_IMAGE, UNKNOWN_COLOR_NAME};

/// Category entry in the listing. `name` and `title` carry the same value
/// for older clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_logo: Option<String>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id.canonical(),
            name: c.title.clone(),
            slug: c.slug,
            description: c.description.unwrap_or_default(),
            title: c.title,
            client_logo: c.client_logo.filter(|logo| !logo.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductColorDto {
    pub name: String,
    pub hex_code: String,
}

/// Product as listed on a category page
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub image: String,
    /// Null when the color reference is missing or does not resolve
    pub color: Option<ProductColorDto>,
    /// Lower-cased color name, `"unknown"` when unresolved
    pub color_name: String,
}

impl ProductDto {
    pub fn new(product: Product, color: Option<&Color>) -> Self {
        let image = product
            .image
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        let color_name = color
            .map(|c| c.name.to_lowercase())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_COLOR_NAME.to_string());

        Self {
            id: product.id.canonical(),
            name: product.title.clone(),
            title: product.title,
            image,
            color: color.map(|c| ProductColorDto {
                name: c.name.clone(),
                hex_code: c.hex_code.clone(),
            }),
            color_name,
        }
    }
}

/// Lower-cased color name to hex code, serialized as a JSON object in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorHexMap(Vec<(String, String)>);

impl ColorHexMap {
    /// Collects the colors used by `products`. A repeated name keeps its
    /// first position and takes the latest hex code.
    pub fn from_products(products: &[ProductDto]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for color in products.iter().filter_map(|p| p.color.as_ref()) {
            if color.name.is_empty() || color.hex_code.is_empty() {
                continue;
            }
            let name = color.name.to_lowercase();
            match positions.get(&name) {
                Some(&index) => entries[index].1 = color.hex_code.clone(),
                None => {
                    positions.insert(name.clone(), entries.len());
                    entries.push((name, color.hex_code.clone()));
                }
            }
        }

        Self(entries)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, hex)| hex.as_str())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ColorHexMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, hex) in &self.0 {
            map.serialize_entry(name, hex)?;
        }
        map.end()
    }
}

/// Category page payload: the category, its products, and the colors those
/// products use.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub title: String,
    pub products: Vec<ProductDto>,
    pub available_colors: Vec<String>,
    #[schema(value_type = HashMap<String, String>)]
    pub colors_with_hex: ColorHexMap,
}

impl CategoryDetailDto {
    pub fn new(category: Category, products: Vec<ProductDto>) -> Self {
        let colors_with_hex = ColorHexMap::from_products(&products);

        Self {
            id: category.id.canonical(),
            name: category.title.clone(),
            slug: category.slug,
            description: category.description.unwrap_or_default(),
            title: category.title,
            products,
            available_colors: colors_with_hex.names(),
            colors_with_hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::document_id::DocumentId;
    use chrono::Utc;

    fn color(id: &str, name: &str, hex: &str) -> Color {
        Color {
            id: DocumentId::text(id),
            name: name.to_string(),
            hex_code: hex.to_string(),
        }
    }

    fn product(id: &str, image: Option<&str>) -> Product {
        Product {
            id: DocumentId::text(id),
            title: format!("Product {}", id),
            image: image.map(str::to_string),
            category_id: DocumentId::text("C1"),
            color_id: None,
        }
    }

    #[test]
    fn test_product_dto_placeholder_image() {
        let empty = ProductDto::new(product("P1", Some("")), None);
        assert_eq!(empty.image, PLACEHOLDER_IMAGE);

        let missing = ProductDto::new(product("P2", None), None);
        assert_eq!(missing.image, PLACEHOLDER_IMAGE);

        let stored = ProductDto::new(product("P3", Some("/polo.jpg")), None);
        assert_eq!(stored.image, "/polo.jpg");
    }

    #[test]
    fn test_product_dto_duplicates_title() {
        let dto = ProductDto::new(product("P1", None), None);
        assert_eq!(dto.name, "Product P1");
        assert_eq!(dto.title, dto.name);
    }

    #[test]
    fn test_product_dto_color_fields() {
        let navy = color("N1", "Navy Blue", "#000080");
        let dto = ProductDto::new(product("P1", None), Some(&navy));
        assert_eq!(
            dto.color,
            Some(ProductColorDto {
                name: "Navy Blue".to_string(),
                hex_code: "#000080".to_string(),
            })
        );
        assert_eq!(dto.color_name, "navy blue");

        let colorless = ProductDto::new(product("P2", None), None);
        assert_eq!(colorless.color, None);
        assert_eq!(colorless.color_name, UNKNOWN_COLOR_NAME);
    }

    #[test]
    fn test_product_dto_serializes_null_color() {
        let value = serde_json::to_value(ProductDto::new(product("P1", None), None)).unwrap();
        assert!(value["color"].is_null());
        assert_eq!(value["colorName"], "unknown");
    }

    #[test]
    fn test_empty_color_name_is_unknown() {
        let unnamed = color("X1", "", "#123456");
        let dto = ProductDto::new(product("P1", None), Some(&unnamed));
        assert_eq!(dto.color_name, UNKNOWN_COLOR_NAME);
        assert!(ColorHexMap::from_products(&[dto]).is_empty());
    }

    #[test]
    fn test_color_hex_map_first_seen_order_last_hex_wins() {
        let red = color("R1", "Red", "#FF0000");
        let black = color("B1", "Black", "#000000");
        let other_red = color("R2", "RED", "#EE0000");

        let products = vec![
            ProductDto::new(product("P1", None), Some(&red)),
            ProductDto::new(product("P2", None), Some(&black)),
            ProductDto::new(product("P3", None), None),
            ProductDto::new(product("P4", None), Some(&other_red)),
        ];
        let map = ColorHexMap::from_products(&products);

        assert_eq!(map.names(), vec!["red", "black"]);
        assert_eq!(map.get("red"), Some("#EE0000"));
        assert_eq!(map.get("black"), Some("#000000"));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r##"{"red":"#EE0000","black":"#000000"}"##
        );
    }

    #[test]
    fn test_category_response_defaults() {
        let category = Category {
            id: DocumentId::native("65A1F0C2E4B0A1B2C3D4E5F6"),
            title: "Polo".to_string(),
            slug: "polo".to_string(),
            description: None,
            client_logo: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        let value = serde_json::to_value(CategoryResponseDto::from(category)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "name": "Polo",
                "slug": "polo",
                "description": "",
                "title": "Polo",
            })
        );
    }
}
