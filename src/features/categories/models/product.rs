use crate::shared::document_id::DocumentId;

/// Product document. `category_id` and `color_id` may be stored in either
/// identifier representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: DocumentId,
    pub title: String,
    pub image: Option<String>,
    pub category_id: DocumentId,
    pub color_id: Option<DocumentId>,
}
