use crate::shared::document_id::DocumentId;

/// Color document
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub id: DocumentId,
    pub name: String,
    pub hex_code: String,
}
