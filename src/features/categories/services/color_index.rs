use std::collections::HashMap;

use crate::features::colors::models::Color;
use crate::shared::document_id::DocumentId;

/// Lookup from a product's color reference to the full color record.
///
/// Holds every color twice: under its native identifier and under its
/// canonical string. Resolution tries the native form first and then the
/// string form, so references written in either era resolve.
pub struct ColorIndex<'a> {
    by_native: HashMap<DocumentId, &'a Color>,
    by_string: HashMap<String, &'a Color>,
}

impl<'a> ColorIndex<'a> {
    pub fn new(colors: &'a [Color]) -> Self {
        let mut by_native = HashMap::with_capacity(colors.len());
        let mut by_string = HashMap::with_capacity(colors.len());

        for color in colors {
            by_native.insert(color.id.to_native(), color);
            by_string.insert(color.id.canonical(), color);
        }

        Self {
            by_native,
            by_string,
        }
    }

    /// `None` for a missing reference or one that matches no color
    pub fn resolve(&self, reference: Option<&DocumentId>) -> Option<&'a Color> {
        let reference = reference?;

        self.by_native
            .get(&reference.to_native())
            .or_else(|| self.by_string.get(&reference.canonical()))
            .copied()
    }
}
