//! Document identifiers as they appear in the catalog collections.
//!
//! Records written in different eras store the same identifier either as a
//! native object id (`{"$oid": "..."}`) or as its plain string form. Nothing
//! outside this module compares raw representations; callers go through
//! [`DocumentId::canonical`] or [`DocumentId::to_native`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::validation::is_object_id;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Native {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Text(String),
}

impl DocumentId {
    pub fn native(oid: impl Into<String>) -> Self {
        DocumentId::Native { oid: oid.into() }
    }

    #[cfg(test)]
    pub fn text(value: impl Into<String>) -> Self {
        DocumentId::Text(value.into())
    }

    fn raw(&self) -> &str {
        match self {
            DocumentId::Native { oid } => oid,
            DocumentId::Text(value) => value,
        }
    }

    /// Single comparable string form. Object ids are lower-cased hex; any
    /// other value is kept verbatim.
    pub fn canonical(&self) -> String {
        let raw = self.raw();
        if is_object_id(raw) {
            raw.to_ascii_lowercase()
        } else {
            raw.to_string()
        }
    }

    /// Native representation where one exists. A string holding a valid
    /// object id is promoted; anything else is returned unchanged.
    pub fn to_native(&self) -> DocumentId {
        let raw = self.raw();
        if is_object_id(raw) {
            DocumentId::native(raw.to_ascii_lowercase())
        } else {
            self.clone()
        }
    }

    /// Representation-agnostic equality
    pub fn same_as(&self, other: &DocumentId) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
