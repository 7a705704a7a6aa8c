use chrono::{DateTime, Utc};

use crate::shared::document_id::DocumentId;

/// Category document
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: DocumentId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Present only on client showcase categories
    pub client_logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    #[cfg(test)]
    pub fn is_client(&self) -> bool {
        self.client_logo.as_deref().is_some_and(|logo| !logo.is_empty())
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Which categories a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Categories carrying a client logo
    Clients,
    /// Storefront categories (no client logo)
    Products,
}

impl CategoryFilter {
    pub fn from_clients_flag(clients: Option<bool>) -> Self {
        match clients {
            None => CategoryFilter::All,
            Some(true) => CategoryFilter::Clients,
            Some(false) => CategoryFilter::Products,
        }
    }

    #[cfg(test)]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Clients => category.is_client(),
            CategoryFilter::Products => !category.is_client(),
        }
    }
}
