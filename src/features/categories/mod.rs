//! Product categories feature.
//!
//! Categories group the storefront's products (uniform types). A category
//! carrying a client logo is instead a showcase entry on the clients page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List categories (`?clients=true\|false` to filter) |
//! | GET | `/api/categories/{slug}` | Category page with products and available colors |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
