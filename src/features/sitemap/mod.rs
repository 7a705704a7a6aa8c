//! Storefront sitemap.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/sitemap.xml` | Static pages and one entry per category |

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SitemapService;
