mod sitemap_handler;

pub use sitemap_handler::{__path_get_sitemap, get_sitemap};
