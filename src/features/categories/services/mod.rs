mod category_service;
mod color_index;

pub use category_service::CategoryService;
pub use color_index::ColorIndex;
