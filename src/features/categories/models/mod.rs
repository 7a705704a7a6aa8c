mod category;
mod product;

pub use category::{Category, CategoryFilter};
pub use product::Product;
