mod color_handler;

pub use color_handler::{__path_list_colors, list_colors};
