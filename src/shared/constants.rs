/// Image served for products stored without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// `colorName` of a product whose color reference does not resolve
pub const UNKNOWN_COLOR_NAME: &str = "unknown";
