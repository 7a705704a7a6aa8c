use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the hex form of a 12-byte object identifier
    /// - Valid: "65a1f0c2e4b0a1b2c3d4e5f6", "65A1F0C2E4B0A1B2C3D4E5F6"
    /// - Invalid: "65a1f0", "zzzzzzzzzzzzzzzzzzzzzzzz", "polo"
    pub static ref OBJECT_ID_REGEX: Regex = Regex::new(r"^[0-9a-fA-F]{24}$").unwrap();
}

pub fn is_object_id(value: &str) -> bool {
    OBJECT_ID_REGEX.is_match(value)
}
