pub mod constants;
pub mod document_id;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
