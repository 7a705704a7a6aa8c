//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the catalog's backing document collections.

pub mod catalog_store;
