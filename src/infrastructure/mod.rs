pub mod hansa_client;
pub mod hot_import;
pub mod woo_catalog_client;
