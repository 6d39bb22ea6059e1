pub mod catalog_client;
pub mod erp_client;
pub mod order_log;
