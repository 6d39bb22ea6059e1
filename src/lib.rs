//! ShopBridge Webhook Relay Library
//!
//! Relays WooCommerce order webhooks to HansaWorld as quotations, falling back
//! to Hot Import files when the ERP API is unavailable.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod persistence;
pub mod rate_limit;
