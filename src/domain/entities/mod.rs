pub mod order_payload;
pub mod quotation;
