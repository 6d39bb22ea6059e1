pub mod field_value;
