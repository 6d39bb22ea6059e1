use crate::domain::value_objects::field_value::{is_truthy, render, FieldValue};
use serde_json::Value;

pub const UNKNOWN_REFERENCE: &str = "unknown";
pub const UNKNOWN_SKU: &str = "UNKNOWN";

/// Read-only view over a WooCommerce order document.
///
/// The shop sends loosely-typed JSON; every accessor substitutes a default
/// instead of failing. Non-object documents behave like an empty order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayload(Value);

impl OrderPayload {
    pub fn new(value: Value) -> Self {
        OrderPayload(value)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(OrderPayload)
    }

    /// `id`, else `order_id`, else `"unknown"`.
    pub fn reference(&self) -> String {
        ["id", "order_id"]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| is_truthy(value))
            .map(render)
            .unwrap_or_else(|| UNKNOWN_REFERENCE.to_string())
    }

    /// Order total exactly as sent, `"0"` when absent.
    pub fn total(&self) -> FieldValue {
        FieldValue::from_field(&self.0, "total", Value::String("0".to_string()))
    }

    /// Line items in input order. A missing or non-array `line_items` yields none.
    pub fn line_items(&self) -> Vec<LineItemInput> {
        match self.0.get("line_items") {
            Some(Value::Array(items)) => items.iter().map(LineItemInput::from_json).collect(),
            _ => Vec::new(),
        }
    }
}

/// One `line_items` entry before name enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemInput {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: FieldValue,
    pub price: FieldValue,
}

impl LineItemInput {
    pub fn from_json(item: &Value) -> Self {
        Self {
            sku: scalar_field(item, "sku"),
            name: scalar_field(item, "name"),
            quantity: FieldValue::from_field(item, "quantity", Value::from(0)),
            price: FieldValue::from_field(item, "price", Value::from(0)),
        }
    }

    /// SKU as written to the ERP row.
    pub fn sku_or_default(&self) -> String {
        self.sku.clone().unwrap_or_else(|| UNKNOWN_SKU.to_string())
    }

    /// SKU usable for a catalog lookup.
    pub fn lookup_sku(&self) -> Option<&str> {
        self.sku.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Name supplied by the shop, if non-empty. Whitespace counts as a name.
    pub fn given_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }
}

fn scalar_field(object: &Value, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(render(value)),
    }
}
