use crate::domain::value_objects::field_value::FieldValue;
use chrono::NaiveDate;
use serde::Serialize;

/// Customer code used for every web shop quotation
pub const SHOP_CUSTOMER: &str = "SHOP";

/// Enriched order line as sent to HansaWorld
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Qty")]
    pub quantity: FieldValue,
    #[serde(rename = "Price")]
    pub price: FieldValue,
}

/// HansaWorld quotation built from one shop order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quotation {
    pub customer: String,
    pub reference: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub rows: Vec<QuotationRow>,
    pub total: FieldValue,
}

impl Quotation {
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}
