use crate::domain::entities::order_payload::OrderPayload;
use crate::domain::entities::quotation::{Quotation, QuotationRow, SHOP_CUSTOMER};
use crate::domain::services::name_enricher::NameEnricher;
use chrono::NaiveDate;

/// Map a shop order onto a HansaWorld quotation dated `date`.
///
/// Rows keep the order of `line_items`; quantities, prices and the total are
/// copied as sent.
pub async fn build_quotation(
    payload: &OrderPayload,
    date: NaiveDate,
    enricher: &NameEnricher,
) -> Quotation {
    let mut rows = Vec::new();
    for item in payload.line_items() {
        let name = enricher.resolve_name(&item).await;
        rows.push(QuotationRow {
            sku: item.sku_or_default(),
            name,
            quantity: item.quantity,
            price: item.price,
        });
    }

    Quotation {
        customer: SHOP_CUSTOMER.to_string(),
        reference: payload.reference(),
        date,
        rows,
        total: payload.total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[tokio::test]
    async fn test_rows_preserve_input_order() {
        let payload = OrderPayload::new(json!({
            "id": "7",
            "total": "33",
            "line_items": [
                {"sku": "C3", "name": "Third", "quantity": 1, "price": 3},
                {"sku": "A1", "name": "First", "quantity": 2, "price": 1},
                {"sku": "B2", "name": "Second", "quantity": 3, "price": 2}
            ]
        }));

        let quotation = build_quotation(&payload, date(), &NameEnricher::disabled()).await;

        let skus: Vec<&str> = quotation.rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["C3", "A1", "B2"]);
        assert_eq!(quotation.rows[1].name, "First");
        assert_eq!(quotation.reference, "7");
        assert_eq!(quotation.customer, "SHOP");
        assert_eq!(quotation.total.to_string(), "33");
        assert_eq!(quotation.date_string(), "2026-10-17");
    }

    #[tokio::test]
    async fn test_empty_order() {
        let payload = OrderPayload::new(json!({}));
        let quotation = build_quotation(&payload, date(), &NameEnricher::disabled()).await;

        assert!(quotation.rows.is_empty());
        assert_eq!(quotation.reference, "unknown");
        assert_eq!(quotation.total.as_json(), &json!("0"));
    }

    #[tokio::test]
    async fn test_total_is_not_recomputed() {
        let payload = OrderPayload::new(json!({
            "id": 1,
            "total": "999",
            "line_items": [{"sku": "A", "quantity": 1, "price": 1}]
        }));
        let quotation = build_quotation(&payload, date(), &NameEnricher::disabled()).await;

        assert_eq!(quotation.total.to_string(), "999");
        assert_eq!(quotation.rows[0].name, "UNKNOWN");
    }
}
