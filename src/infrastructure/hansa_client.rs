use crate::config::HansaConfig;
use crate::domain::entities::quotation::Quotation;
use crate::domain::repositories::erp_client::{ErpClient, ErpError, ErpResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// HansaWorld quotation API client
pub struct HansaClient {
    client: Client,
    config: HansaConfig,
}

impl HansaClient {
    pub fn new(client: Client, config: HansaConfig) -> Self {
        Self { client, config }
    }
}

fn map_send_error(e: reqwest::Error) -> ErpError {
    if e.is_timeout() {
        ErpError::Timeout
    } else {
        ErpError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl ErpClient for HansaClient {
    fn name(&self) -> &str {
        "HansaWorld"
    }

    async fn create_quotation(&self, quotation: &Quotation) -> ErpResult<Value> {
        if !self.config.is_configured() {
            return Err(ErpError::NotConfigured);
        }

        let response = self
            .client
            .post(self.config.api_url.trim())
            .basic_auth(
                &self.config.credentials.user,
                Some(self.config.credentials.secret.as_str()),
            )
            .timeout(self.config.timeout)
            .json(quotation)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ErpError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ErpError::Timeout
            } else {
                ErpError::MalformedResponse(e.to_string())
            }
        })?;

        debug!("HansaWorld accepted quotation {} ({})", quotation.reference, status);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::domain::entities::quotation::{QuotationRow, SHOP_CUSTOMER};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{basic_auth, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn quotation() -> Quotation {
        Quotation {
            customer: SHOP_CUSTOMER.to_string(),
            reference: "101".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            rows: vec![QuotationRow {
                sku: "AB1".to_string(),
                name: "UNKNOWN".to_string(),
                quantity: json!(2).into(),
                price: json!(10).into(),
            }],
            total: json!("20").into(),
        }
    }

    fn client_for(url: String, timeout: Duration) -> HansaClient {
        HansaClient::new(
            Client::new(),
            HansaConfig {
                api_url: url,
                credentials: Credentials::new("hansa", "secret"),
                timeout,
            },
        )
    }

    #[tokio::test]
    async fn test_create_quotation_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quotations"))
            .and(basic_auth("hansa", "secret"))
            .and(body_json(json!({
                "Customer": "SHOP",
                "Reference": "101",
                "Date": "2026-10-17",
                "Rows": [{"SKU": "AB1", "Name": "UNKNOWN", "Qty": 2, "Price": 10}],
                "Total": "20"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "Q1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(format!("{}/api/quotations", server.uri()), Duration::from_secs(10));
        let response = client.create_quotation(&quotation()).await.unwrap();

        assert_eq!(response, json!({"id": "Q1"}));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_secs(10));
        let err = client.create_quotation(&quotation()).await.unwrap_err();

        match err {
            ErpError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_secs(10));
        let err = client.create_quotation(&quotation()).await.unwrap_err();

        assert!(matches!(err, ErpError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "Q1"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_millis(50));
        let err = client.create_quotation(&quotation()).await.unwrap_err();

        assert!(matches!(err, ErpError::Timeout));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = client_for("http://127.0.0.1:9/api".to_string(), Duration::from_secs(2));
        let err = client.create_quotation(&quotation()).await.unwrap_err();

        assert!(matches!(err, ErpError::NetworkError(_) | ErpError::Timeout));
    }

    #[tokio::test]
    async fn test_blank_url_is_not_configured() {
        let client = client_for(String::new(), Duration::from_secs(1));
        let err = client.create_quotation(&quotation()).await.unwrap_err();

        assert!(matches!(err, ErpError::NotConfigured));
    }
}
