use crate::config::WooConfig;
use crate::domain::repositories::catalog_client::{CatalogClient, CatalogError, CatalogResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Product as returned by `GET /products`; only the name is used
#[derive(Debug, Deserialize)]
pub struct WooProduct {
    #[serde(default)]
    pub name: Option<String>,
}

/// WooCommerce REST catalog client
pub struct WooCatalogClient {
    client: Client,
    config: WooConfig,
}

impl WooCatalogClient {
    pub fn new(client: Client, config: WooConfig) -> Self {
        Self { client, config }
    }

    fn products_url(&self, sku: &str) -> CatalogResult<Url> {
        let base = self.config.api_url.trim().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/products", base))
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.query_pairs_mut().append_pair("sku", sku);
        Ok(url)
    }
}

#[async_trait]
impl CatalogClient for WooCatalogClient {
    async fn product_name(&self, sku: &str) -> CatalogResult<Option<String>> {
        let url = self.products_url(sku)?;
        debug!("Looking up SKU {} in WooCommerce catalog", sku);

        let response = self
            .client
            .get(url)
            .basic_auth(
                &self.config.credentials.user,
                Some(self.config.credentials.secret.as_str()),
            )
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::HttpStatus { status, body });
        }

        let products: Vec<WooProduct> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::MalformedResponse(e.to_string())
            }
        })?;

        Ok(products.into_iter().next().and_then(|p| p.name))
    }
}
