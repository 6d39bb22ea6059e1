use crate::domain::entities::quotation::Quotation;
use crate::domain::repositories::erp_client::{ErpClient, ErpError, ErpResult};
use crate::infrastructure::hot_import::HotImportWriter;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a quotation reached HansaWorld
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Accepted by the ERP API; carries the parsed response body
    Api { response: Value },
    /// Written as a Hot Import file for later import
    File { path: PathBuf },
}

impl Delivery {
    pub fn method(&self) -> &'static str {
        match self {
            Delivery::Api { .. } => "api",
            Delivery::File { .. } => "file",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to write Hot Import file {}: {source}", .path.display())]
    HotImport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Two-step delivery: ERP API first, Hot Import file otherwise.
///
/// There are no retries. An API failure of any kind falls through to the
/// file write; only a failed file write is reported to the caller.
pub struct QuotationDispatcher {
    erp: Option<Arc<dyn ErpClient>>,
    hot_import: HotImportWriter,
}

impl QuotationDispatcher {
    pub fn new(erp: Option<Arc<dyn ErpClient>>, hot_import: HotImportWriter) -> Self {
        Self { erp, hot_import }
    }

    pub async fn deliver(&self, quotation: &Quotation) -> Result<Delivery, DeliveryError> {
        match self.send_to_api(quotation).await {
            Ok(response) => {
                info!("Quotation {} delivered via ERP API", quotation.reference);
                return Ok(Delivery::Api { response });
            }
            Err(ErpError::NotConfigured) => {
                debug!("ERP API not configured, using Hot Import");
            }
            Err(e) => {
                warn!(
                    "ERP API error for quotation {}: {}; falling back to Hot Import",
                    quotation.reference, e
                );
            }
        }

        let path = self.hot_import.write(quotation).await?;
        info!(
            "Quotation {} written for Hot Import: {}",
            quotation.reference,
            path.display()
        );
        Ok(Delivery::File { path })
    }

    async fn send_to_api(&self, quotation: &Quotation) -> ErpResult<Value> {
        match &self.erp {
            Some(client) => {
                debug!("Sending quotation {} to {}", quotation.reference, client.name());
                client.create_quotation(quotation).await
            }
            None => Err(ErpError::NotConfigured),
        }
    }
}
