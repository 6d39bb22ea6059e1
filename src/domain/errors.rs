use thiserror::Error;

use crate::domain::services::dispatcher::DeliveryError;
use crate::persistence::DatabaseError;

/// Failures that end a relay request.
///
/// Catalog and ERP API problems are recovered inside the relay and never
/// show up here.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to log order: {0}")]
    OrderLog(#[from] DatabaseError),

    #[error("{0}")]
    Delivery(#[from] DeliveryError),
}

impl RelayError {
    /// Whether the caller sent something unusable, as opposed to a server-side failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::InvalidPayload(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_delivery_error_message_carries_io_cause() {
        let err: RelayError = DeliveryError::HotImport {
            path: PathBuf::from("/exports/quotation_1.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        }
        .into();

        let message = err.to_string();
        assert!(message.contains("/exports/quotation_1.txt"));
        assert!(message.contains("Permission denied"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_payload_is_client_error() {
        assert!(RelayError::InvalidPayload("expected value".to_string()).is_client_error());
    }
}
