//! HansaWorld Hot Import files
//!
//! Fallback delivery format: one tab-delimited text file per quotation,
//! picked up later by the ERP's Hot Import.

use crate::domain::entities::quotation::Quotation;
use crate::domain::services::dispatcher::DeliveryError;
use std::path::PathBuf;
use tracing::debug;

pub const HOT_IMPORT_HEADER: &str = "!Customer\tReference\tDate\tName\tSKU\tQty\tPrice";

/// Writes quotations into the Hot Import folder.
///
/// Files are named after the order reference and overwritten on every
/// delivery. Concurrent writes for the same reference are not serialized.
#[derive(Debug, Clone)]
pub struct HotImportWriter {
    folder: PathBuf,
}

impl HotImportWriter {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn path_for(&self, reference: &str) -> PathBuf {
        self.folder.join(file_name(reference))
    }

    pub async fn write(&self, quotation: &Quotation) -> Result<PathBuf, DeliveryError> {
        tokio::fs::create_dir_all(&self.folder)
            .await
            .map_err(|source| DeliveryError::HotImport {
                path: self.folder.clone(),
                source,
            })?;

        let path = self.path_for(&quotation.reference);
        let contents = render(quotation);
        tokio::fs::write(&path, contents.as_bytes())
            .await
            .map_err(|source| DeliveryError::HotImport {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} rows to {}", quotation.rows.len(), path.display());
        Ok(path)
    }
}

/// `quotation_<reference>.txt`, with path separators neutralised.
pub fn file_name(reference: &str) -> String {
    let safe: String = reference
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect();
    format!("quotation_{}.txt", safe)
}

/// Header line plus one line per row, each terminated by `\n`.
pub fn render(quotation: &Quotation) -> String {
    let date = quotation.date_string();
    let mut out = String::with_capacity(64 * (quotation.rows.len() + 1));
    out.push_str(HOT_IMPORT_HEADER);
    out.push('\n');

    for row in &quotation.rows {
        let fields = [
            quotation.customer.clone(),
            quotation.reference.clone(),
            date.clone(),
            row.name.clone(),
            row.sku.clone(),
            row.quantity.to_string(),
            row.price.to_string(),
        ];
        let line: Vec<String> = fields.iter().map(|f| clean_field(f)).collect();
        out.push_str(&line.join("\t"));
        out.push('\n');
    }

    out
}

fn clean_field(field: &str) -> String {
    field.replace(['\t', '\r', '\n'], " ")
}
