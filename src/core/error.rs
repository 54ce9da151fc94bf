use thiserror::Error;

/// Errors that can occur while preparing an AFIP bill.
///
/// Every variant is an input-validation failure. None of them are retryable
/// and none are silently defaulted: a wrong value would produce a legally
/// invalid fiscal document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AfipError {
    /// The `cbte_tipo` code is not one of the known document types.
    #[error("unknown document type '{0}'")]
    UnknownDocumentType(String),

    /// The tax ID (CUIT) is empty or contains non-digits after normalization.
    #[error("invalid tax ID '{0}'")]
    InvalidTaxId(String),

    /// A required bill field is absent or empty.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A required configuration value has not been set.
    #[error("missing configuration: {0}")]
    MissingConfiguration(&'static str),

    /// A bill field that feeds the barcode contains a non-digit character.
    #[error("field {0} must contain only digits")]
    NonNumericField(&'static str),

    /// The configured sale point is not a non-empty digit string.
    #[error("invalid sale point '{0}'")]
    InvalidSalePoint(String),

    /// Data handed to the barcode encoder is not an even-length digit string.
    #[error("invalid barcode data: {0}")]
    InvalidBarcodeData(String),

    /// Malformed bill or configuration JSON.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for AfipError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
