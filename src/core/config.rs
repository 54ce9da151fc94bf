use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AfipError;

/// Sale point (punto de venta) assigned by AFIP to the issuing business.
///
/// Written verbatim into the barcode, so `"00001"` and `"1"` produce
/// different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SalePoint(String);

impl SalePoint {
    /// Create a sale point from its digit string.
    pub fn new(value: impl Into<String>) -> Result<Self, AfipError> {
        let value = value.into();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AfipError::InvalidSalePoint(value));
        }
        Ok(Self(value))
    }

    /// Create a sale point zero-padded to `width` digits (AFIP prints 4 or 5).
    pub fn padded(number: u32, width: usize) -> Self {
        Self(format!("{number:0>width$}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for SalePoint {
    fn from(number: u32) -> Self {
        Self(number.to_string())
    }
}

impl TryFrom<String> for SalePoint {
    type Error = AfipError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SalePoint> for String {
    fn from(sp: SalePoint) -> Self {
        sp.0
    }
}

impl fmt::Display for SalePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-wide AFIP configuration.
///
/// Built once at startup and handed to [`CodeComposer`](super::CodeComposer),
/// which never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfipConfig {
    /// Sale point identifier. Composition fails while this is unset.
    #[serde(default)]
    pub sale_point: Option<SalePoint>,
}

impl AfipConfig {
    /// Parse configuration from JSON, e.g. `{"sale_point": "00001"}`.
    pub fn from_json(json: &str) -> Result<Self, AfipError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured sale point.
    pub fn sale_point(&self) -> Result<&SalePoint, AfipError> {
        self.sale_point
            .as_ref()
            .ok_or(AfipError::MissingConfiguration("sale_point"))
    }
}

/// Builder for [`AfipConfig`].
///
/// # Example
///
/// ```
/// use afip_bill::{AfipConfigBuilder, SalePoint};
///
/// let config = AfipConfigBuilder::new()
///     .sale_point(SalePoint::padded(1, 5))
///     .build();
/// assert_eq!(config.sale_point().unwrap().as_str(), "00001");
/// ```
#[derive(Debug, Default)]
pub struct AfipConfigBuilder {
    config: AfipConfig,
}

impl AfipConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sale point.
    pub fn sale_point(mut self, sale_point: SalePoint) -> Self {
        self.config.sale_point = Some(sale_point);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AfipConfig {
        self.config
    }
}
