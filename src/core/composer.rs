use std::fmt;

use serde::Serialize;

use super::bill::{BillRecord, required};
use super::check_digit::append_check_digit;
use super::config::AfipConfig;
use super::error::AfipError;

/// CUIT ‖ cbte_tipo ‖ sale point ‖ CAE ‖ CAE due date, with no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalCode(String);

/// Digit string handed to the Interleaved 2 of 5 encoder.
///
/// Always an even number of decimal digits: the canonical code, its check
/// digit, and a leading `0` when that would otherwise be odd.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BarcodePayload(String);

impl CanonicalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl BarcodePayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for BarcodePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the barcode payload for bill records.
///
/// Holds the immutable process configuration; composing is a pure function
/// of the bill and that configuration, so one composer can be shared freely.
///
/// ```
/// use afip_bill::*;
///
/// let composer = CodeComposer::new(
///     AfipConfigBuilder::new().sale_point(SalePoint::new("00001").unwrap()).build(),
/// );
/// let bill = BillRecord::new("20-12345678-9", "01", "61123456789012", "20240115");
/// let payload = composer.compose(&bill).unwrap();
/// assert_eq!(payload.as_str(), "020123456789010000161123456789012202401153");
/// ```
#[derive(Debug, Clone)]
pub struct CodeComposer {
    config: AfipConfig,
}

impl CodeComposer {
    pub fn new(config: AfipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AfipConfig {
        &self.config
    }

    /// Concatenate the five fiscal fields in protocol order.
    pub fn canonical_code(&self, bill: &BillRecord) -> Result<CanonicalCode, AfipError> {
        let sale_point = self.config.sale_point()?;

        let cuit = normalize_tax_id(required(&bill.doc_num, "doc_num")?)?;
        let cbte_tipo = document_type_field(&bill.cbte_tipo)?;
        let cae = digits_field(&bill.cae, "cae")?;
        let due = digits_field(&bill.fch_vto_pago, "fch_vto_pago")?;

        let mut code = String::with_capacity(
            cuit.len() + cbte_tipo.len() + sale_point.as_str().len() + cae.len() + due.len(),
        );
        code.push_str(&cuit);
        code.push_str(cbte_tipo);
        code.push_str(sale_point.as_str());
        code.push_str(cae);
        code.push_str(due);
        Ok(CanonicalCode(code))
    }

    /// Produce the final barcode payload for a bill.
    ///
    /// All-or-nothing: any invalid input fails the whole composition.
    pub fn compose(&self, bill: &BillRecord) -> Result<BarcodePayload, AfipError> {
        self.compose_with_code(bill).map(|(_, payload)| payload)
    }

    /// Like [`compose`](Self::compose), also returning the canonical code.
    pub fn compose_with_code(
        &self,
        bill: &BillRecord,
    ) -> Result<(CanonicalCode, BarcodePayload), AfipError> {
        let code = self.canonical_code(bill).inspect_err(|err| {
            tracing::warn!(error = %err, "bill rejected for barcode composition");
        })?;
        let payload = payload_for(&code)?;
        tracing::debug!(
            cbte_tipo = bill.cbte_tipo.as_deref().unwrap_or_default(),
            digits = payload.len(),
            "composed barcode payload"
        );
        Ok((code, payload))
    }
}

/// Append the check digit to a canonical code and pad to even length.
pub fn payload_for(code: &CanonicalCode) -> Result<BarcodePayload, AfipError> {
    let with_check = append_check_digit(code.as_str())?;
    Ok(BarcodePayload(pad_even(with_check)))
}

/// Prepend a `0` if `digits` has odd length.
pub fn pad_even(digits: String) -> String {
    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(&digits);
        padded
    } else {
        digits
    }
}

/// Strip hyphens and surrounding ASCII whitespace from a CUIT.
///
/// Internal whitespace and non-ASCII spaces are not removed and make the
/// tax ID invalid.
pub fn normalize_tax_id(doc_num: &str) -> Result<String, AfipError> {
    let without_hyphens = doc_num.replace('-', "");
    let trimmed = without_hyphens.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AfipError::InvalidTaxId(doc_num.to_string()));
    }
    Ok(trimmed.to_string())
}

// Any two digits compose; membership in the known table is checked by `classify`.
fn document_type_field(value: &Option<String>) -> Result<&str, AfipError> {
    let v = digits_field(value, "cbte_tipo")?;
    if v.len() != 2 {
        return Err(AfipError::UnknownDocumentType(v.to_string()));
    }
    Ok(v)
}

fn digits_field<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, AfipError> {
    let v = required(value, name)?;
    if !v.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AfipError::NonNumericField(name));
    }
    Ok(v)
}
