use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::AfipError;

/// Bill record as returned by the AFIP web service client.
///
/// Only the four fields that feed the barcode are typed. Everything else is
/// kept verbatim in [`extra`](Self::extra) for the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    /// Payer tax ID (CUIT), possibly with hyphens.
    #[serde(default, deserialize_with = "string_or_number")]
    pub doc_num: Option<String>,
    /// Document type code, e.g. "01". Must be a JSON string: a number
    /// would lose its leading zero.
    #[serde(default)]
    pub cbte_tipo: Option<String>,
    /// Electronic authorization code.
    #[serde(default, deserialize_with = "string_or_number")]
    pub cae: Option<String>,
    /// CAE due date as issued by AFIP (YYYYMMDD).
    #[serde(default, deserialize_with = "string_or_number")]
    pub fch_vto_pago: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BillRecord {
    /// Create a record with the four barcode fields set.
    pub fn new(
        doc_num: impl Into<String>,
        cbte_tipo: impl Into<String>,
        cae: impl Into<String>,
        fch_vto_pago: impl Into<String>,
    ) -> Self {
        Self {
            doc_num: Some(doc_num.into()),
            cbte_tipo: Some(cbte_tipo.into()),
            cae: Some(cae.into()),
            fch_vto_pago: Some(fch_vto_pago.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Parse a serialized bill record.
    pub fn from_json(json: &str) -> Result<Self, AfipError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attach an additional field for the rendering layer.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up an additional field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Parse `fch_vto_pago` as a calendar date.
    ///
    /// For display only: the barcode always uses the literal digits.
    pub fn cae_due_date(&self) -> Result<NaiveDate, AfipError> {
        let raw = required(&self.fch_vto_pago, "fch_vto_pago")?;
        NaiveDate::parse_from_str(raw, "%Y%m%d")
            .map_err(|_| AfipError::NonNumericField("fch_vto_pago"))
    }
}

/// Return the field value, failing if it is absent or empty.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, AfipError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AfipError::MissingField(name)),
    }
}

// AFIP clients emit some of these as JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bill_json() {
        let bill = BillRecord::from_json(
            r#"{"doc_num":"20-12345678-9","cbte_tipo":"01","cae":"61123456789012",
                "fch_vto_pago":"20240115","imp_total":121.0,"cbte_fch":"20240105"}"#,
        )
        .unwrap();
        assert_eq!(bill.doc_num.as_deref(), Some("20-12345678-9"));
        assert_eq!(bill.cbte_tipo.as_deref(), Some("01"));
        assert_eq!(bill.cae.as_deref(), Some("61123456789012"));
        assert_eq!(bill.fch_vto_pago.as_deref(), Some("20240115"));
        assert_eq!(bill.field("cbte_fch"), Some(&Value::from("20240105")));
        assert!(bill.field("imp_total").is_some());
    }

    #[test]
    fn numeric_fields_become_strings() {
        let bill = BillRecord::from_json(
            r#"{"doc_num":20123456789,"cbte_tipo":"06","cae":61123456789012,"fch_vto_pago":20240115}"#,
        )
        .unwrap();
        assert_eq!(bill.doc_num.as_deref(), Some("20123456789"));
        assert_eq!(bill.cae.as_deref(), Some("61123456789012"));
        assert_eq!(bill.fch_vto_pago.as_deref(), Some("20240115"));
    }

    #[test]
    fn numeric_document_type_rejected() {
        let err = BillRecord::from_json(
            r#"{"doc_num":"20123456789","cbte_tipo":1,"cae":"61123456789012","fch_vto_pago":"20240115"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AfipError::Json(_)));
    }

    #[test]
    fn missing_and_null_are_absent() {
        let bill = BillRecord::from_json(r#"{"cbte_tipo":null,"cae":null}"#).unwrap();
        assert_eq!(bill.doc_num, None);
        assert_eq!(bill.cbte_tipo, None);
        assert_eq!(bill.cae, None);
    }

    #[test]
    fn rejects_non_scalar_field() {
        let err = BillRecord::from_json(r#"{"cae":["1"]}"#).unwrap_err();
        assert!(matches!(err, AfipError::Json(_)));
    }

    #[test]
    fn cae_due_date_parses() {
        let bill = BillRecord::new("20123456789", "01", "1", "20240115");
        assert_eq!(
            bill.cae_due_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn cae_due_date_missing() {
        let bill = BillRecord::default();
        assert_eq!(
            bill.cae_due_date(),
            Err(AfipError::MissingField("fch_vto_pago"))
        );
    }

    #[test]
    fn required_rejects_empty() {
        assert_eq!(
            required(&Some(String::new()), "cae"),
            Err(AfipError::MissingField("cae"))
        );
        assert_eq!(required(&Some("1".into()), "cae"), Ok("1"));
    }
}
