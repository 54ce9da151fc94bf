//! Input-validation edge cases for bill records and tax IDs.

use afip_bill::*;

fn composer() -> CodeComposer {
    CodeComposer::new(
        AfipConfigBuilder::new()
            .sale_point(SalePoint::padded(1, 5))
            .build(),
    )
}

fn bill() -> BillRecord {
    BillRecord::new("20-12345678-9", "01", "61123456789012", "20240115")
}

// ---------------------------------------------------------------------------
// Tax ID normalization
// ---------------------------------------------------------------------------

#[test]
fn hyphens_stripped() {
    assert_eq!(normalize_tax_id("20-12345678-9").unwrap(), "20123456789");
}

#[test]
fn surrounding_whitespace_trimmed_after_hyphens() {
    assert_eq!(normalize_tax_id(" 30-1-2 ").unwrap(), "3012");
    assert_eq!(normalize_tax_id("\t20123456789\n").unwrap(), "20123456789");
}

#[test]
fn internal_whitespace_rejected() {
    assert!(matches!(
        normalize_tax_id(" 30 -1-2 "),
        Err(AfipError::InvalidTaxId(_))
    ));
    assert!(matches!(
        normalize_tax_id("20 12345678 9"),
        Err(AfipError::InvalidTaxId(_))
    ));
}

#[test]
fn other_separators_rejected() {
    for raw in ["20.12345678.9", "20/12345678/9", "20_12345678_9"] {
        assert!(normalize_tax_id(raw).is_err(), "{raw} should be rejected");
    }
}

#[test]
fn non_ascii_digits_rejected() {
    // Arabic-Indic digits are not decimal digits for AFIP.
    assert!(normalize_tax_id("٢٠١٢").is_err());
}

#[test]
fn hyphen_only_tax_id_is_invalid_not_missing() {
    let mut b = bill();
    b.doc_num = Some("---".into());
    assert_eq!(
        composer().compose(&b),
        Err(AfipError::InvalidTaxId("---".into()))
    );
}

#[test]
fn empty_tax_id_is_missing() {
    let mut b = bill();
    b.doc_num = Some(String::new());
    assert_eq!(composer().compose(&b), Err(AfipError::MissingField("doc_num")));
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

#[test]
fn whitespace_in_cae_rejected() {
    let mut b = bill();
    b.cae = Some(" 61123456789012".into());
    assert_eq!(composer().compose(&b), Err(AfipError::NonNumericField("cae")));
}

#[test]
fn composer_does_not_check_document_type_table() {
    // Classification is a separate step; any numeric code composes.
    let mut b = bill();
    b.cbte_tipo = Some("11".into());
    assert!(composer().compose(&b).is_ok());
    assert!(classify("11").is_err());
}

#[test]
fn null_fields_in_json_are_missing() {
    let b = BillRecord::from_json(
        r#"{"doc_num":"20123456789","cbte_tipo":"01","cae":"1","fch_vto_pago":null}"#,
    )
    .unwrap();
    assert_eq!(
        composer().compose(&b),
        Err(AfipError::MissingField("fch_vto_pago"))
    );
}

#[test]
fn numeric_document_type_in_json_rejected() {
    let result = BillRecord::from_json(
        r#"{"doc_num":"20-12345678-9","cbte_tipo":1,"cae":"61123456789012","fch_vto_pago":"20240115"}"#,
    );
    assert!(matches!(result, Err(AfipError::Json(_))));
}

#[test]
fn one_digit_document_type_does_not_compose() {
    let mut b = bill();
    b.cbte_tipo = Some("1".into());
    assert_eq!(
        composer().compose(&b),
        Err(AfipError::UnknownDocumentType("1".into()))
    );
    assert_eq!(classify("1"), Err(AfipError::UnknownDocumentType("1".into())));
}

#[test]
fn unicode_whitespace_around_tax_id_rejected() {
    let mut b = bill();
    b.doc_num = Some("\u{a0}20123456789\u{3000}".into());
    assert!(matches!(composer().compose(&b), Err(AfipError::InvalidTaxId(_))));
}

#[test]
fn malformed_json_rejected() {
    assert!(matches!(
        BillRecord::from_json("{\"doc_num\":"),
        Err(AfipError::Json(_))
    ));
}

#[test]
fn prepare_fails_without_partial_document() {
    let mut b = bill();
    b.cae = None;
    let result = InvoiceDocument::prepare(&b, &composer(), CopyLabel::Original, vec![]);
    assert_eq!(result, Err(AfipError::MissingField("cae")));
}

#[test]
fn invalid_due_date_for_display() {
    let mut b = bill();
    b.fch_vto_pago = Some("20241399".into());
    assert!(b.cae_due_date().is_err());
    // The barcode only needs digits, not a calendar date.
    assert!(composer().compose(&b).is_ok());
}
