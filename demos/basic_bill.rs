use afip_bill::barcode::BarcodeCache;
use afip_bill::*;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure once at startup
    let config = AfipConfig::from_json(r#"{"sale_point": "00001"}"#).expect("valid config");
    let composer = CodeComposer::new(config);

    // Bill as returned by the AFIP web service client
    let bill = BillRecord::from_json(
        r#"{
            "doc_num": "20-12345678-9",
            "cbte_tipo": "01",
            "cae": "61123456789012",
            "fch_vto_pago": "20240115",
            "imp_total": 121.0
        }"#,
    )
    .expect("valid bill JSON");

    let lines = vec![LineItem::new("Abono mensual", dec!(1), dec!(100))];
    let mut cache = BarcodeCache::default();

    for copy in [CopyLabel::Original, CopyLabel::Duplicado] {
        match InvoiceDocument::prepare(&bill, &composer, copy, lines.clone()) {
            Ok(doc) => {
                let barcode = cache.get_or_encode(&doc.barcode);
                println!("=== {} ({}) ===", doc.label, doc.header_text);
                println!("  Template: {}", doc.template);
                println!("  Code:     {}", doc.canonical_code);
                println!("  Barcode:  {}", doc.barcode);
                println!("  Modules:  {}", barcode.width());
                println!("  Total:    {}", doc.totals.gross);
            }
            Err(e) => println!("  Cannot prepare bill: {e}"),
        }
    }

    // Unknown document types are rejected before rendering
    match classify("02") {
        Ok(category) => println!("category {category}"),
        Err(e) => println!("\nRejected: {e}"),
    }
}
