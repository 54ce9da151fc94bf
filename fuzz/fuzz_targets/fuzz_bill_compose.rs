#![no_main]

use afip_bill::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(bill) = BillRecord::from_json(s) {
            let composer = CodeComposer::new(
                AfipConfigBuilder::new().sale_point(SalePoint::from(1)).build(),
            );
            if let Ok(payload) = composer.compose(&bill) {
                assert_eq!(payload.len() % 2, 0);
                let _ = afip_bill::barcode::Interleaved2of5::encode(&payload);
            }
        }
    }
});
