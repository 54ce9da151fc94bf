#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(full) = afip_bill::append_check_digit(s) {
            assert!(s.is_empty() || afip_bill::verify_check_digit(&full));
        }
    }
});
