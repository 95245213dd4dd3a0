#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse errors are fine; a validated document must compute without panicking.
        if let Ok(doc) = lekha::json::document_from_json(s) {
            if lekha::validate_document(&doc).is_empty() {
                let breakdown = lekha::compute(&doc);
                assert!(lekha::validate_breakdown(&doc, &breakdown).is_empty());
                let _ = lekha::upi::upi_payment_uri(&doc, &breakdown);
            }
        }
    }
});
