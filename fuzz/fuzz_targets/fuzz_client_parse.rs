#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let client = faktura_vat::client::parse_client(s);
        // re-parsing the canonical text must not panic either
        let _ = faktura_vat::client::parse_client(&faktura_vat::client::client_to_text(&client));
    }
});
