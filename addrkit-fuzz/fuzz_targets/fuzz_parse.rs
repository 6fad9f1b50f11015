#![no_main]

use addrkit_core::parse_address;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The parser only sees text
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // First two bytes double as the default port
    let default_port = match data {
        [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
        _ => 0,
    };

    let Ok(addr) = parse_address(input, default_port) else {
        return;
    };

    // Anything accepted must render, and the rendition must parse back to
    // the same text
    let text = addr.to_string();
    let again = parse_address(&text, addr.port()).expect("rendition must parse");
    assert_eq!(again.to_string(), text);
    assert_eq!(again.family(), addr.family());
    assert_eq!(again.size(), addr.size());
});
