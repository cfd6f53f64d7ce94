//! Hexadecimal helpers used for frame logging and card identifiers.
//!
//! Output is uppercase, matching how card UIDs and chip frames are usually
//! printed in reader datasheets.

use std::fmt::Write;

/// Render bytes as contiguous uppercase hex.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing into a String cannot fail
        let _ = write!(s, "{:02X}", b);
        s
    })
}

/// Render bytes as uppercase hex separated by single spaces, the layout
/// used in frame-level debug logs.
///
/// Example: `&[0x00, 0xff]` -> `"00 FF"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string such as `"00 00 FF 00 FF 00"` into bytes. ASCII
/// whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
