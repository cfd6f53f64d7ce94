// libpn532/src/protocol/parser.rs

//! Bounds-checked readers for response payloads. Every decoder goes
//! through these so a short chip reply becomes `Error::Malformed` rather
//! than a panic.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::Malformed(format!(
            "response too short: expected at least {} bytes, got {}",
            min,
            data.len()
        )));
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a length byte at `idx` and return the slice it declares right
/// after it. A declared length running past the end is malformed.
pub fn length_prefixed_at(data: &[u8], idx: usize) -> Result<&[u8]> {
    let len = byte_at(data, idx)? as usize;
    let remaining = data.len().saturating_sub(idx + 1);
    if len > remaining {
        return Err(Error::Malformed(format!(
            "declared length {} exceeds remaining {} bytes",
            len, remaining
        )));
    }
    Ok(&data[idx + 1..idx + 1 + len])
}

/// Ensure the first byte (echoed response code) equals `expected`.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedOpcode { expected, actual });
    }
    Ok(())
}
