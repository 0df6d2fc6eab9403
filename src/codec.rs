//! Conversion between raw wire buffers and native strings.
//!
//! The wire layer deals in UTF-8 byte buffers; everything above it deals in
//! `String`. Decoding is total: a buffer that is not valid UTF-8 comes back
//! with replacement characters rather than an error, so read accessors never
//! fail.

/// Decodes a raw wire buffer into an owned string.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Encodes text into a newly allocated wire buffer.
///
/// Absent and empty input both encode to `None`; the wire layer represents
/// "no buffer" and "empty buffer" the same way.
pub fn encode(text: Option<&str>) -> Option<Vec<u8>> {
    match text {
        None | Some("") => None,
        Some(s) => Some(s.as_bytes().to_vec()),
    }
}
