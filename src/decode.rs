//! UTF-8 decoding into the codepoint sequences that measurement, layout and drawing work
//! on.
//!
//! Decoding never fails. Any byte that cannot begin or continue a well-formed sequence
//! (a stray continuation byte, a truncated sequence, an overlong form, an encoded
//! surrogate or a value past U+10FFFF) becomes a single [`REPLACEMENT`] and the decoder
//! resumes at the very next byte.

/// The codepoint substituted for malformed input
pub const REPLACEMENT: char = '\u{FFFD}';

/// Decode a byte string into codepoints, replacing every malformed byte with
/// [`REPLACEMENT`]
pub fn decode(bytes: &[u8]) -> Vec<char> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match decode_one(&bytes[i..]) {
            Some((ch, len)) => {
                out.push(ch);
                i += len;
            }
            None => {
                out.push(REPLACEMENT);
                i += 1;
            }
        }
    }
    out
}

/// Encode codepoints back into UTF-8
pub fn encode(codepoints: &[char]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codepoints.iter().map(|c| c.len_utf8()).sum());
    let mut buf = [0u8; 4];
    for ch in codepoints {
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }
    out
}

/// The number of bytes a sequence starting with `lead` claims to occupy, or [None] if
/// `lead` cannot start a sequence
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        // continuation bytes, overlong two-byte leads and leads past U+10FFFF
        _ => None,
    }
}

fn decode_one(bytes: &[u8]) -> Option<(char, usize)> {
    let lead = *bytes.first()?;
    let len = sequence_len(lead)?;
    if bytes.len() < len {
        return None;
    }

    let mut value: u32 = match len {
        1 => return Some((lead as char, 1)),
        2 => (lead & 0x1f) as u32,
        3 => (lead & 0x0f) as u32,
        _ => (lead & 0x07) as u32,
    };
    for &b in &bytes[1..len] {
        if b & 0xc0 != 0x80 {
            return None;
        }
        value = (value << 6) | (b & 0x3f) as u32;
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < min {
        return None;
    }

    // rejects surrogates and anything past U+10FFFF
    char::from_u32(value).map(|ch| (ch, len))
}
