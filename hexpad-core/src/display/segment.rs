//! 7-segment encoding
//!
//! Patterns are MSB first: bit 7 = a, 6 = b, 5 = c, 4 = d, 3 = e, 2 = f,
//! 1 = g, 0 = decimal point.
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  .
//! ```

/// All segments off
pub const BLANK: u8 = 0x00;

/// Patterns for hex digits 0-F
pub const HEX_PATTERNS: [u8; 16] = [
    0xFC, // 0
    0x60, // 1
    0xDA, // 2
    0xF2, // 3
    0x66, // 4
    0xB6, // 5
    0xBE, // 6
    0xE0, // 7
    0xFE, // 8
    0xF6, // 9
    0xEE, // A
    0x3E, // b
    0x9C, // C
    0x7A, // d
    0x9E, // E
    0x8E, // F
];

/// Encode a nibble value (0-15)
pub const fn encode_nibble(value: u8) -> Option<u8> {
    if value < 16 {
        Some(HEX_PATTERNS[value as usize])
    } else {
        None
    }
}

/// Encode an ASCII character
///
/// Hex digits (either case) map to their pattern. Anything else, including
/// the buffer's blank sentinel, renders as [`BLANK`].
pub const fn encode_char(ch: u8) -> u8 {
    let value = match ch {
        b'0'..=b'9' => ch - b'0',
        b'A'..=b'F' => ch - b'A' + 10,
        b'a'..=b'f' => ch - b'a' + 10,
        _ => return BLANK,
    };
    match encode_nibble(value) {
        Some(pattern) => pattern,
        None => BLANK,
    }
}
