//! Lookups between 6-bit values and alphabet symbols.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Marks bytes that are not alphabet symbols in [`REVERSE`].
const NOT_FOUND: u8 = 0xFF;

/// Inverse of [`ALPHABET_BYTES`], indexed by byte value. Used by the `const fn`
/// lookups; runtime decoding reads [`REVERSE_TABLE`].
const REVERSE: [u8; 256] = {
    let mut table = [NOT_FOUND; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

static REVERSE_TABLE: [u8; 256] = REVERSE;

/// Returns the symbol for a 6-bit value.
///
/// Only the low six bits of `value` are used, so every `u8` has a symbol.
///
/// # Example
///
/// ```
/// use atamp_base64::symbol_at;
///
/// assert_eq!(symbol_at(0), b'A');
/// assert_eq!(symbol_at(62), b'@');
/// assert_eq!(symbol_at(63), b'&');
/// ```
#[inline]
pub const fn symbol_at(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0x3F) as usize]
}

/// Returns the 6-bit value of an alphabet symbol, or `None` for any other
/// byte. The padding byte is not a symbol.
///
/// # Example
///
/// ```
/// use atamp_base64::index_of;
///
/// assert_eq!(index_of(b'T'), Some(0x13));
/// assert_eq!(index_of(b'&'), Some(63));
/// assert_eq!(index_of(b'+'), None);
/// assert_eq!(index_of(b'='), None);
/// ```
#[inline]
pub const fn index_of(symbol: u8) -> Option<u8> {
    match REVERSE[symbol as usize] {
        NOT_FOUND => None,
        value => Some(value),
    }
}

/// Returns `true` if `byte` is one of the 64 alphabet symbols.
#[inline]
pub const fn is_symbol(byte: u8) -> bool {
    REVERSE[byte as usize] != NOT_FOUND
}

/// Returns `true` if `byte` is the padding symbol `=`.
#[inline]
pub const fn is_padding(byte: u8) -> bool {
    byte == PAD_BYTE
}

/// Value of a byte already known to be a symbol.
#[inline]
pub(crate) fn sextet(symbol: u8) -> u8 {
    debug_assert!(is_symbol(symbol));
    REVERSE_TABLE[symbol as usize]
}
