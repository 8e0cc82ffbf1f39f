/// The codec alphabet: `A-Z`, `a-z`, `0-9`, then `@` (62) and `&` (63).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@&";

/// The alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@&";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';
