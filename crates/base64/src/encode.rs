//! Encoding bytes to text.

use crate::alphabet::symbol_at;
use crate::constants::PAD_BYTE;

/// Length of the encoding of `n` bytes: `4 * ceil(n / 3)`.
///
/// # Example
///
/// ```
/// use atamp_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
#[inline]
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Encodes a byte slice, padding the final group with `=`.
///
/// # Example
///
/// ```
/// use atamp_base64::encode;
///
/// assert_eq!(encode(b""), "");
/// assert_eq!(encode(b"Man"), "TWFu");
/// assert_eq!(encode(b"M"), "TQ==");
/// assert_eq!(encode(&[0xFB, 0xFF]), "@&8=");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    encode_groups(bytes, |symbol| out.push(symbol as char));
    out
}

/// Encodes the UTF-8 bytes of a string.
///
/// # Example
///
/// ```
/// use atamp_base64::encode_str;
///
/// assert_eq!(encode_str("hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode_str(text: &str) -> String {
    encode(text.as_bytes())
}

/// Encodes `src` into `dest` starting at `offset`.
///
/// Returns the position in `dest` just past the last written symbol.
///
/// # Panics
///
/// Panics if `dest` is shorter than `offset + encoded_len(src.len())`.
///
/// # Example
///
/// ```
/// use atamp_base64::encode_into;
///
/// let mut dest = [0u8; 12];
/// let end = encode_into(b"hello", &mut dest, 4);
/// assert_eq!(&dest[4..end], b"aGVsbG8=");
/// ```
pub fn encode_into(src: &[u8], dest: &mut [u8], offset: usize) -> usize {
    let out = &mut dest[offset..offset + encoded_len(src.len())];
    let mut pos = 0;
    encode_groups(src, |symbol| {
        out[pos] = symbol;
        pos += 1;
    });
    offset + pos
}

/// Emits the symbols for `bytes` in order.
fn encode_groups(bytes: &[u8], mut emit: impl FnMut(u8)) {
    let mut groups = bytes.chunks_exact(3);
    for group in &mut groups {
        let (b0, b1, b2) = (group[0], group[1], group[2]);
        emit(symbol_at((b0 & 0xFC) >> 2));
        emit(symbol_at(((b0 & 0x03) << 4) | ((b1 & 0xF0) >> 4)));
        emit(symbol_at(((b1 & 0x0F) << 2) | ((b2 & 0xC0) >> 6)));
        emit(symbol_at(b2 & 0x3F));
    }

    match *groups.remainder() {
        [b0, b1] => {
            emit(symbol_at((b0 & 0xFC) >> 2));
            emit(symbol_at(((b0 & 0x03) << 4) | ((b1 & 0xF0) >> 4)));
            emit(symbol_at((b1 & 0x0F) << 2));
            emit(PAD_BYTE);
        }
        [b0] => {
            emit(symbol_at((b0 & 0xFC) >> 2));
            emit(symbol_at((b0 & 0x03) << 4));
            emit(PAD_BYTE);
            emit(PAD_BYTE);
        }
        _ => {}
    }
}
