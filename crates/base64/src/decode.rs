//! Decoding text back to bytes.

use crate::alphabet::{is_padding, sextet};
use crate::validate::padding_len;
use crate::{DecodeError, DecodeUtf8Error};

/// Decodes an encoded string.
///
/// The input is validated in full before any byte is produced.
///
/// # Errors
///
/// Returns the [`DecodeError`] reported by [`validate`](crate::validate).
///
/// # Example
///
/// ```
/// use atamp_base64::{decode, DecodeError};
///
/// assert_eq!(decode("TWFu").unwrap(), b"Man");
/// assert_eq!(decode("@&8=").unwrap(), [0xFB, 0xFF]);
/// assert!(matches!(decode("TWFu!"), Err(DecodeError::InvalidLength { .. })));
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    decode_bin(text.as_bytes())
}

/// Decodes encoded bytes. Same contract as [`decode`].
///
/// # Example
///
/// ```
/// use atamp_base64::decode_bin;
///
/// assert_eq!(decode_bin(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode_bin(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let padding = padding_len(input)?;
    let mut out = Vec::with_capacity(output_len(input.len(), padding));
    decode_groups(input, |byte| out.push(byte));
    Ok(out)
}

/// Decodes an encoded string and interprets the bytes as UTF-8.
///
/// # Example
///
/// ```
/// use atamp_base64::decode_to_string;
///
/// assert_eq!(decode_to_string("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
/// ```
pub fn decode_to_string(text: &str) -> Result<String, DecodeUtf8Error> {
    let bytes = decode(text)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decodes `input` into `dest` starting at `offset`.
///
/// Returns the position in `dest` just past the last written byte. When the
/// input is invalid nothing is written.
///
/// # Panics
///
/// Panics if `dest` is shorter than `offset` plus the decoded length.
///
/// # Example
///
/// ```
/// use atamp_base64::decode_into;
///
/// let mut dest = [0u8; 8];
/// let end = decode_into(b"aGVsbG8=", &mut dest, 2).unwrap();
/// assert_eq!(&dest[2..end], b"hello");
/// ```
pub fn decode_into(input: &[u8], dest: &mut [u8], offset: usize) -> Result<usize, DecodeError> {
    let padding = padding_len(input)?;
    let out = &mut dest[offset..offset + output_len(input.len(), padding)];
    let mut pos = 0;
    decode_groups(input, |byte| {
        out[pos] = byte;
        pos += 1;
    });
    Ok(offset + pos)
}

/// Exact number of bytes `input` decodes to.
///
/// # Example
///
/// ```
/// use atamp_base64::decoded_len;
///
/// assert_eq!(decoded_len(b"").unwrap(), 0);
/// assert_eq!(decoded_len(b"TQ==").unwrap(), 1);
/// assert_eq!(decoded_len(b"TWFuTWE=").unwrap(), 5);
/// ```
pub fn decoded_len(input: &[u8]) -> Result<usize, DecodeError> {
    let padding = padding_len(input)?;
    Ok(output_len(input.len(), padding))
}

#[inline]
fn output_len(length: usize, padding: usize) -> usize {
    length / 4 * 3 - padding
}

/// Emits the bytes for validated `input`. Padding can only occur in the last group.
fn decode_groups(input: &[u8], mut emit: impl FnMut(u8)) {
    for group in input.chunks_exact(4) {
        let v0 = sextet(group[0]);
        let v1 = sextet(group[1]);
        emit((v0 << 2) | (v1 >> 4));
        if is_padding(group[2]) {
            break;
        }

        let v2 = sextet(group[2]);
        emit(((v1 & 0x0F) << 4) | (v2 >> 2));
        if is_padding(group[3]) {
            break;
        }

        let v3 = sextet(group[3]);
        emit(((v2 & 0x03) << 6) | v3);
    }
}
