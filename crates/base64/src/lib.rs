//! Base64 encoding and decoding over a fixed alphabet.
//!
//! The alphabet is `A-Z`, `a-z`, `0-9`, `@`, `&` with `=` padding. It differs
//! from RFC 4648 only in the last two symbols, so standard base64 text that
//! contains `+` or `/` is rejected.
//!
//! Decoding is strict: the whole input is validated before any byte is
//! produced, and the error says which rule failed and where.
//!
//! # Example
//!
//! ```
//! use atamp_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod validate;

use std::string::FromUtf8Error;
use thiserror::Error;

pub use alphabet::{index_of, is_padding, is_symbol, symbol_at};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decode_bin, decode_into, decode_to_string, decoded_len};
pub use encode::{encode, encode_into, encode_str, encoded_len};
pub use validate::{validate, validate_bin};

/// Error type for decoding. Positions are byte offsets into the input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input length is not a multiple of 4.
    #[error("INVALID_LENGTH: {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A byte outside the alphabet appears before the trailing padding.
    #[error("INVALID_SYMBOL: byte 0x{byte:02X} at {index}")]
    InvalidSymbol { index: usize, byte: u8 },
    /// Padding appears somewhere other than the last one or two positions.
    #[error("MISPLACED_PADDING: at {index}")]
    MisplacedPadding { index: usize },
}

/// Error type for [`decode_to_string`].
#[derive(Debug, Error)]
pub enum DecodeUtf8Error {
    /// The input is not valid encoded text.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
