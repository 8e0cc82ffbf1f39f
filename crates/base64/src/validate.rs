//! Structural validation of encoded input.

use crate::alphabet::{is_padding, is_symbol};
use crate::DecodeError;

/// Most padding bytes a group may end with.
const MAX_PADDING: usize = 2;

/// Validate an encoded string.
///
/// # Errors
///
/// Returns an error if:
/// - The length is not a multiple of 4
/// - A byte outside the alphabet appears before the trailing padding
/// - Padding appears anywhere but the last one or two positions
///
/// # Example
///
/// ```
/// use atamp_base64::{validate, DecodeError};
///
/// validate("").unwrap();
/// validate("TQ==").unwrap();
/// assert_eq!(validate("TQ="), Err(DecodeError::InvalidLength { length: 3 }));
/// assert_eq!(validate("T=Q="), Err(DecodeError::MisplacedPadding { index: 1 }));
/// ```
pub fn validate(text: &str) -> Result<(), DecodeError> {
    validate_bin(text.as_bytes())
}

/// Validate encoded bytes. Same rules as [`validate`].
pub fn validate_bin(input: &[u8]) -> Result<(), DecodeError> {
    padding_len(input).map(|_| ())
}

/// Validates `input` and returns the length of its trailing padding run.
pub(crate) fn padding_len(input: &[u8]) -> Result<usize, DecodeError> {
    let length = input.len();
    if length % 4 != 0 {
        return Err(DecodeError::InvalidLength { length });
    }

    let padding = input.iter().rev().take_while(|&&b| is_padding(b)).count();
    let body = length - padding;
    if padding > MAX_PADDING {
        return Err(DecodeError::MisplacedPadding { index: body });
    }

    for (index, &byte) in input[..body].iter().enumerate() {
        if is_symbol(byte) {
            continue;
        }
        if is_padding(byte) {
            return Err(DecodeError::MisplacedPadding { index });
        }
        return Err(DecodeError::InvalidSymbol { index, byte });
    }

    Ok(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty() {
        assert_eq!(padding_len(b""), Ok(0));
    }

    #[test]
    fn test_validate_padding_counts() {
        assert_eq!(padding_len(b"TWFu"), Ok(0));
        assert_eq!(padding_len(b"TWE="), Ok(1));
        assert_eq!(padding_len(b"TQ=="), Ok(2));
        assert_eq!(padding_len(b"TWFuTQ=="), Ok(2));
    }

    #[test]
    fn test_validate_length() {
        for length in [1, 2, 3, 5, 6, 7, 9] {
            let input = "A".repeat(length);
            assert_eq!(
                validate(&input),
                Err(DecodeError::InvalidLength { length })
            );
        }
    }

    #[test]
    fn test_validate_unknown_symbol() {
        assert_eq!(
            validate("TW+u"),
            Err(DecodeError::InvalidSymbol { index: 2, byte: b'+' })
        );
        assert_eq!(
            validate("TWFuTW/="),
            Err(DecodeError::InvalidSymbol { index: 6, byte: b'/' })
        );
    }

    #[test]
    fn test_validate_non_ascii() {
        // 'é' is two UTF-8 bytes, so the byte length is 4.
        assert_eq!(
            validate("éAA"),
            Err(DecodeError::InvalidSymbol { index: 0, byte: 0xC3 })
        );
    }

    #[test]
    fn test_validate_padding_too_long() {
        assert_eq!(validate("A==="), Err(DecodeError::MisplacedPadding { index: 1 }));
        assert_eq!(validate("===="), Err(DecodeError::MisplacedPadding { index: 0 }));
        assert_eq!(
            validate("TWFu===="),
            Err(DecodeError::MisplacedPadding { index: 4 })
        );
    }

    #[test]
    fn test_validate_padding_inside_last_group() {
        assert_eq!(validate("T=QA"), Err(DecodeError::MisplacedPadding { index: 1 }));
        assert_eq!(validate("TQ=A"), Err(DecodeError::MisplacedPadding { index: 2 }));
        assert_eq!(validate("T=Q="), Err(DecodeError::MisplacedPadding { index: 1 }));
    }

    #[test]
    fn test_validate_padding_in_earlier_group() {
        assert_eq!(
            validate("TQ==TWFu"),
            Err(DecodeError::MisplacedPadding { index: 2 })
        );
        assert_eq!(
            validate("TWE=TQ=="),
            Err(DecodeError::MisplacedPadding { index: 3 })
        );
    }

    #[test]
    fn test_validate_reports_first_failure() {
        assert_eq!(
            validate("T=!A"),
            Err(DecodeError::MisplacedPadding { index: 1 })
        );
        assert_eq!(
            validate("T!=A"),
            Err(DecodeError::InvalidSymbol { index: 1, byte: b'!' })
        );
    }
}
