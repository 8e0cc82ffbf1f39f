//! Tests for validation (validate, validate_bin).

use atamp_base64::{encode, validate, validate_bin, DecodeError};

#[test]
fn accepts_encoder_output() {
    for n in 0..32 {
        let blob: Vec<u8> = (0..n).map(|i| (i * 37) as u8).collect();
        assert_eq!(validate(&encode(&blob)), Ok(()));
    }
}

#[test]
fn rejects_length_five() {
    assert_eq!(validate("TWFuT"), Err(DecodeError::InvalidLength { length: 5 }));
}

#[test]
fn rejects_unknown_symbol() {
    assert_eq!(
        validate_bin(b"TW\0u"),
        Err(DecodeError::InvalidSymbol { index: 2, byte: 0 })
    );
}

#[test]
fn rejects_padding_outside_last_positions() {
    let cases = [
        ("=AAA", 0),
        ("A=AA", 1),
        ("AA=A", 2),
        ("A===", 1),
        ("AA==AAAA", 2),
        ("AAAAAAA=AAAA", 7),
    ];
    for (text, index) in cases {
        assert_eq!(
            validate(text),
            Err(DecodeError::MisplacedPadding { index }),
            "Failed for {}",
            text
        );
    }
}

#[test]
fn accepts_trailing_padding() {
    for text in ["", "AA==", "AAA=", "AAAA", "AAAAAA==", "AAAAAAA="] {
        assert_eq!(validate(text), Ok(()), "Failed for {}", text);
    }
}
