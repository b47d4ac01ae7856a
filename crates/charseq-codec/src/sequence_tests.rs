use charseq_core::Code;

use crate::{Sequence, SequenceError};

#[test]
fn from_str_counts_code_units() {
    let seq = Sequence::from("Aa😀");
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.as_units()[0], 65);
    assert_eq!(seq, "Aa😀");
}

#[test]
fn lone_surrogate_survives_as_unit() {
    let seq: Sequence = [Code(65), Code(0xD800), Code(97)].into_iter().collect();
    assert_eq!(seq.len(), 3);
    assert_eq!(
        seq.try_to_string(),
        Err(SequenceError::LoneSurrogate {
            index: 1,
            unit: 0xD800
        })
    );
    assert_eq!(seq.to_string_lossy(), "A\u{FFFD}a");
}

#[test]
fn paired_surrogates_convert() {
    let seq = Sequence::from("x😀");
    assert_eq!(seq.try_to_string().unwrap(), "x😀");
}

#[test]
fn error_message() {
    let err = SequenceError::LoneSurrogate {
        index: 3,
        unit: 0xDC00,
    };
    insta::assert_snapshot!(err.to_string(), @"lone surrogate 0xdc00 at position 3");
}

#[test]
fn debug_shows_text() {
    insta::assert_snapshot!(format!("{:?}", Sequence::from("Ab")), @r#"Sequence("Ab")"#);
}
