use std::num::NonZeroUsize;

use charseq_codec::{RecordId, SequenceModel};
use charseq_core::{Code, Symbol};

use crate::diagnostics::DiagnosticKind;
use crate::validate::{
    max_length, max_length_i64, non_empty, record_index, sequence_length, symbol_code,
    symbol_codes,
};

fn kind_of(symbol: impl Into<Symbol>) -> DiagnosticKind {
    symbol_code(&symbol.into()).unwrap_err().kind
}

#[test]
fn single_chars_resolve() {
    assert_eq!(symbol_code(&'A'.into()), Ok(Code(65)));
    assert_eq!(symbol_code(&"é".into()), Ok(Code(0xE9)));
    assert_eq!(symbol_code(&65.into()), Ok(Code(65)));
    assert_eq!(symbol_code(&65535.into()), Ok(Code(65535)));
}

#[test]
fn digit_text_is_a_code() {
    assert_eq!(symbol_code(&"5".into()), Ok(Code(5)));
    assert_eq!(symbol_code(&"00065".into()), Ok(Code(65)));
}

#[test]
fn rejects_bad_text() {
    assert_eq!(kind_of(""), DiagnosticKind::SymbolNotSingleChar);
    assert_eq!(kind_of("ab"), DiagnosticKind::SymbolNotSingleChar);
    // two UTF-16 code units
    assert_eq!(kind_of("😀"), DiagnosticKind::SymbolNotSingleChar);
}

#[test]
fn rejects_out_of_range() {
    assert_eq!(kind_of(-1), DiagnosticKind::CodeOutOfRange);
    assert_eq!(kind_of(65536), DiagnosticKind::CodeOutOfRange);
    assert_eq!(kind_of("99999999999999999999999"), DiagnosticKind::CodeOutOfRange);
}

#[test]
fn rejects_invalid_shape() {
    let v = symbol_code(&Symbol::Invalid("true".to_owned())).unwrap_err();
    assert_eq!(v.kind, DiagnosticKind::InvalidSymbolType);
    assert_eq!(
        v.to_string(),
        "symbol must be a character or an integer: got true"
    );
}

#[test]
fn violation_message_uses_template() {
    let v = symbol_code(&"ab".into()).unwrap_err();
    assert_eq!(v.to_string(), "symbol \"ab\" must be exactly one character");

    let v = symbol_code(&70000.into()).unwrap_err();
    assert_eq!(v.to_string(), "code 70000 is outside 0..=65535");
}

#[test]
fn symbol_list_names_failing_position() {
    let symbols: Vec<Symbol> = vec!['a'.into(), "xy".into(), 'b'.into()];
    let v = symbol_codes(&symbols).unwrap_err();
    assert_eq!(v.kind, DiagnosticKind::SymbolNotSingleChar);
    assert_eq!(v.hint.as_deref(), Some("argument 1"));

    let symbols: Vec<Symbol> = vec!['a'.into(), 98.into()];
    assert_eq!(symbol_codes(&symbols), Ok(vec![Code(97), Code(98)]));
}

#[test]
fn max_length_must_be_positive() {
    assert_eq!(max_length(10), Ok(NonZeroUsize::new(10).unwrap()));
    assert_eq!(max_length(0).unwrap_err().kind, DiagnosticKind::InvalidMaxLength);
    assert_eq!(max_length_i64(-3).unwrap_err().kind, DiagnosticKind::InvalidMaxLength);
    assert_eq!(max_length_i64(3), Ok(NonZeroUsize::new(3).unwrap()));
}

#[test]
fn sequence_length_limit() {
    let max = NonZeroUsize::new(10);
    assert!(sequence_length(10, max).is_ok());
    assert!(sequence_length(1000, None).is_ok());

    let v = sequence_length(15, max).unwrap_err();
    assert_eq!(v.kind, DiagnosticKind::SequenceTooLong);
    assert_eq!(v.span, Some(10..15));
    assert_eq!(
        v.to_string(),
        "sequence exceeds maximum length: length 15, maximum 10"
    );
}

#[test]
fn empty_check() {
    assert_eq!(non_empty(0).unwrap_err().kind, DiagnosticKind::EmptySequence);
    assert!(non_empty(1).is_ok());
}

#[test]
fn record_lookup() {
    let mut model = SequenceModel::new();
    let id = model.append(Code(65), vec![]);
    assert_eq!(record_index(&model, id), Ok(0));

    let missing = RecordId::new(42).unwrap();
    let v = record_index(&model, missing).unwrap_err();
    assert_eq!(v.kind, DiagnosticKind::RecordNotFound);
    assert_eq!(v.to_string(), "no operation record with id 42");
}
