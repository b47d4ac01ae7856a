use crate::{Symbol, SymbolType, classify, resolve_to_code};

#[test]
fn single_char_is_string_char() {
    assert_eq!(classify(&Symbol::from("A")), SymbolType::StringChar);
    assert_eq!(resolve_to_code(&Symbol::from("A")), Some(65));
}

#[test]
fn digit_string_is_integer() {
    // "5" is code 5, not the character '5' (code 53)
    let five = Symbol::from("5");
    assert_eq!(classify(&five), SymbolType::Integer);
    assert_eq!(resolve_to_code(&five), Some(5));

    assert_eq!(resolve_to_code(&Symbol::from("0065")), Some(65));
}

#[test]
fn digit_char_is_integer() {
    assert_eq!(classify(&Symbol::from('7')), SymbolType::Integer);
    assert_eq!(resolve_to_code(&Symbol::from('7')), Some(7));
}

#[test]
fn oversized_digit_string_saturates() {
    let huge = Symbol::from("99999999999999999999999");
    assert_eq!(resolve_to_code(&huge), Some(i64::MAX));
}

#[test]
fn multi_char_text_resolves_first_unit() {
    let sym = Symbol::from("ab");
    assert_eq!(classify(&sym), SymbolType::StringChar);
    assert_eq!(sym.utf16_len(), Some(2));
    assert_eq!(resolve_to_code(&sym), Some(97));
}

#[test]
fn astral_char_is_two_units() {
    let sym = Symbol::from('😀');
    assert_eq!(sym.utf16_len(), Some(2));
    assert_eq!(resolve_to_code(&sym), Some(0xD83D));
}

#[test]
fn empty_text_has_no_code() {
    let sym = Symbol::from("");
    assert_eq!(classify(&sym), SymbolType::StringChar);
    assert_eq!(resolve_to_code(&sym), None);
}

#[test]
fn integers_pass_through() {
    assert_eq!(classify(&Symbol::from(70_000)), SymbolType::Integer);
    assert_eq!(resolve_to_code(&Symbol::from(-3)), Some(-3));
}

#[test]
fn from_json_shapes() {
    use serde_json::json;

    assert_eq!(Symbol::from_json(&json!("x")), Symbol::from("x"));
    assert_eq!(Symbol::from_json(&json!(12)), Symbol::Int(12));
    assert_eq!(classify(&Symbol::from_json(&json!(1.5))), SymbolType::Invalid);
    assert_eq!(classify(&Symbol::from_json(&json!(true))), SymbolType::Invalid);
    assert_eq!(resolve_to_code(&Symbol::from_json(&json!(null))), None);
}

#[test]
fn display() {
    insta::assert_snapshot!(Symbol::from("a").to_string(), @r#""a""#);
    insta::assert_snapshot!(Symbol::from(42).to_string(), @"42");
}
